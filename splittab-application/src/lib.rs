#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod input;
pub mod ledger_service;
pub mod model;
pub mod ports;

pub use error::InputError;
pub use ledger_service::LedgerService;
pub use model::{Command, CommandOutcome, DebtGroup, PersonBalance};
pub use ports::Console;
