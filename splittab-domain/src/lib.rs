#![warn(clippy::uninlined_format_args)]

pub mod ledger;
pub mod model;
mod services;

pub use ledger::{BalanceIndex, DebtGraph, Ledger, SettlementQueue};
pub use model::{
    DebtEdge, ExpenseRecord, Money, Participant, PendingSettlement, SettlementOutcome, ShareEntry,
};
