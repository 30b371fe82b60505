use thiserror::Error;

/// Rejected raw console input. The ledger operations themselves never fail;
/// everything here is caught at the menu boundary before a command is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid menu choice '{0}'")]
    InvalidChoice(String),
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("invalid sharer count '{0}'")]
    InvalidCount(String),
}
