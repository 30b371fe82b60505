#![warn(clippy::uninlined_format_args)]

pub mod balance_presenter;
pub mod debt_graph_presenter;
pub mod expense_presenter;
pub mod settlement_presenter;

pub use balance_presenter::BalancePresenter;
pub use debt_graph_presenter::DebtGraphPresenter;
pub use expense_presenter::ExpensePresenter;
pub use settlement_presenter::SettlementPresenter;

use splittab_domain::Money;

/// Monetary display format: two decimals, everywhere.
pub(crate) fn money(value: Money) -> String {
    format!("{:.2}", value.amount())
}
