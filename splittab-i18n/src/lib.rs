#![warn(clippy::uninlined_format_args)]

//! User-facing display strings for the expense splitter.

use std::fmt::Display;

pub const MENU: &str = "\n--- Expense Splitter ---\n\
1. Add Expense\n\
2. Print Expenses\n\
3. Add Settlement\n\
4. View User Balances\n\
5. Process Settlement\n\
6. View Debt Graph\n\
7. View Pending Settlements\n\
8. Exit";

pub const PROMPT_CHOICE: &str = "Enter your choice: ";
pub const PROMPT_DESCRIPTION: &str = "\nEnter expense description: ";
pub const PROMPT_TOTAL: &str = "Enter total amount: ";
pub const PROMPT_PAYER: &str = "Enter who paid (user): ";
pub const PROMPT_SHARER_COUNT: &str = "How many users are splitting the expense? ";
pub const PROMPT_SETTLEMENT_FROM: &str = "\nEnter the user who will pay: ";
pub const PROMPT_SETTLEMENT_TO: &str = "Enter the user to receive the payment: ";
pub const PROMPT_SETTLEMENT_AMOUNT: &str = "Enter the amount to settle: ";

pub const EXPENSE_ADDED: &str = "Expense added successfully.";
pub const SETTLEMENT_QUEUED: &str = "Settlement added to queue.";
pub const PROCESSING_SETTLEMENTS: &str = "\nProcessing settlements...";
pub const USER_BALANCES_HEADING: &str = "\nUser Balances:";
pub const DEBT_GRAPH_HEADING: &str = "\nDebt Graph:";
pub const SPLIT_AMONG_HEADING: &str = "Split among:";

pub const NO_EXPENSES_RECORDED: &str = "No expenses recorded.";
pub const NO_BALANCES_RECORDED: &str = "No balances recorded.";
pub const NO_DEBTS_RECORDED: &str = "No debts recorded.";
pub const NO_SETTLEMENTS_TO_PROCESS: &str = "No settlements to process.";
pub const NO_SETTLEMENTS_IN_QUEUE: &str = "No settlements in the queue.";

pub const INVALID_CHOICE: &str = "Invalid choice. Try again.";
pub const EXITING: &str = "Exiting...";

pub fn prompt_sharer_name(index: usize) -> String {
    format!("Enter user {index} name: ")
}

pub fn expense_heading(description: impl Display) -> String {
    format!("\n--- Expense: {description} ---")
}

pub fn paid_by_line(amount: impl Display, payer: impl Display) -> String {
    format!("Amount: {amount} paid by {payer}")
}

pub fn owes_line(name: impl Display, amount: impl Display) -> String {
    format!("\t{name} owes {amount}")
}

pub fn owes_heading(name: impl Display) -> String {
    format!("{name} owes:")
}

pub fn debt_edge_line(to: impl Display, amount: impl Display) -> String {
    format!("  - {to}: {amount}")
}

pub fn settling_line(from: impl Display, to: impl Display, amount: impl Display) -> String {
    format!("Settling: {from} pays {to} {amount}")
}

pub fn pays_line(from: impl Display, to: impl Display, amount: impl Display) -> String {
    format!("{from} pays {to} {amount}")
}

pub fn balance_line(name: impl Display, amount: impl Display) -> String {
    format!("{name}: {amount}")
}
