use splittab_domain::{
    DebtEdge, ExpenseRecord, Money, Participant, PendingSettlement, SettlementOutcome,
};

/// One menu action, already parsed from raw console input.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    AddExpense {
        description: String,
        amount: f32,
        payer: String,
        sharers: Vec<String>,
    },
    ListExpenses,
    RecordSettlement {
        from: String,
        to: String,
        amount: f32,
    },
    ShowBalances,
    ProcessSettlement,
    ShowDebtGraph,
    ListPendingSettlements,
    Quit,
}

/// What a command produced; queries carry snapshots, never live references
/// into the ledger.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    ExpenseAdded,
    Expenses(Vec<ExpenseRecord>),
    SettlementQueued,
    Balances(Vec<PersonBalance>),
    SettlementProcessed(SettlementOutcome),
    DebtGraph(Vec<DebtGroup>),
    PendingSettlements(Vec<PendingSettlement>),
    Exit,
}

/// One row of the balance overview, sorted ascending by name.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonBalance {
    pub name: Participant,
    pub balance: Money,
}

/// One participant's outgoing debt edges, in graph grouping order.
#[derive(Clone, Debug, PartialEq)]
pub struct DebtGroup {
    pub from: Participant,
    pub edges: Vec<DebtEdge>,
}
