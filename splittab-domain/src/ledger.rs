use std::collections::{BTreeMap, VecDeque};

use indexmap::IndexMap;

use crate::{
    model::{DebtEdge, ExpenseRecord, Money, Participant, PendingSettlement, SettlementOutcome},
    services::SettlementReconciler,
};

/// Net balance per participant.
///
/// Entries are created lazily on first reference and never removed; a zero
/// balance is a valid steady state. Iteration is ascending by name, which
/// callers rely on for deterministic snapshots.
#[derive(Debug, Default)]
pub struct BalanceIndex {
    balances: BTreeMap<Participant, Money>,
}

impl BalanceIndex {
    pub(crate) fn credit(&mut self, user: &Participant, delta: Money) {
        *self.balances.entry(user.clone()).or_insert(Money::ZERO) += delta;
    }

    pub fn lookup(&self, user: &Participant) -> Money {
        self.balances.get(user).copied().unwrap_or(Money::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Participant, Money)> {
        self.balances.iter().map(|(user, balance)| (user, *balance))
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

/// FIFO of payment intents. Recording and applying a settlement are
/// decoupled: entries sit here untouched until processed in arrival order.
#[derive(Debug, Default)]
pub struct SettlementQueue {
    pending: VecDeque<PendingSettlement>,
}

impl SettlementQueue {
    pub(crate) fn enqueue(&mut self, settlement: PendingSettlement) {
        self.pending.push_back(settlement);
    }

    pub(crate) fn dequeue(&mut self) -> Option<PendingSettlement> {
        self.pending.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingSettlement> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Directed debt contributions grouped per owed participant.
///
/// Groups iterate in node first-creation order; edges within a group keep
/// insertion order and parallel edges are never merged.
#[derive(Debug, Default)]
pub struct DebtGraph {
    adjacency: IndexMap<Participant, Vec<DebtEdge>>,
}

impl DebtGraph {
    pub(crate) fn add_edge(&mut self, from: &Participant, to: &Participant, amount: Money) {
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(DebtEdge {
                to: to.clone(),
                amount,
            });
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Participant, &[DebtEdge])> {
        self.adjacency
            .iter()
            .map(|(from, edges)| (from, edges.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// The ledger engine: the expense history plus its three derived indices.
///
/// All four structures are owned here and only mutated together, through
/// [`Ledger::add_expense`] and [`Ledger::process_next_settlement`], so no
/// caller can drive them out of sync. Queries hand out iterators or copies,
/// never mutable access.
#[derive(Debug, Default)]
pub struct Ledger {
    expenses: Vec<ExpenseRecord>,
    balances: BalanceIndex,
    queue: SettlementQueue,
    debts: DebtGraph,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an expense and updates every index in one step: the record is
    /// appended, the payer is credited the full amount, each sharer is
    /// debited an even share, and one debt edge per sharer is added.
    ///
    /// `sharers` may be empty; the payer always counts as one sharer, so the
    /// division never sees a zero denominator. Identifiers are opaque and
    /// the operation does not fail.
    pub fn add_expense(
        &mut self,
        description: impl Into<String>,
        total: Money,
        payer: Participant,
        sharers: &[Participant],
    ) -> &ExpenseRecord {
        let record = ExpenseRecord::split_evenly(description, total, payer, sharers);

        self.balances.credit(record.payer(), total);
        for entry in &record.entries()[1..] {
            self.balances.credit(&entry.participant, -entry.owed);
            self.debts
                .add_edge(record.payer(), &entry.participant, entry.owed);
        }

        let index = self.expenses.len();
        self.expenses.push(record);
        &self.expenses[index]
    }

    /// Expense history in recording order, reflecting any settlement
    /// rewrites applied since.
    pub fn expenses(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.expenses.iter()
    }

    /// Appends a payment intent to the queue tail. The amount is accepted
    /// as-is; nothing is validated here.
    pub fn enqueue_settlement(&mut self, from: Participant, to: Participant, amount: Money) {
        self.queue.enqueue(PendingSettlement { from, to, amount });
    }

    /// Removes the head settlement, if any, and reconciles it against the
    /// balance index and the expense history. An empty queue is an
    /// informational outcome, not an error, and leaves all state untouched.
    pub fn process_next_settlement(&mut self) -> SettlementOutcome {
        let Some(settlement) = self.queue.dequeue() else {
            return SettlementOutcome::Empty;
        };

        SettlementReconciler::apply(&settlement, &mut self.balances, &mut self.expenses);

        SettlementOutcome::Processed(settlement)
    }

    /// Queued settlements in arrival order, without consuming them.
    pub fn pending_settlements(&self) -> impl Iterator<Item = &PendingSettlement> {
        self.queue.iter()
    }

    /// Net balance for `user`, defaulting to zero for unknown names.
    pub fn balance(&self, user: &Participant) -> Money {
        self.balances.lookup(user)
    }

    /// Balances ascending by participant name.
    pub fn balances(&self) -> impl Iterator<Item = (&Participant, Money)> {
        self.balances.iter()
    }

    /// Debt groups in node first-creation order.
    pub fn debt_graph(&self) -> impl Iterator<Item = (&Participant, &[DebtEdge])> {
        self.debts.iter()
    }
}
