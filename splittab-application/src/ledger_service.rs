use splittab_domain::{
    ExpenseRecord, Ledger, Money, Participant, PendingSettlement, SettlementOutcome,
};

use crate::model::{Command, CommandOutcome, DebtGroup, PersonBalance};

/// Application facade over the ledger engine.
///
/// Exposes the engine's operations one-to-one and a [`Command`] dispatcher
/// for the menu. Mutations are logged; query methods return owned snapshots.
#[derive(Debug, Default)]
pub struct LedgerService {
    ledger: Ledger,
}

impl LedgerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::AddExpense {
                description,
                amount,
                payer,
                sharers,
            } => {
                self.add_expense(&description, amount, &payer, &sharers);
                CommandOutcome::ExpenseAdded
            }
            Command::ListExpenses => CommandOutcome::Expenses(self.expenses()),
            Command::RecordSettlement { from, to, amount } => {
                self.enqueue_settlement(&from, &to, amount);
                CommandOutcome::SettlementQueued
            }
            Command::ShowBalances => CommandOutcome::Balances(self.balance_overview()),
            Command::ProcessSettlement => {
                CommandOutcome::SettlementProcessed(self.process_next_settlement())
            }
            Command::ShowDebtGraph => CommandOutcome::DebtGraph(self.debt_graph()),
            Command::ListPendingSettlements => {
                CommandOutcome::PendingSettlements(self.pending_settlements())
            }
            Command::Quit => CommandOutcome::Exit,
        }
    }

    pub fn add_expense(
        &mut self,
        description: &str,
        amount: f32,
        payer: &str,
        sharers: &[String],
    ) -> ExpenseRecord {
        let sharers: Vec<Participant> = sharers
            .iter()
            .map(|name| Participant::from(name.as_str()))
            .collect();
        let record = self
            .ledger
            .add_expense(
                description,
                Money::from_f32(amount),
                Participant::from(payer),
                &sharers,
            )
            .clone();
        tracing::info!(
            "Recorded expense '{}': {} paid by {}, split {} ways",
            record.description(),
            amount,
            payer,
            sharers.len() + 1
        );
        record
    }

    pub fn expenses(&self) -> Vec<ExpenseRecord> {
        self.ledger.expenses().cloned().collect()
    }

    pub fn enqueue_settlement(&mut self, from: &str, to: &str, amount: f32) {
        self.ledger.enqueue_settlement(
            Participant::from(from),
            Participant::from(to),
            Money::from_f32(amount),
        );
        tracing::info!("Queued settlement: {} pays {} {}", from, to, amount);
    }

    pub fn process_next_settlement(&mut self) -> SettlementOutcome {
        let outcome = self.ledger.process_next_settlement();
        match &outcome {
            SettlementOutcome::Processed(settlement) => {
                tracing::info!(
                    "Processed settlement: {} pays {} {}",
                    settlement.from,
                    settlement.to,
                    settlement.amount
                );
            }
            SettlementOutcome::Empty => {
                tracing::debug!("Settlement queue is empty; nothing processed");
            }
        }
        outcome
    }

    pub fn pending_settlements(&self) -> Vec<PendingSettlement> {
        self.ledger.pending_settlements().cloned().collect()
    }

    pub fn balance_overview(&self) -> Vec<PersonBalance> {
        self.ledger
            .balances()
            .map(|(name, balance)| PersonBalance {
                name: name.clone(),
                balance,
            })
            .collect()
    }

    pub fn debt_graph(&self) -> Vec<DebtGroup> {
        self.ledger
            .debt_graph()
            .map(|(from, edges)| DebtGroup {
                from: from.clone(),
                edges: edges.to_vec(),
            })
            .collect()
    }
}
