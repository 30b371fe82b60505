use crate::{
    ledger::BalanceIndex,
    model::{ExpenseRecord, PendingSettlement},
};

/// Applies a dequeued settlement to the balance index and the expense
/// history.
///
/// The history rewrite is keyed by name alone: every entry matching the
/// paying side loses the settlement amount and every entry matching the
/// receiving side gains it, in every record ever written — including records
/// the settling pair never shared. Unknown names are fine; the balance index
/// creates them lazily and the rewrite simply matches nothing. The debt
/// graph is left alone.
pub(crate) struct SettlementReconciler;

impl SettlementReconciler {
    pub(crate) fn apply(
        settlement: &PendingSettlement,
        balances: &mut BalanceIndex,
        expenses: &mut [ExpenseRecord],
    ) {
        balances.credit(&settlement.from, settlement.amount);
        balances.credit(&settlement.to, -settlement.amount);

        for record in expenses.iter_mut() {
            for entry in record.entries_mut() {
                if entry.participant == settlement.from {
                    entry.owed -= settlement.amount;
                }
                if entry.participant == settlement.to {
                    entry.owed += settlement.amount;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Money, Participant};
    use rstest::rstest;

    fn record(description: &str, total: f32, payer: &str, sharers: &[&str]) -> ExpenseRecord {
        let sharers: Vec<Participant> = sharers.iter().copied().map(Participant::from).collect();
        ExpenseRecord::split_evenly(
            description,
            Money::from_f32(total),
            Participant::from(payer),
            &sharers,
        )
    }

    fn settlement(from: &str, to: &str, amount: f32) -> PendingSettlement {
        PendingSettlement {
            from: Participant::from(from),
            to: Participant::from(to),
            amount: Money::from_f32(amount),
        }
    }

    fn owed(record: &ExpenseRecord, name: &str) -> Money {
        record
            .entries()
            .iter()
            .find(|entry| entry.participant.as_str() == name)
            .map(|entry| entry.owed)
            .expect("entry present")
    }

    #[rstest]
    fn payment_moves_balance_from_receiver_to_payer() {
        let mut balances = BalanceIndex::default();
        let mut expenses: Vec<ExpenseRecord> = Vec::new();

        SettlementReconciler::apply(
            &settlement("bob", "alice", 30.0),
            &mut balances,
            &mut expenses,
        );

        assert_eq!(
            balances.lookup(&Participant::from("bob")),
            Money::from_f32(30.0)
        );
        assert_eq!(
            balances.lookup(&Participant::from("alice")),
            Money::from_f32(-30.0)
        );
    }

    #[rstest]
    fn rewrite_hits_every_record_containing_either_name() {
        let mut balances = BalanceIndex::default();
        let mut expenses = vec![
            record("dinner", 90.0, "alice", &["bob", "carol"]),
            record("brunch", 40.0, "carol", &["bob"]),
        ];

        SettlementReconciler::apply(
            &settlement("bob", "alice", 30.0),
            &mut balances,
            &mut expenses,
        );

        // bob's entries drop in both records, even though the second record
        // never involved alice.
        assert_eq!(owed(&expenses[0], "bob"), Money::from_f32(0.0));
        assert_eq!(owed(&expenses[1], "bob"), Money::from_f32(-10.0));
        // alice's payer entry in the dinner record gains the amount.
        assert_eq!(owed(&expenses[0], "alice"), Money::from_f32(30.0));
        // carol is neither side and stays put.
        assert_eq!(owed(&expenses[0], "carol"), Money::from_f32(30.0));
        assert_eq!(owed(&expenses[1], "carol"), Money::ZERO);
    }

    #[rstest]
    #[case::negative_amount(-12.5)]
    #[case::zero_amount(0.0)]
    fn unvalidated_amounts_pass_straight_through(#[case] amount: f32) {
        let mut balances = BalanceIndex::default();
        let mut expenses = vec![record("dinner", 90.0, "alice", &["bob"])];

        SettlementReconciler::apply(
            &settlement("bob", "alice", amount),
            &mut balances,
            &mut expenses,
        );

        assert_eq!(
            balances.lookup(&Participant::from("bob")),
            Money::from_f32(amount)
        );
        assert_eq!(owed(&expenses[0], "bob"), Money::from_f32(45.0 - amount));
    }
}
