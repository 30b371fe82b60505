use splittab_domain::{PendingSettlement, SettlementOutcome};
use splittab_i18n as i18n;

use crate::money;

pub struct SettlementPresenter;

impl SettlementPresenter {
    /// Renders the outcome of a processing attempt. An empty queue is a
    /// normal informational line, not an error.
    pub fn render_processed(outcome: &SettlementOutcome) -> String {
        match outcome {
            SettlementOutcome::Empty => i18n::NO_SETTLEMENTS_TO_PROCESS.to_owned(),
            SettlementOutcome::Processed(settlement) => i18n::settling_line(
                &settlement.from,
                &settlement.to,
                money(settlement.amount),
            ),
        }
    }

    /// Renders the queue contents in arrival order.
    pub fn render_pending(pending: &[PendingSettlement]) -> String {
        if pending.is_empty() {
            return i18n::NO_SETTLEMENTS_IN_QUEUE.to_owned();
        }

        pending
            .iter()
            .map(|settlement| {
                i18n::pays_line(&settlement.from, &settlement.to, money(settlement.amount))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
