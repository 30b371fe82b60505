use splittab_application::PersonBalance;
use splittab_i18n as i18n;

use crate::money;

pub struct BalancePresenter;

impl BalancePresenter {
    /// Renders the balance overview. Rows arrive sorted ascending by name
    /// from the service; this function does not reorder them.
    pub fn render(balances: &[PersonBalance]) -> String {
        if balances.is_empty() {
            return i18n::NO_BALANCES_RECORDED.to_owned();
        }

        let mut lines = vec![i18n::USER_BALANCES_HEADING.to_owned()];
        lines.extend(
            balances
                .iter()
                .map(|row| i18n::balance_line(&row.name, money(row.balance))),
        );
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use splittab_domain::{Money, Participant};

    fn row(name: &str, balance: f32) -> PersonBalance {
        PersonBalance {
            name: Participant::from(name),
            balance: Money::from_f32(balance),
        }
    }

    #[rstest]
    fn empty_overview_renders_the_placeholder() {
        assert_eq!(BalancePresenter::render(&[]), "No balances recorded.");
    }

    #[rstest]
    fn rows_render_one_per_line_with_two_decimals() {
        let output = BalancePresenter::render(&[row("alice", 60.0), row("bob", -30.5)]);

        assert!(output.contains("User Balances:"));
        assert!(output.contains("alice: 60.00"));
        assert!(output.contains("bob: -30.50"));
    }
}
