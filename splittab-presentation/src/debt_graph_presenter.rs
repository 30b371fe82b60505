use splittab_application::DebtGroup;
use splittab_i18n as i18n;

use crate::money;

pub struct DebtGraphPresenter;

impl DebtGraphPresenter {
    /// Renders the debt graph grouped per owed participant, keeping the
    /// graph's own grouping order.
    pub fn render(graph: &[DebtGroup]) -> String {
        if graph.is_empty() {
            return i18n::NO_DEBTS_RECORDED.to_owned();
        }

        let mut lines = vec![i18n::DEBT_GRAPH_HEADING.to_owned()];
        for group in graph {
            lines.push(i18n::owes_heading(&group.from));
            for edge in &group.edges {
                lines.push(i18n::debt_edge_line(&edge.to, money(edge.amount)));
            }
        }
        lines.join("\n")
    }
}
