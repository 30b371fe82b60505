use splittab_domain::ExpenseRecord;
use splittab_i18n as i18n;

use crate::money;

pub struct ExpensePresenter;

impl ExpensePresenter {
    /// Renders the expense history as the classic per-record blocks,
    /// reflecting any settlement rewrites in the owed amounts.
    pub fn render(expenses: &[ExpenseRecord]) -> String {
        if expenses.is_empty() {
            return i18n::NO_EXPENSES_RECORDED.to_owned();
        }

        let mut lines = Vec::new();
        for record in expenses {
            lines.push(i18n::expense_heading(record.description()));
            lines.push(i18n::paid_by_line(money(record.total()), record.payer()));
            lines.push(i18n::SPLIT_AMONG_HEADING.to_owned());
            for entry in record.entries() {
                lines.push(i18n::owes_line(&entry.participant, money(entry.owed)));
            }
        }
        lines.join("\n")
    }
}
