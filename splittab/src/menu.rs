use std::io;

use splittab_application::{Command, CommandOutcome, Console, InputError, LedgerService, input};
use splittab_i18n as i18n;
use splittab_presentation::{
    BalancePresenter, DebtGraphPresenter, ExpensePresenter, SettlementPresenter,
};

/// The interactive menu loop: reads one choice at a time, gathers the fields
/// the chosen action needs, runs it against the ledger service, and prints
/// the rendered result.
pub struct MenuSession<C> {
    console: C,
    service: LedgerService,
}

enum PromptError {
    Io(io::Error),
    Input(InputError),
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<InputError> for PromptError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl<C: Console> MenuSession<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            service: LedgerService::new(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.console.print(i18n::MENU);
            let raw_choice = self.console.prompt(i18n::PROMPT_CHOICE)?;

            let command = match self.select_command(&raw_choice) {
                Ok(command) => command,
                Err(PromptError::Input(InputError::InvalidChoice(_))) => {
                    self.console.print(i18n::INVALID_CHOICE);
                    continue;
                }
                Err(PromptError::Input(err)) => {
                    tracing::warn!("Rejected input: {}", err);
                    self.console.print(&err.to_string());
                    continue;
                }
                Err(PromptError::Io(err)) => return Err(err),
            };

            if !self.dispatch(command) {
                return Ok(());
            }
        }
    }

    fn select_command(&mut self, raw_choice: &str) -> Result<Command, PromptError> {
        let choice = input::parse_choice(raw_choice)?;
        match choice {
            1 => self.read_expense(),
            2 => Ok(Command::ListExpenses),
            3 => self.read_settlement(),
            4 => Ok(Command::ShowBalances),
            5 => Ok(Command::ProcessSettlement),
            6 => Ok(Command::ShowDebtGraph),
            7 => Ok(Command::ListPendingSettlements),
            8 => Ok(Command::Quit),
            _ => Err(InputError::InvalidChoice(raw_choice.trim().to_owned()).into()),
        }
    }

    fn read_expense(&mut self) -> Result<Command, PromptError> {
        let description = self.console.prompt(i18n::PROMPT_DESCRIPTION)?;
        let amount = input::parse_amount(&self.console.prompt(i18n::PROMPT_TOTAL)?)?;
        let payer = self.console.prompt(i18n::PROMPT_PAYER)?;
        let count = input::parse_count(&self.console.prompt(i18n::PROMPT_SHARER_COUNT)?)?;

        let mut sharers = Vec::with_capacity(count);
        for index in 1..=count {
            sharers.push(self.console.prompt(&i18n::prompt_sharer_name(index))?);
        }

        Ok(Command::AddExpense {
            description,
            amount,
            payer,
            sharers,
        })
    }

    fn read_settlement(&mut self) -> Result<Command, PromptError> {
        let from = self.console.prompt(i18n::PROMPT_SETTLEMENT_FROM)?;
        let to = self.console.prompt(i18n::PROMPT_SETTLEMENT_TO)?;
        let amount = input::parse_amount(&self.console.prompt(i18n::PROMPT_SETTLEMENT_AMOUNT)?)?;

        Ok(Command::RecordSettlement { from, to, amount })
    }

    /// Runs one command; returns `false` when the session should end.
    fn dispatch(&mut self, command: Command) -> bool {
        match self.service.execute(command) {
            CommandOutcome::ExpenseAdded => self.console.print(i18n::EXPENSE_ADDED),
            CommandOutcome::Expenses(expenses) => {
                self.console.print(&ExpensePresenter::render(&expenses));
            }
            CommandOutcome::SettlementQueued => self.console.print(i18n::SETTLEMENT_QUEUED),
            CommandOutcome::Balances(balances) => {
                self.console.print(&BalancePresenter::render(&balances));
            }
            CommandOutcome::SettlementProcessed(outcome) => {
                self.console.print(i18n::PROCESSING_SETTLEMENTS);
                self.console
                    .print(&SettlementPresenter::render_processed(&outcome));
            }
            CommandOutcome::DebtGraph(graph) => {
                self.console.print(&DebtGraphPresenter::render(&graph));
            }
            CommandOutcome::PendingSettlements(pending) => {
                self.console
                    .print(&SettlementPresenter::render_pending(&pending));
            }
            CommandOutcome::Exit => {
                self.console.print(i18n::EXITING);
                return false;
            }
        }
        true
    }
}
