use crate::ledger::{Ledger, LoadState, Summary};
use crate::models::Transaction;
use crate::run::Backend;

use super::form::AddForm;
use super::util::ListCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Reminders,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Transactions, Self::Reminders]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Reminders => write!(f, "Reminders"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Form => write!(f, "ADD"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Shown in the status bar: the store in use and who is signed in.
    pub(crate) store_label: String,

    pub(crate) ledger: Ledger,
    pub(crate) transaction_cursor: ListCursor,
    pub(crate) reminder_cursor: ListCursor,

    pub(crate) form: AddForm,

    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(backend: &Backend) -> Self {
        let owner = backend.session.owner_id();
        let who = if owner.is_empty() { "anonymous" } else { owner.as_str() };
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            store_label: format!("{} @ {}", who, backend.store.describe()),
            ledger: Ledger::new(owner),
            transaction_cursor: ListCursor::default(),
            reminder_cursor: ListCursor::default(),
            form: AddForm::default(),
            visible_rows: 20,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn summary(&self) -> Summary {
        self.ledger.summary()
    }

    /// Reload from the store. A failure empties the ledger and is reported in
    /// the status bar; the app keeps running.
    pub(crate) fn refresh(&mut self, backend: &Backend) {
        match self.ledger.load(backend.store.as_ref()) {
            Ok(()) => {
                self.set_status(format!("Loaded {} transactions", self.ledger.len()));
            }
            Err(e) => self.set_status(e.to_string()),
        }
        self.clamp_cursors();
    }

    pub(crate) fn is_loading(&self) -> bool {
        *self.ledger.state() == LoadState::Loading
    }

    pub(crate) fn load_error(&self) -> Option<&str> {
        match self.ledger.state() {
            LoadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub(crate) fn open_form(&mut self) {
        self.form.reset();
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn close_form(&mut self) {
        self.form.reset();
        self.input_mode = InputMode::Normal;
    }

    /// Submit the add form. On failure the form stays open with the error
    /// shown; on success it closes and the new record is selected.
    pub(crate) fn submit_form(&mut self, backend: &mut Backend) {
        let input = self.form.to_input();
        match self
            .ledger
            .add_transaction(&input, backend.store.as_mut(), &backend.session)
        {
            Ok((txn, summary)) => {
                self.close_form();
                self.report_added(&txn, &summary);
            }
            Err(e) => {
                let msg = e.to_string();
                self.form.error = Some(msg.clone());
                self.set_status(msg);
            }
        }
    }

    /// Select the new record and show it in the status bar. Totals after a
    /// failed load only cover records added since, so say so.
    pub(crate) fn report_added(&mut self, txn: &Transaction, summary: &Summary) {
        self.transaction_cursor.top();
        let mut msg = added_message(txn, summary);
        if self.load_error().is_some() {
            msg.push_str(" (partial, :refresh to reload)");
        }
        self.set_status(msg);
    }

    /// The record under the cursor on the current screen, if any.
    pub(crate) fn selected_transaction(&self) -> Option<Transaction> {
        match self.screen {
            Screen::Transactions => self
                .ledger
                .records()
                .get(self.transaction_cursor.index)
                .cloned(),
            Screen::Reminders => self
                .summary()
                .active_reminders
                .get(self.reminder_cursor.index)
                .cloned(),
            Screen::Dashboard => None,
        }
    }

    pub(crate) fn clamp_cursors(&mut self) {
        let reminders = self.summary().active_reminders.len();
        self.transaction_cursor.clamp(self.ledger.len());
        self.reminder_cursor.clamp(reminders);
    }

    pub(crate) fn move_down(&mut self) {
        let page = self.visible_rows;
        match self.screen {
            Screen::Transactions => self.transaction_cursor.down(self.ledger.len(), page),
            Screen::Reminders => {
                let len = self.summary().active_reminders.len();
                self.reminder_cursor.down(len, page);
            }
            Screen::Dashboard => {}
        }
    }

    pub(crate) fn move_up(&mut self) {
        match self.screen {
            Screen::Transactions => self.transaction_cursor.up(),
            Screen::Reminders => self.reminder_cursor.up(),
            Screen::Dashboard => {}
        }
    }

    pub(crate) fn goto_top(&mut self) {
        match self.screen {
            Screen::Transactions => self.transaction_cursor.top(),
            Screen::Reminders => self.reminder_cursor.top(),
            Screen::Dashboard => {}
        }
    }

    pub(crate) fn goto_bottom(&mut self) {
        let page = self.visible_rows;
        match self.screen {
            Screen::Transactions => self.transaction_cursor.bottom(self.ledger.len(), page),
            Screen::Reminders => {
                let len = self.summary().active_reminders.len();
                self.reminder_cursor.bottom(len, page);
            }
            Screen::Dashboard => {}
        }
    }
}

fn added_message(txn: &Transaction, summary: &Summary) -> String {
    let mut msg = format!(
        "Added {} '{}' ({}) to {}. Balance {}",
        txn.kind.as_str(),
        txn.name,
        super::util::format_amount(txn.amount),
        txn.category,
        super::util::format_amount(summary.balance)
    );
    if txn.has_reminder {
        msg.push_str(&format!(", reminder {}", txn.due_label().to_lowercase()));
    }
    msg
}
