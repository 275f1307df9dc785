use crate::models::{NewTransaction, TransactionKind, REMINDER_PRESETS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Name,
    Amount,
    Kind,
    Category,
    Reminder,
    LeadDays,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "Name"),
            Self::Amount => write!(f, "Amount"),
            Self::Kind => write!(f, "Kind"),
            Self::Category => write!(f, "Category"),
            Self::Reminder => write!(f, "Reminder"),
            Self::LeadDays => write!(f, "Remind"),
        }
    }
}

/// State of the add-transaction popup. Nothing here is validated; the ledger
/// does that on submit.
#[derive(Debug, Clone)]
pub(crate) struct AddForm {
    pub(crate) field: FormField,
    pub(crate) name: String,
    pub(crate) amount: String,
    pub(crate) kind: TransactionKind,
    pub(crate) category: String,
    pub(crate) has_reminder: bool,
    pub(crate) lead_days: u32,
    /// Last submit error, shown inside the form.
    pub(crate) error: Option<String>,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            field: FormField::Name,
            name: String::new(),
            amount: String::new(),
            kind: TransactionKind::Expense,
            category: String::new(),
            has_reminder: false,
            lead_days: REMINDER_PRESETS[0],
            error: None,
        }
    }
}

impl AddForm {
    /// Fields in tab order. Reminder fields only exist for expenses, and the
    /// lead time only once a reminder is switched on.
    pub(crate) fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::Name,
            FormField::Amount,
            FormField::Kind,
            FormField::Category,
        ];
        if self.kind == TransactionKind::Expense {
            fields.push(FormField::Reminder);
            if self.has_reminder {
                fields.push(FormField::LeadDays);
            }
        }
        fields
    }

    pub(crate) fn next_field(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(idx + 1) % fields.len()];
    }

    pub(crate) fn prev_field(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(idx + fields.len() - 1) % fields.len()];
    }

    pub(crate) fn input_char(&mut self, c: char) {
        match self.field {
            FormField::Name => self.name.push(c),
            FormField::Amount => {
                if c.is_ascii_digit() || matches!(c, '.' | ',') {
                    self.amount.push(c);
                }
            }
            FormField::Category => self.category.push(c),
            FormField::Kind | FormField::Reminder => {
                if c == ' ' {
                    self.toggle();
                }
            }
            FormField::LeadDays => match c {
                '+' | '=' | ' ' => self.adjust(1),
                '-' => self.adjust(-1),
                _ => {}
            },
        }
    }

    pub(crate) fn backspace(&mut self) {
        match self.field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Category => {
                self.category.pop();
            }
            _ => {}
        }
    }

    /// Flip the focused toggle. Switching to income drops any reminder.
    pub(crate) fn toggle(&mut self) {
        match self.field {
            FormField::Kind => {
                self.kind = self.kind.toggled();
                if self.kind == TransactionKind::Income {
                    self.has_reminder = false;
                }
            }
            FormField::Reminder => self.has_reminder = !self.has_reminder,
            _ => {}
        }
    }

    /// Step the lead time through the presets, wrapping at both ends.
    pub(crate) fn adjust(&mut self, delta: i32) {
        if self.field != FormField::LeadDays {
            self.toggle();
            return;
        }
        let len = REMINDER_PRESETS.len();
        let idx = REMINDER_PRESETS
            .iter()
            .position(|d| *d == self.lead_days)
            .unwrap_or(0);
        let next = if delta >= 0 {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.lead_days = REMINDER_PRESETS[next];
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn to_input(&self) -> NewTransaction {
        let mut input = NewTransaction::new(self.name.clone(), self.amount.clone(), self.kind);
        if !self.category.trim().is_empty() {
            input = input.with_category(self.category.trim());
        }
        if self.kind == TransactionKind::Expense && self.has_reminder {
            input = input.with_reminder(self.lead_days);
        }
        input
    }
}
