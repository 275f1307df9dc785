use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

pub const DEFAULT_CATEGORY: &str = "General";

/// Lead-day presets offered by the add form.
pub const REMINDER_PRESETS: [u32; 3] = [0, 2, 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Storage tag, as written to the database and CSV exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "ingreso" | "in" | "+" => Some(Self::Income),
            "expense" | "gasto" | "out" | "-" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Option<i64>,
    pub user_id: String,
    pub name: String,
    /// Absolute value of the movement; the sign comes from `kind`.
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub has_reminder: bool,
    pub reminder_lead_days: u32,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Reminders only exist on outgoing payments.
    pub fn normalize(&mut self) {
        self.amount = self.amount.abs();
        if !self.is_expense() {
            self.has_reminder = false;
        }
    }

    /// Day on which the reminder should surface.
    pub fn remind_on(&self) -> Option<NaiveDate> {
        if !self.has_reminder {
            return None;
        }
        let due = self.created_at.date_naive();
        due.checked_sub_signed(Duration::days(i64::from(self.reminder_lead_days)))
    }

    pub fn due_label(&self) -> String {
        due_label(self.reminder_lead_days)
    }
}

/// Human label for a reminder lead time, e.g. `"Tomorrow"` or `"In 2 days"`.
pub fn due_label(lead_days: u32) -> String {
    match lead_days {
        0 => "Today".into(),
        1 => "Tomorrow".into(),
        7 => "In 1 week".into(),
        d if d % 7 == 0 => format!("In {} weeks", d / 7),
        d => format!("In {d} days"),
    }
}

/// Raw add-form input, validated by the ledger before anything is stored.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub name: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub has_reminder: bool,
    pub reminder_lead_days: u32,
}

impl NewTransaction {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            kind,
            category: None,
            has_reminder: false,
            reminder_lead_days: 0,
        }
    }

    pub fn with_reminder(mut self, lead_days: u32) -> Self {
        self.has_reminder = true;
        self.reminder_lead_days = lead_days;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
