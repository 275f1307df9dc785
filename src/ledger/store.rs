use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use super::LedgerError;
use crate::models::{CategoryRule, Transaction, TransactionKind};

/// Persistence boundary for a ledger. Implementations own the records;
/// the ledger only mirrors what they have confirmed.
pub(crate) trait TransactionStore {
    /// The user's records, newest first (`created_at` DESC, then id DESC).
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, LedgerError>;

    /// Write one record and return it as stored, with its id assigned.
    fn insert_transaction(&mut self, txn: &Transaction) -> Result<Transaction, LedgerError>;

    fn list_category_rules(&self) -> Result<Vec<CategoryRule>, LedgerError>;

    fn insert_category_rule(&mut self, rule: &CategoryRule) -> Result<i64, LedgerError>;

    fn delete_category_rule(&mut self, id: i64) -> Result<(), LedgerError>;

    /// Short label for the status bar, e.g. a file name.
    fn describe(&self) -> String;
}

pub(crate) fn sort_newest_first(txns: &mut [Transaction]) {
    txns.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Non-persistent store. Ids are client-generated from the clock and stay
/// unique for the lifetime of the store.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    transactions: Vec<Transaction>,
    rules: Vec<CategoryRule>,
    last_id: i64,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The sample dashboard: one salary and three recurring bills with reminders.
    pub(crate) fn with_example_data(user_id: &str) -> Self {
        let mut store = Self::new();
        let now = Utc::now();
        let samples = [
            ("Salario", Decimal::new(245000, 2), TransactionKind::Income, "Salario", None, 4),
            ("Factura Luz", Decimal::new(6540, 2), TransactionKind::Expense, "Servicios", Some(7), 3),
            ("Suscripción Netflix", Decimal::new(1599, 2), TransactionKind::Expense, "Ocio", Some(1), 2),
            ("Alquiler", Decimal::new(85000, 2), TransactionKind::Expense, "Fijo", Some(2), 1),
        ];
        for (name, amount, kind, category, reminder, age_days) in samples {
            let txn = Transaction {
                id: None,
                user_id: user_id.to_string(),
                name: name.into(),
                amount,
                kind,
                category: category.into(),
                created_at: now - Duration::days(age_days),
                has_reminder: reminder.is_some(),
                reminder_lead_days: reminder.unwrap_or(0),
            };
            store.push(txn);
        }
        store
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> i64 {
        self.last_id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id
    }

    fn push(&mut self, txn: Transaction) -> Transaction {
        let mut stored = txn;
        stored.id = Some(self.next_id(Utc::now()));
        self.transactions.push(stored.clone());
        stored
    }
}

impl TransactionStore for MemoryStore {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, LedgerError> {
        let mut txns: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        sort_newest_first(&mut txns);
        Ok(txns)
    }

    fn insert_transaction(&mut self, txn: &Transaction) -> Result<Transaction, LedgerError> {
        Ok(self.push(txn.clone()))
    }

    fn list_category_rules(&self) -> Result<Vec<CategoryRule>, LedgerError> {
        let mut rules = self.rules.clone();
        rules.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.pattern.cmp(&b.pattern)));
        Ok(rules)
    }

    fn insert_category_rule(&mut self, rule: &CategoryRule) -> Result<i64, LedgerError> {
        let id = self.rules.iter().filter_map(|r| r.id).max().unwrap_or(0) + 1;
        let mut stored = rule.clone();
        stored.id = Some(id);
        self.rules.push(stored);
        Ok(id)
    }

    fn delete_category_rule(&mut self, id: i64) -> Result<(), LedgerError> {
        let before = self.rules.len();
        self.rules.retain(|r| r.id != Some(id));
        if self.rules.len() == before {
            return Err(LedgerError::Persistence(format!("no rule with id {id}")));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "demo (not saved)".into()
    }
}
