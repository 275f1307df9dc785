//! The ledger: the session's newest-first list of transactions and the
//! totals and reminders derived from it.

mod error;
mod export;
mod store;

pub(crate) use error::LedgerError;
pub(crate) use export::export_csv;
pub(crate) use store::{sort_newest_first, MemoryStore, TransactionStore};

use chrono::{SubsecRound, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::auth::SessionSource;
use crate::categorize::Categorizer;
use crate::models::{CategoryRule, NewTransaction, Transaction, TransactionKind, DEFAULT_CATEGORY};

/// Totals and reminders for one ledger, computed from scratch on every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Summary {
    pub(crate) total_income: Decimal,
    pub(crate) total_expense: Decimal,
    pub(crate) balance: Decimal,
    pub(crate) income_count: usize,
    pub(crate) expense_count: usize,
    /// Records flagged for a reminder, in ledger order.
    pub(crate) active_reminders: Vec<Transaction>,
}

/// Largest amount accepted for a single record: one trillion.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Totals saturate at `Decimal::MAX` instead of overflowing.
pub(crate) fn compute_summary(records: &[Transaction]) -> Summary {
    let mut summary = Summary::default();
    for txn in records {
        match txn.kind {
            TransactionKind::Income => {
                summary.total_income = summary.total_income.saturating_add(txn.amount);
                summary.income_count += 1;
            }
            TransactionKind::Expense => {
                summary.total_expense = summary.total_expense.saturating_add(txn.amount);
                summary.expense_count += 1;
            }
        }
        if txn.has_reminder {
            summary.active_reminders.push(txn.clone());
        }
    }
    summary.balance = summary.total_income.saturating_sub(summary.total_expense);
    summary
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadState {
    /// Nothing trustworthy to show yet.
    Loading,
    Ready,
    /// The last load failed. Only records added since are held, so totals
    /// are partial.
    Failed(String),
}

/// Handed out by `begin_load`. Only the most recent ticket may complete a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoadTicket(u64);

pub(crate) struct Ledger {
    owner: String,
    records: Vec<Transaction>,
    state: LoadState,
    generation: u64,
    /// Writes confirmed while a load was in flight. The load's result predates
    /// them, so they are merged back in when it lands.
    added_during_load: Vec<Transaction>,
    categorizer: Categorizer,
}

impl Ledger {
    pub(crate) fn new(owner: impl Into<String>) -> Self {
        let (categorizer, _) = Categorizer::with_user_rules(&[]);
        Self {
            owner: owner.into(),
            records: Vec::new(),
            state: LoadState::Loading,
            generation: 0,
            added_during_load: Vec::new(),
            categorizer,
        }
    }

    pub(crate) fn owner(&self) -> &str {
        &self.owner
    }

    pub(crate) fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn state(&self) -> &LoadState {
        &self.state
    }

    pub(crate) fn summary(&self) -> Summary {
        compute_summary(&self.records)
    }

    /// Replace the category rules. Returns regex patterns that failed to compile.
    pub(crate) fn set_rules(&mut self, rules: &[CategoryRule]) -> Vec<String> {
        let (categorizer, bad) = Categorizer::with_user_rules(rules);
        log::debug!("{} category rules active", categorizer.len());
        self.categorizer = categorizer;
        bad
    }

    pub(crate) fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.added_during_load.clear();
        LoadTicket(self.generation)
    }

    /// Apply a finished load. Results for a superseded ticket are dropped and
    /// `false` is returned.
    pub(crate) fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Transaction>, LedgerError>,
    ) -> bool {
        if ticket.0 != self.generation {
            log::debug!("Dropping superseded load #{} (current #{})", ticket.0, self.generation);
            return false;
        }
        let added = std::mem::take(&mut self.added_during_load);
        match result {
            Ok(mut txns) => {
                for txn in added {
                    let fetched = txn.id.is_some() && txns.iter().any(|t| t.id == txn.id);
                    if !fetched {
                        txns.push(txn);
                    }
                }
                txns.retain(|t| t.user_id == self.owner);
                for txn in &mut txns {
                    txn.normalize();
                }
                sort_newest_first(&mut txns);
                log::info!("Loaded {} transactions for '{}'", txns.len(), self.owner);
                self.records = txns;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                log::warn!("{e}");
                self.records = added;
                sort_newest_first(&mut self.records);
                self.state = LoadState::Failed(e.to_string());
            }
        }
        true
    }

    /// Load records and rules from `store`. A failed load leaves the ledger
    /// in the `Failed` state and returns the error.
    pub(crate) fn load(&mut self, store: &dyn TransactionStore) -> Result<(), LedgerError> {
        match store.list_category_rules() {
            Ok(rules) => {
                let bad = self.set_rules(&rules);
                if !bad.is_empty() {
                    log::warn!("Skipping invalid regex rule(s): {}", bad.join(", "));
                }
            }
            Err(e) => log::warn!("Category rules unavailable: {e}"),
        }

        let ticket = self.begin_load();
        let result = store.list_transactions(&self.owner);
        let outcome = result.as_ref().map(|_| ()).map_err(LedgerError::clone);
        self.finish_load(ticket, result);
        outcome
    }

    /// Validate, authorize, persist, then prepend. The ledger only changes
    /// once the store has confirmed the write. The load state is left alone:
    /// a ledger whose last load failed stays `Failed` since it is incomplete.
    pub(crate) fn add_transaction(
        &mut self,
        input: &NewTransaction,
        store: &mut dyn TransactionStore,
        sessions: &dyn SessionSource,
    ) -> Result<(Transaction, Summary), LedgerError> {
        let (name, amount) = validate(input)?;
        self.check_totals(input.kind, amount)?;

        if sessions.requires_session() {
            match sessions.current_session() {
                Some(session) if session.user_id == self.owner => {}
                Some(session) => {
                    log::warn!(
                        "Session user '{}' does not own ledger '{}'",
                        session.user_id,
                        self.owner
                    );
                    return Err(LedgerError::Unauthenticated);
                }
                None => return Err(LedgerError::Unauthenticated),
            }
        }

        let category = input
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .or_else(|| self.categorizer.categorize(&name))
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();

        let mut txn = Transaction {
            id: None,
            user_id: self.owner.clone(),
            name,
            amount,
            kind: input.kind,
            category,
            created_at: Utc::now().trunc_subsecs(6),
            has_reminder: input.has_reminder,
            reminder_lead_days: input.reminder_lead_days,
        };
        txn.normalize();

        let stored = store.insert_transaction(&txn).inspect_err(|e| {
            log::error!("Insert of '{}' failed: {e}", txn.name);
        })?;

        log::info!(
            "Added {} '{}' ({}) id={:?}",
            stored.kind.as_str(),
            stored.name,
            stored.amount,
            stored.id
        );
        self.records.insert(0, stored.clone());
        if self.state == LoadState::Loading {
            self.added_during_load.push(stored.clone());
        }
        Ok((stored, self.summary()))
    }

    fn check_totals(&self, kind: TransactionKind, amount: Decimal) -> Result<(), LedgerError> {
        let summary = self.summary();
        let total = match kind {
            TransactionKind::Income => summary.total_income,
            TransactionKind::Expense => summary.total_expense,
        };
        if total.checked_add(amount).is_none() {
            return Err(LedgerError::Validation(format!(
                "{} total would overflow",
                kind.as_str()
            )));
        }
        Ok(())
    }
}

fn validate(input: &NewTransaction) -> Result<(String, Decimal), LedgerError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(LedgerError::Validation("name is required".into()));
    }
    let amount = parse_amount(&input.amount)?;
    Ok((name.to_string(), amount))
}

/// Parse a user-typed amount. Accepts `850`, `15.99`, `15,99`, `2.450,00`,
/// `1,234.56` and a trailing `€`. Negative values, fractions of a cent and
/// anything above `MAX_AMOUNT` are rejected.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let trimmed = raw.trim().trim_end_matches('€').trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation("amount is required".into()));
    }

    let normalized = match (trimmed.rfind('.'), trimmed.rfind(',')) {
        // "2.450,00": dot groups thousands, comma is the decimal point
        (Some(dot), Some(comma)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
        // "1,234.56"
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (None, Some(_)) => trimmed.replace(',', "."),
        _ => trimmed.to_string(),
    };

    let amount = Decimal::from_str(&normalized)
        .map_err(|_| LedgerError::Validation(format!("'{}' is not a number", raw.trim())))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LedgerError::Validation("amount cannot be negative".into()));
    }
    if amount.normalize().scale() > 2 {
        return Err(LedgerError::Validation("amount cannot have more than two decimals".into()));
    }
    if amount > MAX_AMOUNT {
        return Err(LedgerError::Validation(format!(
            "amount cannot exceed {}",
            MAX_AMOUNT
        )));
    }
    Ok(amount.abs())
}

#[cfg(test)]
mod tests;
