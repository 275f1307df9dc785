#![allow(clippy::unwrap_used)]

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::auth::LocalSession;
use crate::models::Session;

// ── Test doubles ──────────────────────────────────────────────

/// Store whose writes always fail.
struct RejectingStore {
    attempts: usize,
}

impl TransactionStore for RejectingStore {
    fn list_transactions(&self, _user_id: &str) -> Result<Vec<Transaction>, LedgerError> {
        Err(LedgerError::Fetch("backend unreachable".into()))
    }

    fn insert_transaction(&mut self, _txn: &Transaction) -> Result<Transaction, LedgerError> {
        self.attempts += 1;
        Err(LedgerError::Persistence("backend unreachable".into()))
    }

    fn list_category_rules(&self) -> Result<Vec<CategoryRule>, LedgerError> {
        Ok(Vec::new())
    }

    fn insert_category_rule(&mut self, _rule: &CategoryRule) -> Result<i64, LedgerError> {
        Err(LedgerError::Persistence("read only".into()))
    }

    fn delete_category_rule(&mut self, _id: i64) -> Result<(), LedgerError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "rejecting".into()
    }
}

fn anonymous() -> LocalSession {
    LocalSession::new(None, false)
}

fn ready_ledger(store: &MemoryStore) -> Ledger {
    let mut ledger = Ledger::new("");
    ledger.load(store).unwrap();
    ledger
}

fn expense(name: &str, amount: &str) -> NewTransaction {
    NewTransaction::new(name, amount, TransactionKind::Expense)
}

fn income(name: &str, amount: &str) -> NewTransaction {
    NewTransaction::new(name, amount, TransactionKind::Income)
}

fn record(name: &str, amount: Decimal, kind: TransactionKind, reminder: bool) -> Transaction {
    Transaction {
        id: None,
        user_id: String::new(),
        name: name.into(),
        amount,
        kind,
        category: DEFAULT_CATEGORY.into(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        has_reminder: reminder,
        reminder_lead_days: 0,
    }
}

// ── compute_summary ───────────────────────────────────────────

#[test]
fn test_empty_summary_is_zero() {
    let summary = compute_summary(&[]);
    assert_eq!(summary.total_income, Decimal::ZERO);
    assert_eq!(summary.total_expense, Decimal::ZERO);
    assert_eq!(summary.balance, Decimal::ZERO);
    assert!(summary.active_reminders.is_empty());
    assert_eq!(summary, Summary::default());
}

#[test]
fn test_summary_totals_and_counts() {
    let records = vec![
        record("Salario", dec!(2450), TransactionKind::Income, false),
        record("Freelance", dec!(300.50), TransactionKind::Income, false),
        record("Alquiler", dec!(850), TransactionKind::Expense, true),
        record("Luz", dec!(65.40), TransactionKind::Expense, false),
    ];
    let summary = compute_summary(&records);
    assert_eq!(summary.total_income, dec!(2750.50));
    assert_eq!(summary.total_expense, dec!(915.40));
    assert_eq!(summary.balance, dec!(1835.10));
    assert_eq!(summary.income_count, 2);
    assert_eq!(summary.expense_count, 2);
}

#[test]
fn test_balance_is_exact_for_cents() {
    // 0.1 + 0.2 style drift must not appear
    let records: Vec<Transaction> = (0..10)
        .map(|_| record("x", dec!(0.10), TransactionKind::Expense, false))
        .chain(std::iter::once(record("y", dec!(1.00), TransactionKind::Income, false)))
        .collect();
    let summary = compute_summary(&records);
    assert_eq!(summary.total_expense, dec!(1.00));
    assert_eq!(summary.balance, Decimal::ZERO);
    assert_eq!(summary.total_income - summary.total_expense, summary.balance);
}

#[test]
fn test_reminders_keep_ledger_order() {
    let records = vec![
        record("C", dec!(3), TransactionKind::Expense, true),
        record("B", dec!(2), TransactionKind::Expense, false),
        record("A", dec!(1), TransactionKind::Expense, true),
    ];
    let summary = compute_summary(&records);
    let names: Vec<&str> = summary.active_reminders.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A"]);
}

// ── add_transaction ───────────────────────────────────────────

#[test]
fn test_add_rent_with_reminder() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);

    let (txn, summary) = ledger
        .add_transaction(&expense("Alquiler", "850").with_reminder(5), &mut store, &anonymous())
        .unwrap();

    assert!(txn.id.is_some());
    assert_eq!(txn.amount, dec!(850));
    assert_eq!(summary.total_income, Decimal::ZERO);
    assert_eq!(summary.total_expense, dec!(850));
    assert_eq!(summary.balance, dec!(-850));
    assert_eq!(summary.active_reminders.len(), 1);
    let reminder = &summary.active_reminders[0];
    assert_eq!(reminder.name, "Alquiler");
    assert_eq!(reminder.amount, dec!(850));
    assert_eq!(reminder.reminder_lead_days, 5);
}

#[test]
fn test_add_salary_then_netflix() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);
    let session = anonymous();

    ledger
        .add_transaction(&income("Salario", "2450"), &mut store, &session)
        .unwrap();
    let (_, summary) = ledger
        .add_transaction(&expense("Netflix", "15.99").with_reminder(0), &mut store, &session)
        .unwrap();

    assert_eq!(summary.balance, dec!(2434.01));
    assert_eq!(summary.active_reminders.len(), 1);
    assert_eq!(summary.active_reminders[0].name, "Netflix");
}

#[test]
fn test_income_never_keeps_reminder() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);

    let (txn, summary) = ledger
        .add_transaction(&income("Salario", "2450").with_reminder(7), &mut store, &anonymous())
        .unwrap();

    assert!(!txn.has_reminder);
    assert!(!ledger.records()[0].has_reminder);
    assert!(summary.active_reminders.is_empty());
}

#[test]
fn test_reminders_never_include_income() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);
    let session = anonymous();
    for (i, kind) in [TransactionKind::Income, TransactionKind::Expense]
        .into_iter()
        .cycle()
        .take(6)
        .enumerate()
    {
        let input = NewTransaction::new(format!("t{i}"), "10", kind).with_reminder(2);
        ledger.add_transaction(&input, &mut store, &session).unwrap();
    }

    let summary = ledger.summary();
    assert_eq!(summary.active_reminders.len(), 3);
    assert!(summary.active_reminders.iter().all(|t| t.is_expense()));
    assert!(summary
        .active_reminders
        .iter()
        .all(|r| ledger.records().iter().any(|t| t.id == r.id && t.has_reminder)));
}

#[test]
fn test_adds_are_prepended() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);
    let session = anonymous();

    for i in 1..=5 {
        ledger
            .add_transaction(&expense(&format!("call {i}"), "1"), &mut store, &session)
            .unwrap();
    }

    assert_eq!(ledger.len(), 5);
    assert_eq!(ledger.records().first().unwrap().name, "call 5");
    assert_eq!(ledger.records().last().unwrap().name, "call 1");
}

#[test]
fn test_ids_are_unique() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);
    let session = anonymous();
    for _ in 0..20 {
        ledger.add_transaction(&expense("Café", "1.20"), &mut store, &session).unwrap();
    }
    let mut ids: Vec<i64> = ledger.records().iter().filter_map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn test_empty_name_is_rejected() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);

    let err = ledger
        .add_transaction(&expense("", "10"), &mut store, &anonymous())
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert!(ledger.is_empty());

    let err = ledger
        .add_transaction(&expense("   ", "10"), &mut store, &anonymous())
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert!(store.list_transactions("").unwrap().is_empty());
}

#[test]
fn test_non_numeric_amount_is_rejected() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);

    let err = ledger
        .add_transaction(&expense("X", "abc"), &mut store, &anonymous())
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert!(ledger.is_empty());
}

#[test]
fn test_negative_amount_is_rejected() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);
    let err = ledger
        .add_transaction(&expense("X", "-5"), &mut store, &anonymous())
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
}

#[test]
fn test_name_is_trimmed() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);
    let (txn, _) = ledger
        .add_transaction(&expense("  Luz  ", "65,40"), &mut store, &anonymous())
        .unwrap();
    assert_eq!(txn.name, "Luz");
    assert_eq!(txn.amount, dec!(65.40));
}

#[test]
fn test_failed_write_leaves_ledger_unchanged() {
    let mut mem = MemoryStore::new();
    let mut ledger = ready_ledger(&mem);
    ledger
        .add_transaction(&expense("Alquiler", "850"), &mut mem, &anonymous())
        .unwrap();
    let before = ledger.records().to_vec();

    let mut store = RejectingStore { attempts: 0 };
    let err = ledger
        .add_transaction(&expense("Netflix", "15.99"), &mut store, &anonymous())
        .unwrap_err();

    assert!(matches!(err, LedgerError::Persistence(_)));
    assert!(err.is_retryable());
    assert_eq!(store.attempts, 1);
    assert_eq!(ledger.records(), before.as_slice());
}

#[test]
fn test_write_without_session_is_rejected_before_store() {
    let mut store = RejectingStore { attempts: 0 };
    let mut ledger = Ledger::new("ana");
    let required = LocalSession::new(None, true);

    let err = ledger
        .add_transaction(&expense("Alquiler", "850"), &mut store, &required)
        .unwrap_err();

    assert_eq!(err, LedgerError::Unauthenticated);
    assert!(!err.is_retryable());
    assert_eq!(store.attempts, 0);
    assert!(ledger.is_empty());
}

#[test]
fn test_session_for_other_user_is_rejected() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::new("ana");
    let bob = LocalSession::new(Some("bob".into()), true);

    let err = ledger
        .add_transaction(&expense("Alquiler", "850"), &mut store, &bob)
        .unwrap_err();
    assert_eq!(err, LedgerError::Unauthenticated);
    assert!(store.list_transactions("bob").unwrap().is_empty());
}

#[test]
fn test_validation_runs_before_auth() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::new("ana");
    let required = LocalSession::new(None, true);
    let err = ledger
        .add_transaction(&expense("", "850"), &mut store, &required)
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
}

#[test]
fn test_authenticated_write_is_owned_by_user() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::new("ana");
    ledger.load(&store).unwrap();
    let ana = LocalSession::new(Some("ana".into()), true);

    let (txn, _) = ledger
        .add_transaction(&expense("Alquiler", "850"), &mut store, &ana)
        .unwrap();
    assert_eq!(txn.user_id, "ana");
    assert_eq!(store.list_transactions("ana").unwrap().len(), 1);
    assert!(store.list_transactions("").unwrap().is_empty());
}

#[test]
fn test_ledgers_do_not_share_records() {
    let mut store = MemoryStore::new();
    let mut ana = Ledger::new("ana");
    let mut bob = Ledger::new("bob");
    ana.load(&store).unwrap();
    bob.load(&store).unwrap();

    ana.add_transaction(
        &expense("Alquiler", "850"),
        &mut store,
        &LocalSession::new(Some("ana".into()), true),
    )
    .unwrap();

    assert_eq!(ana.len(), 1);
    assert!(bob.is_empty());
    bob.load(&store).unwrap();
    assert!(bob.is_empty());
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_default_category() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);
    let (txn, _) = ledger
        .add_transaction(&expense("Panadería", "3"), &mut store, &anonymous())
        .unwrap();
    assert_eq!(txn.category, DEFAULT_CATEGORY);
}

#[test]
fn test_explicit_category_wins_over_rules() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);
    let (txn, _) = ledger
        .add_transaction(
            &expense("Netflix", "15.99").with_category(" Streaming "),
            &mut store,
            &anonymous(),
        )
        .unwrap();
    assert_eq!(txn.category, "Streaming");
}

#[test]
fn test_blank_category_falls_back_to_rules() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);
    let (txn, _) = ledger
        .add_transaction(&expense("Netflix", "15.99").with_category("  "), &mut store, &anonymous())
        .unwrap();
    assert_eq!(txn.category, "Ocio");
}

#[test]
fn test_store_rules_are_applied_on_load() {
    let mut store = MemoryStore::new();
    store
        .insert_category_rule(&CategoryRule::new_contains("mercadona", "Comida"))
        .unwrap();
    let mut ledger = ready_ledger(&store);
    let (txn, _) = ledger
        .add_transaction(&expense("Mercadona", "54.10"), &mut store, &anonymous())
        .unwrap();
    assert_eq!(txn.category, "Comida");
}

#[test]
fn test_set_rules_reports_bad_regex() {
    let mut ledger = Ledger::new("");
    let bad = ledger.set_rules(&[CategoryRule::new_regex("(", "X")]);
    assert_eq!(bad, vec!["(".to_string()]);
}

// ── Loading ───────────────────────────────────────────────────

#[test]
fn test_new_ledger_is_loading() {
    let ledger = Ledger::new("");
    assert_eq!(*ledger.state(), LoadState::Loading);
    assert!(ledger.is_empty());
    assert_eq!(ledger.owner(), "");
}

#[test]
fn test_load_example_data() {
    let store = MemoryStore::with_example_data("");
    let ledger = ready_ledger(&store);
    assert_eq!(*ledger.state(), LoadState::Ready);
    assert_eq!(ledger.len(), 4);
    // Newest first
    assert_eq!(ledger.records()[0].name, "Alquiler");
    assert_eq!(ledger.records()[3].name, "Salario");

    let summary = ledger.summary();
    assert_eq!(summary.total_income, dec!(2450.00));
    assert_eq!(summary.total_expense, dec!(931.39));
    assert_eq!(summary.balance, dec!(1518.61));
    assert_eq!(summary.active_reminders.len(), 3);

    let netflix = ledger
        .records()
        .iter()
        .find(|t| t.name == "Suscripción Netflix")
        .unwrap();
    assert_eq!(netflix.due_label(), "Tomorrow");
}

#[test]
fn test_failed_load_is_degraded_not_fatal() {
    let store = RejectingStore { attempts: 0 };
    let mut ledger = Ledger::new("");
    let err = ledger.load(&store).unwrap_err();
    assert!(matches!(err, LedgerError::Fetch(_)));
    assert!(matches!(ledger.state(), LoadState::Failed(_)));
    assert!(ledger.is_empty());
    assert_eq!(ledger.summary(), Summary::default());
}

#[test]
fn test_superseded_load_is_dropped() {
    let mut ledger = Ledger::new("");
    let first = ledger.begin_load();
    let second = ledger.begin_load();

    let newer = vec![record("newer", dec!(1), TransactionKind::Expense, false)];
    assert!(ledger.finish_load(second, Ok(newer)));

    let stale = vec![
        record("stale", dec!(1), TransactionKind::Expense, false),
        record("stale", dec!(2), TransactionKind::Expense, false),
    ];
    assert!(!ledger.finish_load(first, Ok(stale)));

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.records()[0].name, "newer");
    assert_eq!(*ledger.state(), LoadState::Ready);
}

#[test]
fn test_superseded_failure_is_dropped() {
    let mut ledger = Ledger::new("");
    let first = ledger.begin_load();
    let second = ledger.begin_load();
    assert!(!ledger.finish_load(first, Err(LedgerError::Fetch("late".into()))));
    assert_eq!(*ledger.state(), LoadState::Loading);
    ledger.finish_load(second, Ok(Vec::new()));
    assert_eq!(*ledger.state(), LoadState::Ready);
}

#[test]
fn test_load_sorts_and_normalizes() {
    let mut ledger = Ledger::new("");
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let mut old = record("old", dec!(10), TransactionKind::Income, true);
    old.created_at = base;
    let mut new = record("new", dec!(5), TransactionKind::Expense, true);
    new.created_at = base + Duration::days(1);

    let ticket = ledger.begin_load();
    ledger.finish_load(ticket, Ok(vec![old, new]));

    assert_eq!(ledger.records()[0].name, "new");
    assert_eq!(ledger.records()[1].name, "old");
    assert!(!ledger.records()[1].has_reminder);
}

#[test]
fn test_load_drops_foreign_records() {
    let mut ledger = Ledger::new("ana");
    let mut mine = record("mine", dec!(1), TransactionKind::Expense, false);
    mine.user_id = "ana".into();
    let mut theirs = record("theirs", dec!(1), TransactionKind::Expense, false);
    theirs.user_id = "bob".into();

    let ticket = ledger.begin_load();
    ledger.finish_load(ticket, Ok(vec![mine, theirs]));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.records()[0].name, "mine");
}

#[test]
fn test_add_after_failed_load_stays_degraded() {
    let mut ledger = Ledger::new("");
    ledger.load(&RejectingStore { attempts: 0 }).unwrap_err();

    let mut store = MemoryStore::with_example_data("");
    ledger
        .add_transaction(&expense("Alquiler", "850"), &mut store, &anonymous())
        .unwrap();
    assert!(matches!(ledger.state(), LoadState::Failed(_)));
    assert_eq!(ledger.len(), 1);
    assert_eq!(store.list_transactions("").unwrap().len(), 5);

    ledger.load(&store).unwrap();
    assert_eq!(*ledger.state(), LoadState::Ready);
    assert_eq!(ledger.len(), 5);
}

#[test]
fn test_add_during_load_survives_stale_result() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::new("");

    let ticket = ledger.begin_load();
    let snapshot = store.list_transactions("");
    ledger
        .add_transaction(&expense("Alquiler", "850"), &mut store, &anonymous())
        .unwrap();
    assert!(ledger.finish_load(ticket, snapshot));

    assert_eq!(*ledger.state(), LoadState::Ready);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.records()[0].name, "Alquiler");
    assert_eq!(store.list_transactions("").unwrap().len(), 1);
}

#[test]
fn test_add_during_load_is_not_duplicated() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::new("");

    let ticket = ledger.begin_load();
    ledger
        .add_transaction(&expense("Alquiler", "850"), &mut store, &anonymous())
        .unwrap();
    let fetched = store.list_transactions("");
    ledger.finish_load(ticket, fetched);

    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_add_during_failed_load_is_kept() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::new("");

    let ticket = ledger.begin_load();
    ledger
        .add_transaction(&expense("Alquiler", "850"), &mut store, &anonymous())
        .unwrap();
    ledger.finish_load(ticket, Err(LedgerError::Fetch("timeout".into())));

    assert!(matches!(ledger.state(), LoadState::Failed(_)));
    assert_eq!(ledger.len(), 1);
}

// ── Overflow ──────────────────────────────────────────────────

#[test]
fn test_max_size_amounts_are_rejected_before_store() {
    let mut store = MemoryStore::new();
    let mut ledger = ready_ledger(&store);
    let huge = "79228162514264337593543950335";

    for _ in 0..2 {
        let err = ledger
            .add_transaction(&income("Lotería", huge), &mut store, &anonymous())
            .unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }
    assert!(store.list_transactions("").unwrap().is_empty());
    assert_eq!(ledger.summary(), Summary::default());
}

#[test]
fn test_overflowing_total_is_rejected_before_store() {
    let mut store = MemoryStore::new();
    let mut ledger = Ledger::new("");
    let ticket = ledger.begin_load();
    ledger.finish_load(
        ticket,
        Ok(vec![record("legacy", Decimal::MAX, TransactionKind::Expense, false)]),
    );

    let err = ledger
        .add_transaction(&expense("Alquiler", "850"), &mut store, &anonymous())
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert!(store.list_transactions("").unwrap().is_empty());

    // Income still fits.
    ledger
        .add_transaction(&income("Salario", "2450"), &mut store, &anonymous())
        .unwrap();
}

#[test]
fn test_summary_saturates_instead_of_panicking() {
    let records = vec![
        record("a", Decimal::MAX, TransactionKind::Income, false),
        record("b", Decimal::MAX, TransactionKind::Income, false),
        record("c", Decimal::MAX, TransactionKind::Expense, false),
    ];
    let summary = compute_summary(&records);
    assert_eq!(summary.total_income, Decimal::MAX);
    assert_eq!(summary.total_expense, Decimal::MAX);
    assert_eq!(summary.balance, Decimal::ZERO);
    assert_eq!(summary.income_count, 2);
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_plain() {
    assert_eq!(parse_amount("850").unwrap(), dec!(850));
    assert_eq!(parse_amount("15.99").unwrap(), dec!(15.99));
    assert_eq!(parse_amount(" 0 ").unwrap(), Decimal::ZERO);
}

#[test]
fn test_parse_amount_comma_decimal() {
    assert_eq!(parse_amount("65,40").unwrap(), dec!(65.40));
    assert_eq!(parse_amount("2.450,00").unwrap(), dec!(2450.00));
    assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
}

#[test]
fn test_parse_amount_euro_suffix() {
    assert_eq!(parse_amount("15,99€").unwrap(), dec!(15.99));
    assert_eq!(parse_amount("850 €").unwrap(), dec!(850));
}

#[test]
fn test_parse_amount_limits() {
    assert_eq!(parse_amount("15.990").unwrap(), dec!(15.99));
    assert!(matches!(parse_amount("15.999"), Err(LedgerError::Validation(_))));
    assert!(matches!(parse_amount("0,001"), Err(LedgerError::Validation(_))));
    assert_eq!(parse_amount("1000000000000").unwrap(), MAX_AMOUNT);
    assert!(matches!(parse_amount("1000000000000.01"), Err(LedgerError::Validation(_))));
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert!(matches!(parse_amount("abc"), Err(LedgerError::Validation(_))));
    assert!(matches!(parse_amount(""), Err(LedgerError::Validation(_))));
    assert!(matches!(parse_amount("€"), Err(LedgerError::Validation(_))));
    assert!(matches!(parse_amount("12abc"), Err(LedgerError::Validation(_))));
    assert!(matches!(parse_amount("-1"), Err(LedgerError::Validation(_))));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        LedgerError::Validation("name is required".into()).to_string(),
        "Invalid transaction: name is required"
    );
    assert_eq!(
        LedgerError::Unauthenticated.to_string(),
        "Sign in required (use --user <id>)"
    );
}

#[test]
fn test_session_type_roundtrip() {
    let session = LocalSession::new(Some("ana".into()), false);
    assert_eq!(session.current_session(), Some(Session::new("ana")));
}
