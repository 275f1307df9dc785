use anyhow::{Context, Result};
use std::path::PathBuf;

use super::Backend;
use crate::ledger::{export_csv, Ledger};
use crate::models::{CategoryRule, NewTransaction, TransactionKind};
use crate::ui::util::{format_amount, format_signed, truncate};

pub(crate) fn as_cli(args: &[String], backend: &mut Backend) -> Result<()> {
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "add" => cli_add(rest, backend),
        "list" | "ls" => cli_list(backend),
        "summary" | "s" => cli_summary(backend),
        "reminders" => cli_reminders(backend),
        "export" => cli_export(rest, backend),
        "rule" => cli_rule(rest, backend),
        "rules" => cli_rules(backend),
        "delete-rule" => cli_delete_rule(rest, backend),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("moneypaz {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Moneypaz - income, expenses and payment reminders");
    println!();
    println!("Usage: moneypaz [--demo] [--user <id>] [--db <path>] [--require-login] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add <name> <amount>           Record a transaction (expense by default)");
    println!("    --income | --expense        Kind of movement");
    println!("    --category <name>           Category (default: rule match or General)");
    println!("    --remind <days>             Reminder lead time, expenses only (0, 2, 7...)");
    println!("  list                          List transactions, newest first");
    println!("  summary                       Print totals and balance");
    println!("  reminders                     List active payment reminders");
    println!("  export [path]                 Export transactions to CSV");
    println!("  rule <pattern> <category>     Add a category rule");
    println!("    --regex                     Treat the pattern as a regular expression");
    println!("    --priority <n>              Higher runs first (default 0)");
    println!("  rules                         List category rules");
    println!("  delete-rule <id>              Delete a category rule");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment: MONEYPAZ_USER, MONEYPAZ_DB, MONEYPAZ_REQUIRE_LOGIN, MONEYPAZ_LOG");
}

fn load_ledger(backend: &Backend) -> Result<Ledger> {
    let mut ledger = Ledger::new(backend.session.owner_id());
    ledger.load(backend.store.as_ref())?;
    Ok(ledger)
}

/// Flags and positionals of `add`, before validation.
#[derive(Debug)]
struct AddArgs {
    input: NewTransaction,
    /// `--remind` was given for an income and dropped.
    ignored_reminder: bool,
}

fn parse_add_args(args: &[String]) -> Result<AddArgs> {
    let mut kind = TransactionKind::Expense;
    let mut category = None;
    let mut remind = None;
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--income" => kind = TransactionKind::Income,
            "--expense" => kind = TransactionKind::Expense,
            "--category" | "-c" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--category needs a value"))?;
                category = Some(value.clone());
            }
            "--remind" | "-r" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--remind needs a number of days"))?;
                let days: u32 = value
                    .parse()
                    .with_context(|| format!("Invalid reminder lead time: {value}"))?;
                remind = Some(days);
            }
            other => positional.push(other),
        }
    }

    let Some((amount, name)) = positional.split_last() else {
        anyhow::bail!("Usage: moneypaz add <name> <amount> [--income|--expense]");
    };
    if name.is_empty() {
        anyhow::bail!("Usage: moneypaz add <name> <amount> [--income|--expense]");
    }
    let ignored_reminder = remind.is_some() && kind == TransactionKind::Income;

    let mut input = NewTransaction::new(name.join(" "), *amount, kind);
    if let Some(c) = category {
        input = input.with_category(c);
    }
    if let Some(days) = remind.filter(|_| !ignored_reminder) {
        input = input.with_reminder(days);
    }
    Ok(AddArgs {
        input,
        ignored_reminder,
    })
}

fn cli_add(args: &[String], backend: &mut Backend) -> Result<()> {
    let AddArgs {
        input,
        ignored_reminder,
    } = parse_add_args(args)?;
    if ignored_reminder {
        println!("Note: reminders are only kept for expenses; ignoring --remind");
    }
    let mut ledger = load_ledger(backend)?;

    let (txn, summary) =
        match ledger.add_transaction(&input, backend.store.as_mut(), &backend.session) {
            Ok(added) => added,
            Err(e) if e.is_retryable() => {
                anyhow::bail!("{e}. Nothing was recorded; try again")
            }
            Err(e) => return Err(e.into()),
        };

    println!(
        "Added {} '{}' {} [{}]",
        txn.kind.as_str(),
        txn.name,
        format_signed(txn.signed_amount()),
        txn.category
    );
    if txn.has_reminder {
        println!("Reminder: {}", txn.due_label());
    }
    println!("Balance: {}", format_amount(summary.balance));
    Ok(())
}

fn cli_list(backend: &Backend) -> Result<()> {
    let ledger = load_ledger(backend)?;
    if ledger.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    println!(
        "{:<11} {:<28} {:<14} {:>14}  Alert",
        "Date", "Name", "Category", "Amount"
    );
    println!("{}", "─".repeat(80));
    for txn in ledger.records() {
        let alert = if txn.has_reminder {
            txn.due_label()
        } else {
            String::new()
        };
        println!(
            "{:<11} {:<28} {:<14} {:>14}  {}",
            txn.created_at.with_timezone(&chrono::Local).format("%d/%m/%Y"),
            truncate(&txn.name, 28),
            truncate(&txn.category, 14),
            format_signed(txn.signed_amount()),
            alert
        );
    }
    Ok(())
}

fn cli_summary(backend: &Backend) -> Result<()> {
    let ledger = load_ledger(backend)?;
    let summary = ledger.summary();
    let who = match ledger.owner() {
        "" => "anonymous",
        owner => owner,
    };

    println!("Moneypaz - {who} ({})", backend.store.describe());
    println!("{}", "─".repeat(40));
    println!(
        "  Income:     {:>14}  ({} txns)",
        format_amount(summary.total_income),
        summary.income_count
    );
    println!(
        "  Expenses:   {:>14}  ({} txns)",
        format_amount(summary.total_expense),
        summary.expense_count
    );
    println!("  Balance:    {:>14}", format_amount(summary.balance));
    println!("  Reminders:  {:>14}", format!("{} pending", summary.active_reminders.len()));
    Ok(())
}

fn cli_reminders(backend: &Backend) -> Result<()> {
    let summary = load_ledger(backend)?.summary();
    if summary.active_reminders.is_empty() {
        println!("No active reminders");
        return Ok(());
    }

    println!("{:<12} {:<11} {:<28} {:>14}", "Due", "Remind on", "Name", "Amount");
    println!("{}", "─".repeat(68));
    for txn in &summary.active_reminders {
        let remind_on = txn
            .remind_on()
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_default();
        println!(
            "{:<12} {:<11} {:<28} {:>14}",
            txn.due_label(),
            remind_on,
            truncate(&txn.name, 28),
            format_amount(txn.amount)
        );
    }
    Ok(())
}

fn cli_export(args: &[String], backend: &Backend) -> Result<()> {
    let path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| PathBuf::from(super::shellexpand(a)))
        .unwrap_or_else(crate::ui::commands::default_export_path);

    let ledger = load_ledger(backend)?;
    let count = export_csv(ledger.records(), &path)?;
    if count == 0 {
        println!("No transactions; wrote an empty file to {}", path.display());
    } else {
        println!("Exported {count} transactions to {}", path.display());
    }
    Ok(())
}

fn cli_rule(args: &[String], backend: &mut Backend) -> Result<()> {
    let mut is_regex = false;
    let mut priority = 0;
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--regex" => is_regex = true,
            "--priority" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--priority needs a number"))?;
                priority = value
                    .parse()
                    .with_context(|| format!("Invalid priority: {value}"))?;
            }
            other => positional.push(other),
        }
    }

    let [pattern @ .., category] = positional.as_slice() else {
        anyhow::bail!("Usage: moneypaz rule <pattern> <category> [--regex] [--priority N]");
    };
    if pattern.is_empty() {
        anyhow::bail!("Usage: moneypaz rule <pattern> <category> [--regex] [--priority N]");
    }
    let pattern = pattern.join(" ");

    let mut rule = if is_regex {
        regex::Regex::new(&pattern).with_context(|| format!("Invalid regex: {pattern}"))?;
        CategoryRule::new_regex(pattern, *category)
    } else {
        CategoryRule::new_contains(pattern, *category)
    };
    rule.priority = priority;

    let id = backend.store.insert_category_rule(&rule)?;
    println!("Added rule #{id}: {rule}");
    Ok(())
}

fn cli_rules(backend: &Backend) -> Result<()> {
    let rules = backend.store.list_category_rules()?;
    if rules.is_empty() {
        println!("No custom rules; built-in defaults apply");
        return Ok(());
    }

    println!("{:<4} {:<8} {:<30} Category", "ID", "Priority", "Pattern");
    println!("{}", "─".repeat(60));
    for rule in &rules {
        let pattern = if rule.is_regex {
            format!("/{}/", rule.pattern)
        } else {
            rule.pattern.clone()
        };
        println!(
            "{:<4} {:<8} {:<30} {}",
            rule.id.unwrap_or(0),
            rule.priority,
            truncate(&pattern, 30),
            rule.category
        );
    }
    Ok(())
}

fn cli_delete_rule(args: &[String], backend: &mut Backend) -> Result<()> {
    let id: i64 = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: moneypaz delete-rule <id>"))?
        .trim_start_matches('#')
        .parse()
        .context("Rule id must be a number")?;
    backend.store.delete_category_rule(id)?;
    println!("Deleted rule #{id}");
    Ok(())
}
