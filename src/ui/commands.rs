use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::categorize::suggest_pattern;
use crate::ledger::export_csv;
use crate::models::{CategoryRule, NewTransaction, TransactionKind};
use crate::run::Backend;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Backend) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Moneypaz", cmd_quit, r);
    register_command!("quit", "Quit Moneypaz", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("r", "Go to Reminders", cmd_reminders, r);
    register_command!("reminders", "Go to Reminders", cmd_reminders, r);
    register_command!(
        "a",
        "Add transaction (form, or :a Alquiler 850)",
        cmd_add,
        r
    );
    register_command!(
        "add",
        "Add transaction (form, or :add Salario 2450 income)",
        cmd_add,
        r
    );
    register_command!("refresh", "Reload transactions from the store", cmd_refresh, r);
    register_command!(
        "export",
        "Export the ledger to CSV (e.g. :export ~/gastos.csv)",
        cmd_export,
        r
    );
    register_command!(
        "rule",
        "Add category rule (e.g. :rule mercadona Comida)",
        cmd_rule,
        r
    );
    register_command!(
        "regex-rule",
        "Add regex rule (e.g. :regex-rule ^Seguro.* Seguros)",
        cmd_regex_rule,
        r
    );
    register_command!("rules", "List category rules", cmd_rules, r);
    register_command!(
        "delete-rule",
        "Delete category rule by id (e.g. :delete-rule 3)",
        cmd_delete_rule,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

/// Run a `:` command. Failures end up in the status bar, never as errors.
pub(crate) fn handle_command(input: &str, app: &mut App, backend: &mut Backend) {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        if let Err(e) = (cmd.run)(args, app, backend) {
            log::warn!(":{cmd_name} failed: {e:#}");
            app.set_status(format!("Error: {e:#}"));
        }
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1)
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Parse `<name words> <amount> [income|expense]`.
pub(crate) fn parse_quick_add(args: &str) -> Option<NewTransaction> {
    let mut words: Vec<&str> = args.split_whitespace().collect();
    let kind = match words.last().and_then(|w| TransactionKind::parse(w)) {
        Some(kind) if words.len() > 2 => {
            words.pop();
            kind
        }
        _ => TransactionKind::Expense,
    };
    let amount = words.pop()?;
    if words.is_empty() {
        return None;
    }
    Some(NewTransaction::new(words.join(" "), amount, kind))
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _backend: &mut Backend) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _backend: &mut Backend) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, _backend: &mut Backend) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_reminders(_args: &str, app: &mut App, _backend: &mut Backend) -> anyhow::Result<()> {
    app.screen = Screen::Reminders;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, backend: &mut Backend) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_form();
        return Ok(());
    }
    let Some(input) = parse_quick_add(args) else {
        app.set_status("Usage: :add <name> <amount> [income|expense]");
        return Ok(());
    };
    let (txn, summary) =
        app.ledger
            .add_transaction(&input, backend.store.as_mut(), &backend.session)?;
    app.report_added(&txn, &summary);
    Ok(())
}

fn cmd_refresh(_args: &str, app: &mut App, backend: &mut Backend) -> anyhow::Result<()> {
    app.refresh(backend);
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, _backend: &mut Backend) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        default_export_path()
    } else {
        PathBuf::from(crate::run::shellexpand(args))
    };

    let count = export_csv(app.ledger.records(), &path)?;
    if count == 0 {
        app.set_status(format!("No transactions; wrote header to {}", path.display()));
    } else {
        app.set_status(format!("Exported {count} transactions to {}", path.display()));
    }
    Ok(())
}

pub(crate) fn default_export_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    let stamp = chrono::Local::now().format("%Y-%m-%d");
    PathBuf::from(format!("{home}/moneypaz-export-{stamp}.csv"))
}

/// `:rule <pattern> <category>`, or `:rule <category>` to derive the pattern
/// from the selected transaction.
fn cmd_rule(args: &str, app: &mut App, backend: &mut Backend) -> anyhow::Result<()> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let rule = match parts.as_slice() {
        [] => {
            app.set_status("Usage: :rule <pattern> <category>");
            return Ok(());
        }
        [category] => {
            let Some(txn) = app.selected_transaction() else {
                app.set_status("Select a transaction first, or use :rule <pattern> <category>");
                return Ok(());
            };
            CategoryRule::new_contains(suggest_pattern(&txn.name), *category)
        }
        [pattern @ .., category] => CategoryRule::new_contains(pattern.join(" "), *category),
    };
    save_rule(rule, app, backend)
}

fn cmd_regex_rule(args: &str, app: &mut App, backend: &mut Backend) -> anyhow::Result<()> {
    let Some((pattern, category)) = args.rsplit_once(' ') else {
        app.set_status("Usage: :regex-rule <regex> <category>");
        return Ok(());
    };
    if let Err(e) = regex::Regex::new(pattern.trim()) {
        app.set_status(format!("Invalid regex: {e}"));
        return Ok(());
    }
    save_rule(
        CategoryRule::new_regex(pattern.trim(), category.trim()),
        app,
        backend,
    )
}

fn save_rule(rule: CategoryRule, app: &mut App, backend: &mut Backend) -> anyhow::Result<()> {
    backend.store.insert_category_rule(&rule)?;
    let rules = backend.store.list_category_rules()?;
    app.ledger.set_rules(&rules);
    log::info!("Added rule {rule}");
    app.set_status(format!("Rule added: {rule}. Applies to new transactions"));
    Ok(())
}

fn cmd_rules(_args: &str, app: &mut App, backend: &mut Backend) -> anyhow::Result<()> {
    let rules = backend.store.list_category_rules()?;
    if rules.is_empty() {
        app.set_status("No custom rules; built-in defaults apply");
        return Ok(());
    }
    let listed: Vec<String> = rules
        .iter()
        .map(|r| format!("#{} {r}", r.id.unwrap_or(0)))
        .collect();
    app.set_status(listed.join(" | "));
    Ok(())
}

fn cmd_delete_rule(args: &str, app: &mut App, backend: &mut Backend) -> anyhow::Result<()> {
    let Ok(id) = args.trim_start_matches('#').parse::<i64>() else {
        app.set_status("Usage: :delete-rule <id> (see :rules)");
        return Ok(());
    };
    backend.store.delete_category_rule(id)?;
    let rules = backend.store.list_category_rules()?;
    app.ledger.set_rules(&rules);
    app.set_status(format!("Deleted rule #{id}"));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _backend: &mut Backend) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
