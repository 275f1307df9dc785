use anyhow::{Context, Result};
use chrono::SecondsFormat;
use rust_decimal::Decimal;
use std::path::Path;

use crate::models::Transaction;

const HEADER: [&str; 7] = [
    "created_at",
    "name",
    "kind",
    "category",
    "amount",
    "has_reminder",
    "reminder_lead_days",
];

/// Plain decimal with at least two places; never rounds.
fn format_amount(amount: Decimal) -> String {
    if amount.scale() < 2 {
        format!("{amount:.2}")
    } else {
        amount.to_string()
    }
}

/// Write `records` to a CSV file in the order given. Returns the row count.
pub(crate) fn export_csv(records: &[Transaction], path: &Path) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    wtr.write_record(HEADER)?;

    for txn in records {
        wtr.write_record([
            txn.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            txn.name.clone(),
            txn.kind.as_str().to_string(),
            txn.category.clone(),
            format_amount(txn.amount),
            txn.has_reminder.to_string(),
            txn.reminder_lead_days.to_string(),
        ])?;
    }

    wtr.flush().context("Failed to flush export file")?;
    Ok(records.len())
}
