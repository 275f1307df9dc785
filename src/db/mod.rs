mod schema;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ledger::{LedgerError, TransactionStore};
use crate::models::*;

const TRANSACTION_COLUMNS: &str =
    "id, user_id, name, amount, kind, category, created_at, has_reminder, reminder_lead_days";

pub(crate) struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        db.migrate().context("Database migration failed")?;
        log::info!("Opened database {}", path.display());
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn, path: None };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        let tx = self.conn.transaction()?;
        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                log::info!("Migrating schema from v{from_version}");
                tx.execute_batch(sql)
                    .with_context(|| format!("Migration from v{from_version} failed"))?;
            }
        }
        if current < schema::CURRENT_VERSION {
            tx.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn schema_version(&self) -> Result<i32> {
        Ok(self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })?)
    }

    // ── Transactions ──────────────────────────────────────────

    pub(crate) fn insert_transaction_row(&self, txn: &Transaction) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO transactions (user_id, name, amount, kind, category, created_at, has_reminder, reminder_lead_days)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                txn.user_id,
                txn.name,
                txn.amount.to_string(),
                txn.kind.as_str(),
                txn.category,
                txn.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
                txn.has_reminder,
                txn.reminder_lead_days,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let sql = format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions
             WHERE user_id = ?1
             ORDER BY created_at DESC, id DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![user_id], transaction_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ── Category rules ────────────────────────────────────────

    pub(crate) fn get_category_rules(&self) -> Result<Vec<CategoryRule>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, pattern, category, is_regex, priority FROM category_rules ORDER BY priority DESC, pattern",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CategoryRule {
                id: Some(row.get(0)?),
                pattern: row.get(1)?,
                category: row.get(2)?,
                is_regex: row.get(3)?,
                priority: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn insert_category_rule_row(&self, rule: &CategoryRule) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO category_rules (pattern, category, is_regex, priority)
             VALUES (?1, ?2, ?3, ?4)",
            params![rule.pattern, rule.category, rule.is_regex, rule.priority],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn delete_category_rule_row(&self, id: i64) -> Result<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM category_rules WHERE id = ?1", params![id])?)
    }
}

fn transaction_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Transaction> {
    let amount: String = row.get(3)?;
    let kind: String = row.get(4)?;
    let created_at: String = row.get(6)?;
    Ok(Transaction {
        id: Some(row.get(0)?),
        user_id: row.get(1)?,
        name: row.get(2)?,
        amount: Decimal::from_str(&amount).map_err(|e| conversion_error(3, e))?,
        kind: TransactionKind::parse(&kind)
            .ok_or_else(|| conversion_error(4, format!("unknown kind '{kind}'")))?,
        category: row.get(5)?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|e| conversion_error(6, e))?,
        has_reminder: row.get(7)?,
        reminder_lead_days: row.get(8)?,
    })
}

fn conversion_error(
    column: usize,
    err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, err.into())
}

impl TransactionStore for Database {
    fn list_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, LedgerError> {
        self.get_transactions(user_id)
            .map_err(|e| LedgerError::Fetch(format!("{e:#}")))
    }

    fn insert_transaction(&mut self, txn: &Transaction) -> Result<Transaction, LedgerError> {
        let id = self
            .insert_transaction_row(txn)
            .map_err(|e| LedgerError::Persistence(format!("{e:#}")))?;
        let mut stored = txn.clone();
        stored.id = Some(id);
        Ok(stored)
    }

    fn list_category_rules(&self) -> Result<Vec<CategoryRule>, LedgerError> {
        self.get_category_rules()
            .map_err(|e| LedgerError::Fetch(format!("{e:#}")))
    }

    fn insert_category_rule(&mut self, rule: &CategoryRule) -> Result<i64, LedgerError> {
        self.insert_category_rule_row(rule)
            .map_err(|e| LedgerError::Persistence(format!("{e:#}")))
    }

    fn delete_category_rule(&mut self, id: i64) -> Result<(), LedgerError> {
        match self.delete_category_rule_row(id) {
            Ok(0) => Err(LedgerError::Persistence(format!("no rule with id {id}"))),
            Ok(_) => Ok(()),
            Err(e) => Err(LedgerError::Persistence(format!("{e:#}"))),
        }
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(p) => p
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string()),
            None => "in-memory".into(),
        }
    }
}
