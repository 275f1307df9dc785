pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS transactions (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id             TEXT NOT NULL DEFAULT '',
    name                TEXT NOT NULL,
    amount              TEXT NOT NULL,
    kind                TEXT NOT NULL CHECK (kind IN ('income', 'expense')),
    category            TEXT NOT NULL DEFAULT 'General',
    created_at          TEXT NOT NULL,
    has_reminder        BOOLEAN NOT NULL DEFAULT 0,
    reminder_lead_days  INTEGER NOT NULL DEFAULT 0 CHECK (reminder_lead_days >= 0)
);

CREATE INDEX IF NOT EXISTS idx_transactions_user_created ON transactions(user_id, created_at);

CREATE TABLE IF NOT EXISTS category_rules (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    pattern   TEXT NOT NULL,
    category  TEXT NOT NULL,
    is_regex  BOOLEAN NOT NULL DEFAULT 0,
    priority  INTEGER NOT NULL DEFAULT 0
);
"#;

pub(crate) const CURRENT_VERSION: i32 = 2;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[
    // v1 had no per-user ownership; existing rows become anonymous.
    (
        1,
        "ALTER TABLE transactions ADD COLUMN user_id TEXT NOT NULL DEFAULT '';
         CREATE INDEX IF NOT EXISTS idx_transactions_user_created ON transactions(user_id, created_at);",
    ),
];
