mod cli;
mod tui;

pub(crate) use cli::as_cli;
pub(crate) use tui::as_tui;

use anyhow::Result;

use crate::auth::LocalSession;
use crate::config::{Config, StoreMode};
use crate::db::Database;
use crate::ledger::{MemoryStore, TransactionStore};

/// The collaborators a ledger talks to: where records live and who is writing.
pub(crate) struct Backend {
    pub(crate) store: Box<dyn TransactionStore>,
    pub(crate) session: LocalSession,
}

impl Backend {
    pub(crate) fn open(config: &Config) -> Result<Self> {
        let session = LocalSession::new(config.user.clone(), config.require_login);
        let store: Box<dyn TransactionStore> = match &config.store {
            StoreMode::Sqlite(path) => Box::new(Database::open(path)?),
            StoreMode::Demo => {
                log::info!("Running with in-memory example data");
                Box::new(MemoryStore::with_example_data(&session.owner_id()))
            }
        };
        Ok(Self { store, session })
    }
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
