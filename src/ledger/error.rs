use std::fmt;

/// Failures at the ledger boundary. None of them is fatal: callers turn them
/// into status messages and keep the session running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LedgerError {
    /// Malformed add-form input. The ledger is left unchanged.
    Validation(String),
    /// The store rejected or failed the write. Safe to retry.
    Persistence(String),
    /// The store could not produce the initial list.
    Fetch(String),
    /// A write was attempted without a usable session.
    Unauthenticated,
}

impl LedgerError {
    pub(crate) fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::Fetch(_))
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Invalid transaction: {msg}"),
            Self::Persistence(msg) => write!(f, "Could not save transaction: {msg}"),
            Self::Fetch(msg) => write!(f, "Could not load transactions: {msg}"),
            Self::Unauthenticated => write!(f, "Sign in required (use --user <id>)"),
        }
    }
}

impl std::error::Error for LedgerError {}
