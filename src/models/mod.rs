mod category_rule;
mod session;
mod transaction;

pub use category_rule::CategoryRule;
pub use session::Session;
pub use transaction::{
    due_label, NewTransaction, Transaction, TransactionKind, DEFAULT_CATEGORY, REMINDER_PRESETS,
};
