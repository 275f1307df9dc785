use crate::models::Session;

/// Where the ledger asks "who is writing?".
pub(crate) trait SessionSource {
    fn current_session(&self) -> Option<Session>;

    /// When false, anonymous writes are accepted.
    fn requires_session(&self) -> bool;
}

/// Session resolved once at startup from flags or environment.
#[derive(Debug, Clone)]
pub(crate) struct LocalSession {
    user: Option<String>,
    required: bool,
}

impl LocalSession {
    pub(crate) fn new(user: Option<String>, required: bool) -> Self {
        let user = user
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        Self { user, required }
    }

    /// Records are filed under this id; empty for anonymous use.
    pub(crate) fn owner_id(&self) -> String {
        self.user.clone().unwrap_or_default()
    }
}

impl SessionSource for LocalSession {
    fn current_session(&self) -> Option<Session> {
        self.user.as_deref().map(Session::new)
    }

    fn requires_session(&self) -> bool {
        self.required
    }
}
