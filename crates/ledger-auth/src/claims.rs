/// What the gate knows about the caller: signed in as a user, or not.
///
/// Derived from the session cookie for every request. Only presence matters
/// to the gate; the user id is carried for handlers that need it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionClaim {
    #[default]
    Anonymous,
    Authenticated { user_id: String },
}

impl SessionClaim {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { user_id } => Some(user_id),
        }
    }
}

/// Request-scoped input to the access gate.
///
/// Built once per request by the routing layer and passed explicitly; there
/// is no ambient session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub path: String,
    pub claim: SessionClaim,
}

impl RequestContext {
    #[must_use]
    pub fn new(path: impl Into<String>, claim: SessionClaim) -> Self {
        Self {
            path: path.into(),
            claim,
        }
    }

    #[must_use]
    pub fn anonymous(path: impl Into<String>) -> Self {
        Self::new(path, SessionClaim::Anonymous)
    }
}
