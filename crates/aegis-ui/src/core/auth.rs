//! Client-side session lifecycle.
//!
//! # Design
//! - Model the token explicitly (absent vs active) instead of a nullable
//!   global, so every call site states which side it handles.
//! - No client-side expiry: the backend is authoritative, and a 401 response
//!   tears the session down via [`SessionState::clear`].

/// Lifecycle of the bearer credential for the page session.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No credential present; authenticated calls must not be issued.
    #[default]
    Absent,
    /// A bearer token is held for the lifetime of the page session.
    Active {
        /// Opaque token presented on each authenticated call.
        token: String,
    },
}

impl SessionState {
    /// Enter the active state with a freshly issued token.
    #[must_use]
    pub const fn active(token: String) -> Self {
        Self::Active { token }
    }

    /// The held token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Active { token } => Some(token),
        }
    }

    /// Whether authenticated calls may be issued.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Drop the credential (logout or a 401 from the backend).
    pub fn clear(&mut self) {
        *self = Self::Absent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_absent() {
        let session = SessionState::default();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn active_session_exposes_token_until_cleared() {
        let mut session = SessionState::active("tok-1".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-1"));
        session.clear();
        assert_eq!(session, SessionState::Absent);
    }
}
