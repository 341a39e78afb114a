//! App-wide yewdux store.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Mutations go through small free functions so reducers stay predictable
//!   and natively testable.

use crate::core::auth::SessionState;
use crate::core::scan::ScanState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Bearer-credential lifecycle.
    pub session: SessionState,
    /// Scan results, selection, and batch disclosure.
    pub scan: ScanState,
    /// Privacy-alert slice.
    pub privacy: PrivacyState,
    /// Single in-flight gate for login, upload, and takedown submission.
    pub busy: bool,
    /// Single displayable error slot.
    pub error: Option<String>,
}

/// Privacy-alert slice of the store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PrivacyState {
    /// `None` until the first successful fetch; replaced wholesale after.
    pub alerts: Option<Vec<String>>,
}

/// Enter the authenticated state with a freshly issued token.
pub fn establish_session(store: &mut AppStore, token: String) {
    store.session = SessionState::active(token);
}

/// Tear the session down (logout or a 401), dropping everything derived
/// from it.
pub fn reset_session(store: &mut AppStore) {
    store.session.clear();
    store.privacy = PrivacyState::default();
    store.scan = ScanState::default();
}

/// Replace the privacy alerts wholesale.
pub fn set_privacy_alerts(store: &mut AppStore, alerts: Vec<String>) {
    store.privacy.alerts = Some(alerts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scan::set_matches;
    use aegis_api_models::ScanMatch;

    #[test]
    fn establishing_a_session_enables_authenticated_calls() {
        let mut store = AppStore::default();
        assert!(!store.session.is_authenticated());
        establish_session(&mut store, "tok".to_string());
        assert_eq!(store.session.token(), Some("tok"));
    }

    #[test]
    fn reset_drops_session_scoped_state() {
        let mut store = AppStore::default();
        establish_session(&mut store, "tok".to_string());
        set_privacy_alerts(&mut store, vec!["email found in breach".to_string()]);
        set_matches(
            &mut store.scan,
            vec![ScanMatch {
                platform: "p".to_string(),
                image_url: "u".to_string(),
                page_url: None,
                confidence: 0.5,
            }],
        );
        reset_session(&mut store);
        assert!(!store.session.is_authenticated());
        assert!(store.privacy.alerts.is_none());
        assert!(store.scan.rows.is_empty());
        assert!(!store.scan.has_results);
    }

    #[test]
    fn privacy_alerts_are_replaced_wholesale() {
        let mut store = AppStore::default();
        set_privacy_alerts(&mut store, vec!["a".to_string(), "b".to_string()]);
        set_privacy_alerts(&mut store, vec!["c".to_string()]);
        assert_eq!(store.privacy.alerts.as_deref(), Some(&["c".to_string()][..]));
    }
}
