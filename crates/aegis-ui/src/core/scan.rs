//! Scan-result models and pure state transformations for testing outside
//! wasm.
//!
//! # Design
//! - The backend reports matches without identifiers, so rows get dense
//!   client-assigned ids; selection tracks ids rather than row values, which
//!   survives structurally duplicate matches.
//! - A takedown batch records a per-item outcome so a mid-batch failure
//!   still discloses which notices were already filed.

use aegis_api_models::ScanMatch;
use std::collections::BTreeSet;

/// Stable client-assigned identifier for a reported match.
pub type MatchId = usize;

/// Ordered multi-select set for takedown submission.
pub type SelectionSet = BTreeSet<MatchId>;

/// UI-friendly snapshot of one reported match.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchRow {
    /// Client-assigned id, dense in display order.
    pub id: MatchId,
    /// Platform hosting the suspect listing.
    pub platform: String,
    /// Direct URL of the matched image, used for the thumbnail.
    pub image_url: String,
    /// Listing URL the notice is filed against.
    pub listing_url: String,
    /// Match confidence in the range 0.0..=1.0.
    pub confidence: f64,
}

impl MatchRow {
    fn new(id: MatchId, matched: ScanMatch) -> Self {
        let listing_url = matched.listing_url().to_string();
        Self {
            id,
            platform: matched.platform,
            image_url: matched.image_url,
            listing_url,
            confidence: matched.confidence,
        }
    }
}

/// Outcome of one notice within a takedown batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TakedownOutcome {
    /// The notice was accepted by the backend.
    Submitted,
    /// The notice was rejected; the batch halted here.
    Failed(String),
    /// The notice was never issued because an earlier one failed.
    Skipped,
}

/// Per-item record within a [`BatchReport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchItem {
    /// Id of the match the notice targeted.
    pub id: MatchId,
    /// Platform named on the notice.
    pub platform: String,
    /// What happened to the notice.
    pub outcome: TakedownOutcome,
}

/// Disclosure of a finished takedown batch, in submission order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BatchReport {
    /// One entry per planned notice.
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    /// The item the batch halted on, if any.
    #[must_use]
    pub fn first_failure(&self) -> Option<&BatchItem> {
        self.items
            .iter()
            .find(|item| matches!(item.outcome, TakedownOutcome::Failed(_)))
    }

    /// Count of notices the backend accepted.
    #[must_use]
    pub fn submitted_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.outcome == TakedownOutcome::Submitted)
            .count()
    }

    /// Whether every planned notice was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.first_failure().is_none()
    }
}

/// Scan slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ScanState {
    /// Rows from the last successful scan, in backend order.
    pub rows: Vec<MatchRow>,
    /// Whether a scan has completed since the last upload, so an empty
    /// result set renders its empty state instead of nothing.
    pub has_results: bool,
    /// Ids chosen for takedown submission.
    pub selected: SelectionSet,
    /// Disclosure of the most recent takedown batch.
    pub report: Option<BatchReport>,
}

/// Replace the rows with a fresh scan result, dropping selection and report.
pub fn set_matches(state: &mut ScanState, matches: Vec<ScanMatch>) {
    state.rows = matches
        .into_iter()
        .enumerate()
        .map(|(id, matched)| MatchRow::new(id, matched))
        .collect();
    state.has_results = true;
    state.selected.clear();
    state.report = None;
}

/// Discard results ahead of a new upload.
pub fn clear_matches(state: &mut ScanState) {
    state.rows.clear();
    state.has_results = false;
    state.selected.clear();
    state.report = None;
}

/// Toggle the presence of an id in the selection set; unknown ids are
/// ignored.
pub fn toggle_match(state: &mut ScanState, id: MatchId) {
    if !state.rows.iter().any(|row| row.id == id) {
        return;
    }
    if !state.selected.remove(&id) {
        state.selected.insert(id);
    }
}

/// Clear the selection after a fully successful batch.
pub fn clear_selection(state: &mut ScanState) {
    state.selected.clear();
}

/// Store the disclosure for the latest batch.
pub fn set_report(state: &mut ScanState, report: BatchReport) {
    state.report = Some(report);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(count: usize) -> Vec<ScanMatch> {
        (0..count)
            .map(|idx| ScanMatch {
                platform: format!("platform-{idx}"),
                image_url: format!("https://cdn.example.com/{idx}.jpg"),
                page_url: None,
                confidence: 0.5,
            })
            .collect()
    }

    #[test]
    fn set_matches_assigns_dense_ids_and_resets_selection() {
        let mut state = ScanState::default();
        state.selected.insert(7);
        state.report = Some(BatchReport::default());
        set_matches(&mut state, matches(3));
        assert_eq!(
            state.rows.iter().map(|row| row.id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(state.has_results);
        assert!(state.selected.is_empty());
        assert!(state.report.is_none());
    }

    #[test]
    fn toggle_is_idempotent_per_pair() {
        let mut state = ScanState::default();
        set_matches(&mut state, matches(2));
        let before = state.selected.clone();
        toggle_match(&mut state, 1);
        assert!(state.selected.contains(&1));
        toggle_match(&mut state, 1);
        assert_eq!(state.selected, before);
    }

    #[test]
    fn toggle_ignores_unknown_ids() {
        let mut state = ScanState::default();
        set_matches(&mut state, matches(1));
        toggle_match(&mut state, 9);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn clear_matches_drops_results_and_report() {
        let mut state = ScanState::default();
        set_matches(&mut state, matches(2));
        toggle_match(&mut state, 0);
        set_report(&mut state, BatchReport::default());
        clear_matches(&mut state);
        assert!(state.rows.is_empty());
        assert!(!state.has_results);
        assert!(state.selected.is_empty());
        assert!(state.report.is_none());
    }

    #[test]
    fn report_summaries_reflect_outcomes() {
        let report = BatchReport {
            items: vec![
                BatchItem {
                    id: 0,
                    platform: "a".to_string(),
                    outcome: TakedownOutcome::Submitted,
                },
                BatchItem {
                    id: 1,
                    platform: "b".to_string(),
                    outcome: TakedownOutcome::Failed("rejected".to_string()),
                },
                BatchItem {
                    id: 2,
                    platform: "c".to_string(),
                    outcome: TakedownOutcome::Skipped,
                },
            ],
        };
        assert_eq!(report.submitted_count(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.first_failure().map(|item| item.platform.as_str()), Some("b"));
    }
}
