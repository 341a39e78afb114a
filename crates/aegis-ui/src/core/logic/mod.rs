//! Pure UI helpers extracted from components for non-wasm testing.

use crate::core::scan::{
    BatchItem, BatchReport, MatchId, MatchRow, SelectionSet, TakedownOutcome,
};
use aegis_api_models::ErrorBody;
use std::collections::VecDeque;

/// Strip a trailing slash so paths can be appended verbatim; an empty value
/// keeps requests same-origin.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Best displayable message for a failed response: the structured `detail`
/// body when present, otherwise the HTTP status text.
#[must_use]
pub fn failure_message(body: &str, status_text: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .filter(|detail| !detail.trim().is_empty())
        .unwrap_or_else(|| status_text.to_string())
}

/// Whole-percent confidence label shown next to each match.
#[must_use]
pub fn confidence_label(confidence: f64) -> String {
    let scaled = (confidence * 100.0).round().clamp(0.0, 100.0);
    // Clamped above; the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = scaled as u8;
    format!("{percent}%")
}

/// Whether the takedown trigger is actionable.
#[must_use]
pub fn takedown_enabled(selected: &SelectionSet, busy: bool) -> bool {
    !busy && !selected.is_empty()
}

/// One notice the batch still intends to file.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedTakedown {
    /// Id of the targeted match.
    pub id: MatchId,
    /// Platform named on the notice.
    pub platform: String,
    /// Listing URL the notice is filed against.
    pub listing_url: String,
    /// Detector confidence carried into the evidence line.
    pub confidence: f64,
}

/// Sequential takedown batch: notices are issued one at a time in display
/// order, and the first failure halts the remainder.
///
/// The driver loop alternates [`TakedownBatch::next_pending`] with
/// [`TakedownBatch::record`]; once a failure is recorded, `next_pending`
/// yields nothing further and [`TakedownBatch::finish`] marks the leftover
/// notices [`TakedownOutcome::Skipped`].
#[derive(Clone, Debug, PartialEq)]
pub struct TakedownBatch {
    pending: VecDeque<PlannedTakedown>,
    in_flight: Option<PlannedTakedown>,
    items: Vec<BatchItem>,
    halted: bool,
}

impl TakedownBatch {
    /// Plan notices for the selected rows, in display order.
    #[must_use]
    pub fn new(rows: &[MatchRow], selected: &SelectionSet) -> Self {
        let pending = rows
            .iter()
            .filter(|row| selected.contains(&row.id))
            .map(|row| PlannedTakedown {
                id: row.id,
                platform: row.platform.clone(),
                listing_url: row.listing_url.clone(),
                confidence: row.confidence,
            })
            .collect();
        Self {
            pending,
            in_flight: None,
            items: Vec::new(),
            halted: false,
        }
    }

    /// Next notice to issue, or `None` once the batch is exhausted or
    /// halted. The previous notice must be recorded first.
    pub fn next_pending(&mut self) -> Option<PlannedTakedown> {
        if self.halted || self.in_flight.is_some() {
            return None;
        }
        let planned = self.pending.pop_front()?;
        self.in_flight = Some(planned.clone());
        Some(planned)
    }

    /// Record the backend's verdict for the notice most recently yielded by
    /// [`Self::next_pending`].
    pub fn record(&mut self, result: Result<(), String>) {
        let Some(planned) = self.in_flight.take() else {
            return;
        };
        let outcome = match result {
            Ok(()) => TakedownOutcome::Submitted,
            Err(message) => {
                self.halted = true;
                TakedownOutcome::Failed(message)
            }
        };
        self.items.push(BatchItem {
            id: planned.id,
            platform: planned.platform,
            outcome,
        });
    }

    /// Close out the batch, marking never-issued notices as skipped.
    #[must_use]
    pub fn finish(mut self) -> BatchReport {
        for planned in self.pending.drain(..) {
            self.items.push(BatchItem {
                id: planned.id,
                platform: planned.platform,
                outcome: TakedownOutcome::Skipped,
            });
        }
        BatchReport { items: self.items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: MatchId, platform: &str) -> MatchRow {
        MatchRow {
            id,
            platform: platform.to_string(),
            image_url: format!("https://cdn.example.com/{id}.jpg"),
            listing_url: format!("https://{platform}.example/listing/{id}"),
            confidence: 0.9,
        }
    }

    fn selection(ids: &[MatchId]) -> SelectionSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn base_url_normalization_strips_trailing_slash() {
        assert_eq!(normalize_base_url("https://api.example.com/"), "https://api.example.com");
        assert_eq!(normalize_base_url("https://api.example.com"), "https://api.example.com");
        assert_eq!(normalize_base_url(""), "");
        assert_eq!(normalize_base_url("  "), "");
    }

    #[test]
    fn failure_message_prefers_structured_detail() {
        assert_eq!(
            failure_message(r#"{"detail":"image too large"}"#, "Bad Request"),
            "image too large"
        );
        assert_eq!(failure_message(r#"{"detail":"  "}"#, "Bad Request"), "Bad Request");
        assert_eq!(failure_message("<html>oops</html>", "Bad Gateway"), "Bad Gateway");
        assert_eq!(failure_message("", "Unauthorized"), "Unauthorized");
    }

    #[test]
    fn confidence_labels_are_whole_percentages() {
        assert_eq!(confidence_label(0.87), "87%");
        assert_eq!(confidence_label(0.005), "1%");
        assert_eq!(confidence_label(-1.0), "0%");
        assert_eq!(confidence_label(2.0), "100%");
    }

    #[test]
    fn takedown_trigger_requires_idle_nonempty_selection() {
        assert!(!takedown_enabled(&selection(&[]), false));
        assert!(!takedown_enabled(&selection(&[1]), true));
        assert!(takedown_enabled(&selection(&[1]), false));
    }

    #[test]
    fn batch_plans_selected_rows_in_display_order() {
        let rows = vec![row(0, "alpha"), row(1, "beta"), row(2, "gamma")];
        let mut batch = TakedownBatch::new(&rows, &selection(&[2, 0]));
        let first = batch.next_pending().expect("first planned");
        assert_eq!(first.platform, "alpha");
        batch.record(Ok(()));
        let second = batch.next_pending().expect("second planned");
        assert_eq!(second.platform, "gamma");
        batch.record(Ok(()));
        assert!(batch.next_pending().is_none());
        assert!(batch.finish().is_clean());
    }

    #[test]
    fn failure_halts_remaining_notices() {
        let rows = vec![row(0, "alpha"), row(1, "beta"), row(2, "gamma")];
        let mut batch = TakedownBatch::new(&rows, &selection(&[0, 1, 2]));

        let mut issued = 0;
        while let Some(planned) = batch.next_pending() {
            issued += 1;
            if planned.platform == "beta" {
                batch.record(Err("rejected".to_string()));
            } else {
                batch.record(Ok(()));
            }
        }
        // The third notice is never issued.
        assert_eq!(issued, 2);

        let report = batch.finish();
        assert_eq!(report.submitted_count(), 1);
        let failed = report.first_failure().expect("failed item");
        assert_eq!(failed.platform, "beta");
        assert_eq!(
            report.items.last().map(|item| item.outcome.clone()),
            Some(TakedownOutcome::Skipped)
        );
    }

    #[test]
    fn clean_batch_reports_every_submission() {
        let rows = vec![row(0, "alpha"), row(1, "beta")];
        let mut batch = TakedownBatch::new(&rows, &selection(&[0, 1]));
        while batch.next_pending().is_some() {
            batch.record(Ok(()));
        }
        let report = batch.finish();
        assert!(report.is_clean());
        assert_eq!(report.submitted_count(), 2);
    }

    #[test]
    fn record_without_pending_notice_is_ignored() {
        let rows = vec![row(0, "alpha")];
        let mut batch = TakedownBatch::new(&rows, &selection(&[]));
        batch.record(Ok(()));
        assert!(batch.finish().items.is_empty());
    }
}
