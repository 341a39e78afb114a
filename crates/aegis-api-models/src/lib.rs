#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Aegis backend API.
//!
//! These types are the single source of truth for the wire contract between
//! the dashboard client and the backend: login credentials, scan and privacy
//! payloads, and the takedown notice. The notice constructor lives next to
//! the DTO so the mapping from a reported match to a filed notice stays in
//! one place.

use serde::{Deserialize, Serialize};

/// Credentials posted to `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token presented on each authenticated call.
    pub access_token: String,
}

/// Structured error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorBody {
    /// Human-readable diagnostic message when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A backend-reported candidate instance of image reuse on an external
/// platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanMatch {
    /// Platform hosting the suspect listing (e.g. a marketplace name).
    pub platform: String,
    /// Direct URL of the matched image.
    pub image_url: String,
    /// URL of the listing page, when the detector resolved one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    /// Match confidence in the range 0.0..=1.0.
    pub confidence: f64,
}

impl ScanMatch {
    /// URL to show and file the notice against, falling back to the raw
    /// image URL when the detector did not resolve a listing page.
    #[must_use]
    pub fn listing_url(&self) -> &str {
        self.page_url.as_deref().unwrap_or(&self.image_url)
    }

    /// Confidence as a whole percentage, clamped to 0..=100.
    #[must_use]
    pub fn confidence_percent(&self) -> u8 {
        let scaled = (self.confidence * 100.0).round();
        if scaled <= 0.0 {
            0
        } else if scaled >= 100.0 {
            100
        } else {
            // Bounds checked above; the cast cannot truncate.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                scaled as u8
            }
        }
    }
}

/// Response body of `POST /api/scan` for an uploaded product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScanResponse {
    /// Candidate matches, possibly empty.
    #[serde(default)]
    pub matches: Vec<ScanMatch>,
}

/// Response body of `GET /api/privacy`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PrivacyReport {
    /// Breach/exposure indicators for the account, possibly empty.
    #[serde(default)]
    pub alerts: Vec<String>,
}

/// Contact block included in a takedown notice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Claimant display name.
    pub name: String,
    /// Claimant email address.
    pub email: String,
    /// Claimant postal address.
    pub address: String,
}

/// Claimant identity used to fill the legal fields of a notice.
///
/// The backend owns real account identity; until it exposes a profile
/// endpoint the client files notices under a placeholder claimant. Keeping
/// the placeholder behind one constructor makes the gap visible and easy to
/// replace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claimant {
    /// Contact details asserted on the notice.
    pub contact: Contact,
    /// Description of the ownership evidence held by the claimant.
    pub copyright_proof: String,
    /// Electronic signature string.
    pub signature: String,
}

impl Claimant {
    /// Placeholder claimant used while no profile endpoint exists.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            contact: Contact {
                name: "Account Holder".to_string(),
                email: "account@example.com".to_string(),
                address: "On file with the service".to_string(),
            },
            copyright_proof: "User-uploaded original product image".to_string(),
            signature: "Account Holder".to_string(),
        }
    }
}

/// Good-faith statement asserted on every notice.
pub const STATEMENT_GOOD_FAITH: &str =
    "I believe in good faith that the use of the material is not authorized.";

/// Accuracy statement asserted on every notice.
pub const STATEMENT_ACCURACY: &str =
    "Under penalty of perjury, the information in this notice is accurate.";

/// DMCA-style takedown notice posted to `POST /api/takedown`, one per
/// selected match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TakedownNotice {
    /// Platform the notice is addressed to.
    pub platform: String,
    /// URL of the infringing listing.
    pub listing_url: String,
    /// Evidence line derived from the detector confidence.
    pub evidence: String,
    /// Description of the ownership evidence.
    pub copyright_proof: String,
    /// Claimant contact block.
    pub user_contact: Contact,
    /// Good-faith statement.
    pub statement_good_faith: String,
    /// Accuracy statement.
    pub statement_accuracy: String,
    /// Electronic signature.
    pub signature: String,
}

impl TakedownNotice {
    /// Build the notice for one reported listing on behalf of `claimant`.
    #[must_use]
    pub fn new(
        platform: impl Into<String>,
        listing_url: impl Into<String>,
        confidence: f64,
        claimant: &Claimant,
    ) -> Self {
        Self {
            platform: platform.into(),
            listing_url: listing_url.into(),
            evidence: format!("Image match confidence: {confidence:.2}"),
            copyright_proof: claimant.copyright_proof.clone(),
            user_contact: claimant.contact.clone(),
            statement_good_faith: STATEMENT_GOOD_FAITH.to_string(),
            statement_accuracy: STATEMENT_ACCURACY.to_string(),
            signature: claimant.signature.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(page_url: Option<&str>) -> ScanMatch {
        ScanMatch {
            platform: "marketview".to_string(),
            image_url: "https://cdn.example.com/item.jpg".to_string(),
            page_url: page_url.map(ToString::to_string),
            confidence: 0.87,
        }
    }

    #[test]
    fn listing_url_prefers_page_url() {
        let with_page = sample_match(Some("https://marketview.example/listing/9"));
        assert_eq!(with_page.listing_url(), "https://marketview.example/listing/9");
        let without_page = sample_match(None);
        assert_eq!(without_page.listing_url(), "https://cdn.example.com/item.jpg");
    }

    #[test]
    fn confidence_percent_is_clamped() {
        let mut matched = sample_match(None);
        assert_eq!(matched.confidence_percent(), 87);
        matched.confidence = -0.2;
        assert_eq!(matched.confidence_percent(), 0);
        matched.confidence = 4.0;
        assert_eq!(matched.confidence_percent(), 100);
    }

    #[test]
    fn notice_carries_match_and_claimant_fields() {
        let matched = sample_match(None);
        let claimant = Claimant::placeholder();
        let notice = TakedownNotice::new(
            &matched.platform,
            matched.listing_url(),
            matched.confidence,
            &claimant,
        );
        assert_eq!(notice.platform, "marketview");
        assert_eq!(notice.listing_url, matched.image_url);
        assert_eq!(notice.evidence, "Image match confidence: 0.87");
        assert_eq!(notice.user_contact, claimant.contact);
        assert_eq!(notice.statement_good_faith, STATEMENT_GOOD_FAITH);
        assert_eq!(notice.statement_accuracy, STATEMENT_ACCURACY);
    }

    #[test]
    fn scan_response_tolerates_missing_fields() {
        let parsed: ScanResponse = serde_json::from_str("{}").expect("empty object");
        assert!(parsed.matches.is_empty());
        let parsed: ScanResponse = serde_json::from_str(
            r#"{"matches":[{"platform":"p","image_url":"u","confidence":0.5}]}"#,
        )
        .expect("match without page_url");
        assert_eq!(parsed.matches.len(), 1);
        assert!(parsed.matches[0].page_url.is_none());
    }

    #[test]
    fn error_body_detail_is_optional() {
        let parsed: ErrorBody = serde_json::from_str(r#"{"detail":"file too large"}"#).expect("detail");
        assert_eq!(parsed.detail.as_deref(), Some("file too large"));
        let parsed: ErrorBody = serde_json::from_str("{}").expect("empty object");
        assert!(parsed.detail.is_none());
    }
}
