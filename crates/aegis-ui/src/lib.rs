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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Aegis web dashboard.
//!
//! Single-page client for the brand-protection backend: upload a product
//! image, review image-match results and privacy alerts, and file takedown
//! notices for selected matches. The wasm entrypoint and browser-facing
//! modules are target-gated; everything under [`core`] compiles natively so
//! the state transitions stay testable with plain `cargo test`.

pub mod core;
pub mod i18n;
pub mod models;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn translation_fallbacks_work() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("app.title", "Aegis"), "Aegis");
        assert_eq!(bundle.text("app.missing_key", "Default"), "Default");
    }

    #[test]
    fn bundles_parse_for_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert!(!bundle.text("results.takedown", "File takedown").is_empty());
        }
    }
}
