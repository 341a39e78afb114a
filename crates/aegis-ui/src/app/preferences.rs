//! Persistence and environment helpers for the app shell.

use crate::core::logic::normalize_base_url;
use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const THEME_KEY: &str = "aegis.theme";
pub(crate) const LOCALE_KEY: &str = "aegis.locale";
pub(crate) const SESSION_TOKEN_KEY: &str = "aegis.session.token";

pub(crate) fn load_theme() -> ThemeMode {
    if let Ok(value) = LocalStorage::get::<String>(THEME_KEY) {
        return ThemeMode::from_storage(&value);
    }
    ThemeMode::Light
}

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

/// Token persisted by the last successful login, if any.
pub(crate) fn load_session() -> Option<String> {
    let value = LocalStorage::get::<String>(SESSION_TOKEN_KEY).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

pub(crate) fn persist_session(token: &str) {
    set_storage(SESSION_TOKEN_KEY, token);
}

pub(crate) fn clear_session_storage() {
    LocalStorage::delete(SESSION_TOKEN_KEY);
}

/// Backend base URL baked in at build time; empty keeps requests
/// same-origin.
pub(crate) fn api_base_url() -> String {
    normalize_base_url(option_env!("AEGIS_API_BASE").unwrap_or_default())
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
