//! Persistence and environment helpers for the demo shell.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const LOCALE_KEY: &str = "prochat.locale";

/// Stored choice first, then the browser language, then the default locale.
pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(locale) = LocalStorage::get::<LocaleCode>(LOCALE_KEY) {
        return locale;
    }
    if let Some(nav) = window().navigator().language()
        && let Some(locale) = LocaleCode::from_lang_tag(&nav)
    {
        return locale;
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    if let Err(err) = LocalStorage::set(LOCALE_KEY, locale) {
        log_storage_error("set", LOCALE_KEY, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
