//! Environment-driven settings for the native renderer.

use crate::attrs::HtmlAttributes;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// Language tag selecting the catalog, e.g. `fr` or `de-AT`.
pub const LOCALE_ENV: &str = "PROCHAT_LOCALE";
/// Optional `class` placed on the logo wrapper.
pub const CLASS_ENV: &str = "PROCHAT_LOGO_CLASS";

/// Inputs for one native render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Locale used to label the logo.
    pub locale: LocaleCode,
    /// Wrapper class, when one was configured.
    pub class: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            class: None,
        }
    }
}

impl RenderConfig {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Unsupported locales fall back to the default.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let locale = lookup(LOCALE_ENV).map_or(DEFAULT_LOCALE, |tag| {
            LocaleCode::from_lang_tag(&tag).unwrap_or_else(|| {
                tracing::warn!(tag = %tag, "unsupported locale, using default");
                DEFAULT_LOCALE
            })
        });
        let class = lookup(CLASS_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self { locale, class }
    }

    /// Wrapper attributes implied by this configuration.
    #[must_use]
    pub fn attributes(&self) -> HtmlAttributes {
        match &self.class {
            Some(class) => HtmlAttributes::new().class(class.clone()),
            None => HtmlAttributes::new(),
        }
    }
}
