//! Lightweight JSON-backed translations with per-locale bundles.
//!
//! Catalogs accept both flat message ids (`generic_icons.mattermost`) and nested
//! sections addressed by a dotted path (`demo.title`).

use crate::error::{I18nError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Arabic.
    Ar,
    /// German.
    De,
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// Japanese.
    Ja,
    /// Chinese (Simplified).
    Zh,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 7] {
        [
            Self::Ar,
            Self::De,
            Self::En,
            Self::Es,
            Self::Fr,
            Self::Ja,
            Self::Zh,
        ]
    }

    /// RFC 5646 primary language subtag.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Ja => "ja",
            Self::Zh => "zh",
        }
    }

    /// Human-friendly label for pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ar => "العربية",
            Self::De => "Deutsch",
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::Ja => "日本語",
            Self::Zh => "中文",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Key handed to a [`FormatMessage`] implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageDescriptor<'a> {
    /// Stable message identifier.
    pub id: &'a str,
    /// Text used when no catalog provides the message.
    pub default_message: &'a str,
}

/// The "format message" operation components use to localize display strings.
pub trait FormatMessage {
    /// Resolve the descriptor to a display string for the active locale.
    fn format_message(&self, descriptor: &MessageDescriptor<'_>) -> String;
}

impl<F> FormatMessage for F
where
    F: Fn(&MessageDescriptor<'_>) -> String,
{
    fn format_message(&self, descriptor: &MessageDescriptor<'_>) -> String {
        self(descriptor)
    }
}

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
    rtl: bool,
}

impl TranslationBundle {
    /// Build the compiled-in bundle for the given locale.
    ///
    /// Missing keys degrade to English strings, then to the caller default.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        Self::from_json(locale, raw_locale(locale)).unwrap_or_else(|err| {
            tracing::warn!(locale = locale.code(), error = %err, "bundled catalog unreadable");
            Self {
                locale,
                tree: Value::Null,
                rtl: false,
            }
        })
    }

    /// Build a bundle from a caller-supplied catalog.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Parse`] when `raw` is not JSON and
    /// [`I18nError::NotAnObject`] when its root is not an object.
    pub fn from_json(locale: LocaleCode, raw: &str) -> Result<Self> {
        let tree: Value = serde_json::from_str(raw).map_err(|source| I18nError::Parse {
            locale: locale.code(),
            source,
        })?;
        if !tree.is_object() {
            return Err(I18nError::NotAnObject {
                locale: locale.code(),
            });
        }
        let rtl = tree
            .get("meta")
            .and_then(|meta| meta.get("rtl"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Ok(Self { locale, tree, rtl })
    }

    /// Resolve a message id with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        if let Some(found) = resolve(&self.tree, path) {
            return found;
        }
        if self.locale != LocaleCode::En
            && let Some(found) = resolve(&EN_FALLBACK.tree, path)
        {
            tracing::debug!(locale = self.locale.code(), key = path, "using english fallback");
            return found;
        }
        tracing::debug!(locale = self.locale.code(), key = path, "using default message");
        default.to_string()
    }

    /// Whether the locale prefers RTL layout (bidi).
    #[must_use]
    pub const fn rtl(&self) -> bool {
        self.rtl
    }
}

impl FormatMessage for TranslationBundle {
    fn format_message(&self, descriptor: &MessageDescriptor<'_>) -> String {
        self.text(descriptor.id, descriptor.default_message)
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    if let Some(flat) = tree.get(path).and_then(Value::as_str) {
        return Some(flat.to_string());
    }
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Ar => include_str!("../../i18n/ar.json"),
        LocaleCode::De => include_str!("../../i18n/de.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Es => include_str!("../../i18n/es.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
        LocaleCode::Ja => include_str!("../../i18n/ja.json"),
        LocaleCode::Zh => include_str!("../../i18n/zh.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::Fr);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn flat_and_nested_keys_resolve() {
        let bundle = TranslationBundle::new(LocaleCode::De);
        assert_eq!(bundle.text("generic_icons.mattermost", ""), "ProChat-Logo");
        assert_eq!(bundle.text("demo.locale", ""), "Sprache");
    }

    #[test]
    fn custom_catalog_falls_back_to_english() -> Result<()> {
        let bundle = TranslationBundle::from_json(LocaleCode::Es, r#"{"demo":{"title":"Hola"}}"#)?;
        assert_eq!(bundle.text("demo.title", ""), "Hola");
        assert_eq!(bundle.text("generic_icons.mattermost", "x"), "ProChat Logo");
        Ok(())
    }

    #[test]
    fn malformed_catalogs_are_rejected() {
        assert!(matches!(
            TranslationBundle::from_json(LocaleCode::Fr, "{not json"),
            Err(I18nError::Parse { locale: "fr", .. })
        ));
        assert!(matches!(
            TranslationBundle::from_json(LocaleCode::Ja, "[1, 2]"),
            Err(I18nError::NotAnObject { locale: "ja" })
        ));
    }

    #[test]
    fn rtl_flag_respects_meta() {
        assert!(TranslationBundle::new(LocaleCode::Ar).rtl());
        assert!(!TranslationBundle::new(LocaleCode::En).rtl());
    }

    #[test]
    fn stored_locale_uses_its_code() -> serde_json::Result<()> {
        assert_eq!(serde_json::to_string(&LocaleCode::Fr)?, "\"fr\"");
        assert_eq!(serde_json::from_str::<LocaleCode>("\"zh\"")?, LocaleCode::Zh);
        assert!(serde_json::from_str::<LocaleCode>("\"pt\"").is_err());
        Ok(())
    }

    #[test]
    fn lang_tags_map_to_base_locale() {
        assert_eq!(LocaleCode::from_lang_tag("fr-CA"), Some(LocaleCode::Fr));
        assert_eq!(LocaleCode::from_lang_tag("ZH_hans"), Some(LocaleCode::Zh));
        assert_eq!(LocaleCode::from_lang_tag("pt-BR"), None);
    }

    #[test]
    fn bundles_load_all_locales() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.locale, locale);
            assert!(!bundle.text("generic_icons.mattermost", "").is_empty());
            assert!(!bundle.text("demo.locale", "").is_empty());
        }
    }

    #[test]
    fn closures_act_as_formatters() {
        let upper = |descriptor: &MessageDescriptor<'_>| descriptor.default_message.to_uppercase();
        let descriptor = MessageDescriptor {
            id: "any.id",
            default_message: "logo",
        };
        assert_eq!(upper.format_message(&descriptor), "LOGO");
    }
}
