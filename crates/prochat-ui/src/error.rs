//! Error types for message catalog handling.

use thiserror::Error;

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, I18nError>;

/// Errors raised while loading a message catalog.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The catalog text was not valid JSON.
    #[error("message catalog for '{locale}' is not valid JSON")]
    Parse {
        /// Locale code the catalog was loaded for.
        locale: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The catalog parsed but its root is not a JSON object.
    #[error("message catalog for '{locale}' must be a JSON object")]
    NotAnObject {
        /// Locale code the catalog was loaded for.
        locale: &'static str,
    },
}
