// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation table loading, and string lookup.
//!
//! # Features
//!
//! - Startup locale detection from CLI, config, or system settings
//! - Translation tables embedded in the binary, or loaded from a directory
//! - Runtime language switching
//! - Fallback to the default locale when a message is missing

pub mod catalog;
pub mod fluent;
pub mod resolver;

pub use catalog::TranslationCatalog;
pub use resolver::{FixedLanguage, LanguageSignal, ResolvedLocale, SystemLanguage};

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Locale used when the preferred language has no translation table, and
/// consulted for any message missing from the active table.
pub const DEFAULT_LOCALE: &str = "en";

/// A locale code naming one translation table (e.g. `en`, `fr`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn default_locale() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_LOCALE
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Everything the translation provider needs to start: the resolved active
/// locale, the fallback locale, and the full catalog so the locale can be
/// switched later without reloading.
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    pub locale: LocaleCode,
    pub fallback_locale: LocaleCode,
    pub messages: Arc<TranslationCatalog>,
}

impl TranslationConfig {
    /// Resolves the active locale from a single environment signal.
    pub fn from_signal(messages: Arc<TranslationCatalog>, signal: &dyn LanguageSignal) -> Self {
        let resolved = resolver::resolve_from_signal(signal, &messages.supported_locales());
        Self::with_resolved(messages, resolved)
    }

    /// Resolves the active locale from candidates in priority order.
    pub fn from_candidates<I, S>(messages: Arc<TranslationCatalog>, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolved = resolver::resolve_first_supported(candidates, &messages.supported_locales());
        Self::with_resolved(messages, resolved)
    }

    fn with_resolved(messages: Arc<TranslationCatalog>, resolved: ResolvedLocale) -> Self {
        tracing::info!(
            locale = %resolved.active,
            fallback = %resolved.fallback,
            "resolved display language"
        );
        Self {
            locale: resolved.active,
            fallback_locale: resolved.fallback,
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<TranslationCatalog> {
        Arc::new(
            TranslationCatalog::from_sources([
                ("en", "greeting = Hello\n"),
                ("fr", "greeting = Bonjour\n"),
            ])
            .expect("sources should parse"),
        )
    }

    #[test]
    fn locale_code_displays_raw_code() {
        assert_eq!(LocaleCode::new("fr").to_string(), "fr");
        assert!(LocaleCode::default().is_default());
    }

    #[test]
    fn config_from_signal_keeps_whole_catalog() {
        let config = TranslationConfig::from_signal(catalog(), &FixedLanguage::new("fr-FR"));
        assert_eq!(config.locale.as_str(), "fr");
        assert_eq!(config.fallback_locale.as_str(), "en");
        assert_eq!(config.messages.supported_locales().len(), 2);
    }

    #[test]
    fn config_from_unsupported_signal_uses_default() {
        let config = TranslationConfig::from_signal(catalog(), &FixedLanguage::new("es"));
        assert_eq!(config.locale.as_str(), "en");
        assert_eq!(config.fallback_locale.as_str(), "en");
    }

    #[test]
    fn config_from_candidates_skips_unsupported() {
        let config = TranslationConfig::from_candidates(catalog(), ["pt-BR", "fr"]);
        assert_eq!(config.locale.as_str(), "fr");
    }
}
