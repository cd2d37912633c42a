// SPDX-License-Identifier: MPL-2.0
//! Startup locale selection.
//!
//! The resolver reduces an environment language preference (for example
//! `fr-CA`) to its primary subtag and keeps it only when a translation table
//! exists for it. Anything else, including an empty or garbled preference,
//! resolves to [`super::DEFAULT_LOCALE`]. The fallback locale is always the default.

use super::LocaleCode;

/// Source of the user's preferred language, as reported by the environment.
///
/// The value is unvalidated and may carry region or script subtags.
pub trait LanguageSignal {
    fn preferred_language(&self) -> Option<String>;
}

/// Reads the preference from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLanguage;

impl LanguageSignal for SystemLanguage {
    fn preferred_language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A preference fixed ahead of time (CLI flag, settings file, tests).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixedLanguage(pub Option<String>);

impl FixedLanguage {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }
}

impl LanguageSignal for FixedLanguage {
    fn preferred_language(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Outcome of locale resolution, handed to the translation provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub active: LocaleCode,
    pub fallback: LocaleCode,
}

impl Default for ResolvedLocale {
    fn default() -> Self {
        Self {
            active: LocaleCode::default_locale(),
            fallback: LocaleCode::default_locale(),
        }
    }
}

/// Returns the text left of the first hyphen (`"fr-CA"` -> `"fr"`).
#[must_use]
pub fn primary_subtag(signal: &str) -> &str {
    signal.split_once('-').map_or(signal, |(primary, _)| primary)
}

/// Resolves a single preference against the supported locales.
#[must_use]
pub fn resolve_locale(signal: &str, supported: &[LocaleCode]) -> ResolvedLocale {
    match match_supported(signal, supported) {
        Some(active) => ResolvedLocale {
            active,
            fallback: LocaleCode::default_locale(),
        },
        None => ResolvedLocale::default(),
    }
}

/// Resolves the first candidate whose primary subtag is supported.
///
/// Candidates are tried in order; unsupported ones are skipped. When none
/// matches, the default locale applies.
#[must_use]
pub fn resolve_first_supported<I, S>(candidates: I, supported: &[LocaleCode]) -> ResolvedLocale
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if let Some(active) = match_supported(candidate, supported) {
            tracing::debug!(candidate, locale = %active, "matched preferred language");
            return ResolvedLocale {
                active,
                fallback: LocaleCode::default_locale(),
            };
        }
        tracing::debug!(candidate, "preferred language not supported");
    }
    ResolvedLocale::default()
}

/// Resolves the preference reported by `signal`; an absent value counts as empty.
#[must_use]
pub fn resolve_from_signal(signal: &dyn LanguageSignal, supported: &[LocaleCode]) -> ResolvedLocale {
    let preferred = signal.preferred_language().unwrap_or_default();
    resolve_locale(&preferred, supported)
}

fn match_supported(signal: &str, supported: &[LocaleCode]) -> Option<LocaleCode> {
    let primary = primary_subtag(signal);
    supported
        .iter()
        .find(|code| code.as_str() == primary)
        .cloned()
}
