// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translation provider.
//!
//! [`I18n`] owns one Fluent bundle per catalog table. Lookups go to the
//! active locale first and then to the fallback locale; a key missing from
//! both renders as `MISSING: <key>` so gaps are visible in the UI.

use super::{LocaleCode, TranslationConfig};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

pub struct I18n {
    bundles: BTreeMap<LocaleCode, FluentBundle<Arc<FluentResource>>>,
    current_locale: LocaleCode,
    fallback_locale: LocaleCode,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("fallback_locale", &self.fallback_locale)
            .field("available_locales", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl I18n {
    pub fn new(config: TranslationConfig) -> Self {
        let mut bundles = BTreeMap::new();

        for (code, resource) in config.messages.tables() {
            let langid = code.as_str().parse::<LanguageIdentifier>().unwrap_or_default();
            let mut bundle = FluentBundle::new(vec![langid]);
            // Rendered text must match the table verbatim, without bidi marks.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(Arc::clone(resource)) {
                tracing::warn!(locale = %code, ?errors, "translation table has conflicting entries");
            }
            bundles.insert(code.clone(), bundle);
        }

        let mut current_locale = config.locale;
        if !bundles.contains_key(current_locale.as_str()) && current_locale != config.fallback_locale {
            tracing::warn!(
                locale = %current_locale,
                "requested locale has no translation table, using fallback"
            );
            current_locale = config.fallback_locale.clone();
        }

        Self {
            bundles,
            current_locale,
            fallback_locale: config.fallback_locale,
        }
    }

    /// Switches the active locale. Codes without a translation table are
    /// ignored and the current locale is kept.
    pub fn set_locale(&mut self, locale: &LocaleCode) -> bool {
        if self.bundles.contains_key(locale.as_str()) {
            tracing::info!(from = %self.current_locale, to = %locale, "switching display language");
            self.current_locale = locale.clone();
            true
        } else {
            tracing::warn!(locale = %locale, "ignoring switch to unsupported locale");
            false
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LocaleCode {
        &self.current_locale
    }

    #[must_use]
    pub fn fallback_locale(&self) -> &LocaleCode {
        &self.fallback_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> Vec<LocaleCode> {
        self.bundles.keys().cloned().collect()
    }

    /// Whether `key` resolves in the active or fallback table.
    #[must_use]
    pub fn has_message(&self, key: &str) -> bool {
        [&self.current_locale, &self.fallback_locale]
            .into_iter()
            .filter_map(|code| self.bundles.get(code.as_str()))
            .any(|bundle| bundle.has_message(key))
    }

    pub fn tr(&self, key: &str) -> String {
        self.translate(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.translate(key, Some(&fluent_args))
    }

    fn translate(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(value) = self.format_in(&self.current_locale, key, args) {
            return value;
        }
        if self.fallback_locale != self.current_locale {
            if let Some(value) = self.format_in(&self.fallback_locale, key, args) {
                return value;
            }
        }
        tracing::debug!(key, locale = %self.current_locale, "missing translation");
        format!("MISSING: {}", key)
    }

    fn format_in(&self, locale: &LocaleCode, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(locale.as_str())?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            tracing::debug!(key, locale = %locale, ?errors, "failed to format message");
            None
        }
    }
}
