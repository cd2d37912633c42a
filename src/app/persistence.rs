// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saves the user's language choice to `settings.toml` so the next startup
//! picks it ahead of the system locale.

use super::Message;
use crate::config;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::i18n::LocaleCode;
use iced::Task;
use std::path::Path;

/// Applies the newly selected locale and persists it to config.
///
/// Unsupported locales are ignored. Persistence is skipped under `cfg(test)`
/// so unit tests never touch the real settings file.
pub fn apply_language_change(i18n: &mut I18n, locale: &LocaleCode) -> Task<Message> {
    if !i18n.set_locale(locale) {
        return Task::none();
    }

    if cfg!(test) {
        return Task::none();
    }

    if let Some(path) = config::config_path() {
        if let Err(error) = persist_language_to_path(locale, &path) {
            tracing::error!(%error, path = %path.display(), "failed to save config");
        }
    }

    Task::none()
}

/// Writes `locale` as the saved language in the settings file at `path`,
/// keeping any other settings already there.
pub fn persist_language_to_path(locale: &LocaleCode, path: &Path) -> Result<()> {
    let mut cfg = if path.exists() {
        config::load_from_path(path)?
    } else {
        config::Config::default()
    };
    cfg.general.language = Some(locale.to_string());
    config::save_to_path(&cfg, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn persist_language_creates_settings_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        persist_language_to_path(&LocaleCode::new("fr"), &path).expect("persist should succeed");

        let loaded = config::load_from_path(&path).expect("settings should load");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
    }

    #[test]
    fn persist_language_overwrites_previous_choice() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        persist_language_to_path(&LocaleCode::new("fr"), &path).expect("first persist");
        persist_language_to_path(&LocaleCode::new("en"), &path).expect("second persist");

        let loaded = config::load_from_path(&path).expect("settings should load");
        assert_eq!(loaded.general.language.as_deref(), Some("en"));
    }
}
