// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the shell and its screens.
//!
//! The `App` struct wires together localization and the screens, and
//! translates messages into side effects like config persistence. Startup
//! work that can fail (loading translation tables, reading settings) happens
//! in [`bootstrap`] before the window opens, so `App::new` itself is
//! infallible.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::i18n::{LanguageSignal, TranslationCatalog, TranslationConfig};
use iced::{window, Element, Task};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Root Iced application state that bridges UI screens and localization.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("locale", self.i18n.current_locale())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Loads the translation catalog and resolves the startup locale.
///
/// Candidates are tried in order: the `--lang` flag, the language saved in
/// `settings.toml`, then the environment signal. The first one with a
/// translation table wins; otherwise the default locale applies.
pub fn bootstrap(
    flags: &Flags,
    config: &Config,
    signal: &dyn LanguageSignal,
) -> Result<TranslationConfig> {
    let catalog = match flags.i18n_dir.as_deref() {
        Some(dir) => TranslationCatalog::from_dir(Path::new(dir))?,
        None => TranslationCatalog::embedded()?,
    };

    let candidates = [
        flags.lang.clone(),
        config.general.language.clone(),
        signal.preferred_language(),
    ];

    Ok(TranslationConfig::from_candidates(
        Arc::new(catalog),
        candidates.into_iter().flatten(),
    ))
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(translations: TranslationConfig) -> iced::Result {
    // iced requires a reusable boot closure; the config is cheap to clone
    // because the catalog sits behind an `Arc`.
    let boot = move || App::new(translations.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state on the reminders screen.
    pub fn new(translations: TranslationConfig) -> (Self, Task<Message>) {
        let app = App {
            i18n: I18n::new(translations),
            screen: Screen::default(),
        };
        (app, Task::none())
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;
    use crate::i18n::{FixedLanguage, LocaleCode};
    use crate::ui::{settings, shell};

    fn app_for(signal: &str) -> App {
        let translations =
            bootstrap(&Flags::default(), &Config::default(), &FixedLanguage::new(signal))
                .expect("embedded catalog should load");
        App::new(translations).0
    }

    #[test]
    fn new_starts_on_reminders_screen() {
        let app = app_for("en-US");
        assert_eq!(app.screen(), Screen::Reminders);
    }

    #[test]
    fn title_is_app_name() {
        assert_eq!(app_for("en").title(), "AngelVoice");
        assert_eq!(app_for("fr").title(), "AngelVoice");
    }

    #[test]
    fn bootstrap_prefers_cli_over_config_and_system() {
        let flags = Flags {
            lang: Some("fr-CA".into()),
            ..Flags::default()
        };
        let config = Config {
            general: GeneralConfig {
                language: Some("en".into()),
            },
        };
        let translations = bootstrap(&flags, &config, &FixedLanguage::new("en-US"))
            .expect("embedded catalog should load");
        assert_eq!(translations.locale.as_str(), "fr");
        assert_eq!(translations.fallback_locale.as_str(), "en");
    }

    #[test]
    fn bootstrap_prefers_config_over_system() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".into()),
            },
        };
        let translations = bootstrap(&Flags::default(), &config, &FixedLanguage::new("en-GB"))
            .expect("embedded catalog should load");
        assert_eq!(translations.locale.as_str(), "fr");
    }

    #[test]
    fn bootstrap_unsupported_cli_falls_through() {
        let flags = Flags {
            lang: Some("de".into()),
            ..Flags::default()
        };
        let translations = bootstrap(&flags, &Config::default(), &FixedLanguage::new("fr-BE"))
            .expect("embedded catalog should load");
        assert_eq!(translations.locale.as_str(), "fr");
    }

    #[test]
    fn bootstrap_without_any_preference_uses_default() {
        let translations = bootstrap(&Flags::default(), &Config::default(), &FixedLanguage(None))
            .expect("embedded catalog should load");
        assert_eq!(translations.locale.as_str(), "en");
    }

    #[test]
    fn bootstrap_reports_missing_translation_dir() {
        let flags = Flags {
            i18n_dir: Some("/definitely/not/a/real/dir".into()),
            ..Flags::default()
        };
        assert!(bootstrap(&flags, &Config::default(), &FixedLanguage(None)).is_err());
    }

    #[test]
    fn navigation_switches_screen() {
        let mut app = app_for("en");
        let _ = app.update(Message::Shell(shell::Message::Navigate(Screen::Settings)));
        assert_eq!(app.screen(), Screen::Settings);
    }

    #[test]
    fn language_selection_changes_active_locale() {
        let mut app = app_for("en");
        let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
            LocaleCode::new("fr"),
        )));
        assert_eq!(app.i18n.current_locale().as_str(), "fr");
        assert_eq!(app.i18n.tr("reminders-title"), "Rappels");
    }

    #[test]
    fn unsupported_language_selection_is_ignored() {
        let mut app = app_for("fr");
        let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
            LocaleCode::new("xx"),
        )));
        assert_eq!(app.i18n.current_locale().as_str(), "fr");
    }
}
