// SPDX-License-Identifier: MPL-2.0
//! Settings screen.
//!
//! It currently provides the language picker, allowing users to choose their
//! preferred display language among the available translation tables.

use crate::i18n::fluent::I18n;
use crate::i18n::LocaleCode;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(LocaleCode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LanguageSelected(LocaleCode),
}

/// One selectable language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: LocaleCode,
    pub label: String,
    pub selected: bool,
}

/// Text rendered by the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub heading: String,
    pub language_label: String,
    pub current_language: String,
    pub languages: Vec<LanguageOption>,
}

/// Localized display name for `code`, or the raw code when the table has
/// no `language-name-<code>` entry.
#[must_use]
pub fn language_name(i18n: &I18n, code: &LocaleCode) -> String {
    let key = format!("language-name-{}", code);
    if i18n.has_message(&key) {
        i18n.tr(&key)
    } else {
        code.to_string()
    }
}

#[must_use]
pub fn content(ctx: &ViewContext<'_>) -> Content {
    let current = ctx.i18n.current_locale();
    let current_name = language_name(ctx.i18n, current);
    let languages = ctx
        .i18n
        .available_locales()
        .into_iter()
        .map(|code| LanguageOption {
            label: language_name(ctx.i18n, &code),
            selected: &code == current,
            code,
        })
        .collect();

    Content {
        heading: ctx.i18n.tr("settings-title"),
        language_label: ctx.i18n.tr("select-language-label"),
        current_language: ctx.i18n.tr_with_args(
            "settings-current-language",
            &[("language", current_name.as_str())],
        ),
        languages,
    }
}

/// Process a settings message and return the corresponding event.
#[must_use]
pub fn update(message: &Message, current: &LocaleCode) -> Event {
    match message {
        Message::LanguageSelected(code) if code != current => Event::LanguageSelected(code.clone()),
        Message::LanguageSelected(_) => Event::None,
    }
}

/// Render the settings screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = content(&ctx);

    let mut language_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(content.language_label).size(typography::BODY))
        .push(Text::new(content.current_language).size(typography::BODY));

    for option in content.languages {
        let mut entry = button(Text::new(option.label).size(typography::BODY))
            .on_press(Message::LanguageSelected(option.code));
        if option.selected {
            entry = entry.style(button::primary);
        } else {
            entry = entry.style(button::secondary);
        }
        language_column = language_column.push(entry);
    }

    let column = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .push(Text::new(content.heading).size(typography::TITLE_LG))
        .push(language_column);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{FixedLanguage, TranslationCatalog, TranslationConfig};
    use std::sync::Arc;

    fn i18n(signal: &str) -> I18n {
        let catalog = TranslationCatalog::embedded().expect("embedded tables should parse");
        I18n::new(TranslationConfig::from_signal(
            Arc::new(catalog),
            &FixedLanguage::new(signal),
        ))
    }

    #[test]
    fn lists_every_available_language_once() {
        let i18n = i18n("fr");
        let content = content(&ViewContext { i18n: &i18n });
        let labels: Vec<&str> = content
            .languages
            .iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, vec!["English", "Français"]);
        let selected: Vec<&str> = content
            .languages
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.code.as_str())
            .collect();
        assert_eq!(selected, vec!["fr"]);
    }

    #[test]
    fn current_language_line_uses_argument() {
        let i18n = i18n("en");
        let content = content(&ViewContext { i18n: &i18n });
        assert_eq!(content.current_language, "Current language: English");
    }

    #[test]
    fn language_name_falls_back_to_code() {
        let i18n = i18n("en");
        assert_eq!(language_name(&i18n, &LocaleCode::new("de")), "de");
    }

    #[test]
    fn selecting_current_language_emits_nothing() {
        let current = LocaleCode::new("en");
        assert_eq!(
            update(&Message::LanguageSelected(LocaleCode::new("en")), &current),
            Event::None
        );
        assert_eq!(
            update(&Message::LanguageSelected(LocaleCode::new("fr")), &current),
            Event::LanguageSelected(LocaleCode::new("fr"))
        );
    }
}
