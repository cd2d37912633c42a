// SPDX-License-Identifier: MPL-2.0
//! Application shell header: the title bar and screen navigation.
//!
//! The header content is computed by [`header`] so the exact text shown in
//! the title region can be checked without opening a window.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub screen: Screen,
    pub label: String,
    pub active: bool,
}

/// Text rendered by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub nav: Vec<NavItem>,
}

/// Builds the header content for the current locale and screen.
#[must_use]
pub fn header(ctx: &ViewContext<'_>) -> Header {
    let nav = Screen::ALL
        .iter()
        .map(|&screen| NavItem {
            screen,
            label: ctx.i18n.tr(screen.nav_key()),
            active: screen == ctx.active,
        })
        .collect();

    Header {
        title: ctx.i18n.tr("app-title"),
        nav,
    }
}

/// Process a header message and return the corresponding event.
#[must_use]
pub fn update(message: &Message, active: Screen) -> Event {
    match message {
        Message::Navigate(screen) if *screen != active => Event::Navigate(*screen),
        Message::Navigate(_) => Event::None,
    }
}

/// Render the header.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = header(&ctx);

    let title = Text::new(content.title).size(typography::TITLE_MD);

    let nav = content.nav.into_iter().fold(
        Row::new().spacing(spacing::XS),
        |row, item| {
            let mut entry = button(Text::new(item.label).size(typography::BODY));
            if item.active {
                entry = entry.style(button::primary);
            } else {
                entry = entry
                    .style(button::secondary)
                    .on_press(Message::Navigate(item.screen));
            }
            row.push(entry)
        },
    );

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(container(title).width(Length::Fill))
        .push(nav);

    Container::new(bar)
        .width(Length::Fill)
        .padding(spacing::SM)
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
    fn title_is_brand_name_in_every_locale() {
        for signal in ["en-US", "fr-FR"] {
            let i18n = i18n(signal);
            let content = header(&ViewContext {
                i18n: &i18n,
                active: Screen::Reminders,
            });
            assert_eq!(content.title, "AngelVoice");
        }
    }

    #[test]
    fn active_screen_is_marked() {
        let i18n = i18n("en");
        let content = header(&ViewContext {
            i18n: &i18n,
            active: Screen::Settings,
        });
        let active: Vec<Screen> = content
            .nav
            .iter()
            .filter(|item| item.active)
            .map(|item| item.screen)
            .collect();
        assert_eq!(active, vec![Screen::Settings]);
    }

    #[test]
    fn navigation_labels_follow_locale() {
        let i18n = i18n("fr");
        let content = header(&ViewContext {
            i18n: &i18n,
            active: Screen::Reminders,
        });
        let labels: Vec<&str> = content.nav.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["Rappels", "Paramètres"]);
    }

    #[test]
    fn navigating_to_current_screen_is_a_no_op() {
        assert_eq!(
            update(&Message::Navigate(Screen::Reminders), Screen::Reminders),
            Event::None
        );
        assert_eq!(
            update(&Message::Navigate(Screen::Settings), Screen::Reminders),
            Event::Navigate(Screen::Settings)
        );
    }
}
