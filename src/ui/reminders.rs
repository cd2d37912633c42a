// SPDX-License-Identifier: MPL-2.0
//! Reminders screen.
//!
//! Only the screen frame lives here: the top-level heading and the empty
//! state shown while no reminders exist.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the reminders screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Text rendered by the reminders screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub heading: String,
    pub empty_state: String,
}

#[must_use]
pub fn content(ctx: &ViewContext<'_>) -> Content {
    Content {
        heading: ctx.i18n.tr("reminders-title"),
        empty_state: ctx.i18n.tr("reminders-empty"),
    }
}

/// Render the reminders screen. It emits no messages of its own.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let content = content(&ctx);

    let column = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .push(Text::new(content.heading).size(typography::TITLE_LG))
        .push(Text::new(content.empty_state).size(typography::BODY));

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
    fn heading_reads_reminders_in_english() {
        let i18n = i18n("en-US");
        assert_eq!(content(&ViewContext { i18n: &i18n }).heading, "Reminders");
    }

    #[test]
    fn heading_is_translated_in_french() {
        let i18n = i18n("fr-CA");
        assert_eq!(content(&ViewContext { i18n: &i18n }).heading, "Rappels");
    }

    #[test]
    fn empty_state_is_never_missing() {
        for signal in ["en", "fr"] {
            let i18n = i18n(signal);
            let content = content(&ViewContext { i18n: &i18n });
            assert!(!content.empty_state.starts_with("MISSING"));
        }
    }
}
