// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The shell header sits above whichever screen is active.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::reminders::{self, ViewContext as RemindersViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::shell::{self, ViewContext as ShellViewContext};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

/// Renders the header and the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = shell::view(ShellViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
    })
    .map(Message::Shell);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Reminders => reminders::view(RemindersViewContext { i18n: ctx.i18n }),
        Screen::Settings => settings::view(SettingsViewContext { i18n: ctx.i18n })
            .map(Message::Settings),
    };

    let column = Column::new().push(header).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
