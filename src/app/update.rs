// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{persistence, Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::shell::{self, Event as ShellEvent};
use iced::Task;

/// Mutable application state touched by message handlers.
pub(super) struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
}

pub(super) fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Shell(shell_message) => handle_shell_message(ctx, &shell_message),
        Message::Settings(settings_message) => handle_settings_message(ctx, &settings_message),
    }
}

fn handle_shell_message(ctx: &mut UpdateContext<'_>, message: &shell::Message) -> Task<Message> {
    match shell::update(message, *ctx.screen) {
        ShellEvent::None => Task::none(),
        ShellEvent::Navigate(screen) => {
            tracing::debug!(?screen, "switching screen");
            *ctx.screen = screen;
            Task::none()
        }
    }
}

fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: &settings::Message,
) -> Task<Message> {
    match settings::update(message, ctx.i18n.current_locale()) {
        SettingsEvent::None => Task::none(),
        SettingsEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, &locale)
        }
    }
}
