// SPDX-License-Identifier: MPL-2.0
//! `angel_voice` is the desktop client of AngelVoice, a reminders and voice
//! assistant application built with the Iced GUI framework.
//!
//! This crate holds the localization bootstrap (locale resolution, the
//! Fluent translation provider and its catalog), user preference
//! management, and the application shell with its screens.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
