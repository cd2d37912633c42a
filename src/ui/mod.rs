// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each screen follows the Elm-style "state down, messages up" pattern: a
//! `ViewContext` carries what the screen reads, `view` renders it, and
//! `update` turns a screen message into an [`Event`](shell::Event) for the
//! application. Screens also expose the text they render through a plain
//! content struct.
//!
//! # Screens
//!
//! - [`shell`] - Header with the application title and navigation
//! - [`reminders`] - Reminders list heading and empty state
//! - [`settings`] - Language picker
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Spacing and typography constants

pub mod design_tokens;
pub mod reminders;
pub mod settings;
pub mod shell;
