// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{settings, shell};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Shell(shell::Message),
    Settings(settings::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`, `fr-CA`). Tried before the
    /// settings file and the system locale.
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ANGEL_VOICE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Print the resolved locales and exit instead of opening a window.
    pub print_locale: bool,
}
