// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Reminders,
    Settings,
}

impl Screen {
    /// Screens in navigation order.
    pub const ALL: [Screen; 2] = [Screen::Reminders, Screen::Settings];

    /// Translation key of the navigation label.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Screen::Reminders => "nav-reminders",
            Screen::Settings => "nav-settings",
        }
    }
}
