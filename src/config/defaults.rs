// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Locale**: Language used when no preference matches a translation table
//! - **Window**: Initial and minimum main window size

pub use crate::i18n::DEFAULT_LOCALE;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;

/// Initial window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Smallest window width the layout supports.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Smallest window height the layout supports.
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
