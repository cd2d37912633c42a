// SPDX-License-Identifier: MPL-2.0
//! Log output setup.
//!
//! Logs go to stderr through `tracing-subscriber`. The filter is read from
//! `ANGEL_VOICE_LOG` using the usual `EnvFilter` directive syntax
//! (`debug`, `angel_voice=trace`, ...) and defaults to `info`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const ENV_LOG_FILTER: &str = "ANGEL_VOICE_LOG";

const DEFAULT_FILTER: &str = "info";

/// Builds the filter from [`ENV_LOG_FILTER`], falling back to `info` when
/// the variable is unset or unparsable.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Safe to call more than once; only the
/// first call has an effect.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
