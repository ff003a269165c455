// SPDX-License-Identifier: MPL-2.0
//! Log output for the application binary.
//!
//! The filter comes from `RUST_LOG` and defaults to `info`, e.g.
//! `RUST_LOG=notify_center=trace` shows every lifecycle transition.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init()
        .is_ok()
}
