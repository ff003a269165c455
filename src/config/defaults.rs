// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Durations**: How long each kind of notification stays on screen
//! - **Transitions**: Enter/exit delays of the toast lifecycle
//! - **Polling**: Tick interval driving expiry checks

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default display duration for success, warning and info notifications (ms).
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Default display duration for error notifications (ms).
///
/// Errors linger longer so failures are not missed.
pub const DEFAULT_ERROR_DURATION_MS: u64 = 7_000;

/// Upper bound accepted for any configured duration (ms). One hour.
pub const MAX_DURATION_MS: u64 = 3_600_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay before a freshly added toast is shown (ms).
pub const DEFAULT_ENTER_DELAY_MS: u64 = 10;

/// Time a dismissed or expired toast spends leaving before removal (ms).
pub const DEFAULT_EXIT_DELAY_MS: u64 = 300;

/// Upper bound for enter/exit delays (ms).
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Polling Defaults
// ==========================================================================

/// Interval of the tick subscription while notifications exist (ms).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Minimum tick interval (ms).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum tick interval (ms).
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

const _: () = {
    assert!(DEFAULT_ERROR_DURATION_MS > DEFAULT_DURATION_MS);
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
    assert!(DEFAULT_EXIT_DELAY_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    // Ticks must be fine enough to resolve the exit transition.
    assert!(DEFAULT_TICK_INTERVAL_MS < DEFAULT_EXIT_DELAY_MS);
};
