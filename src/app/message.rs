// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded toast interaction (dismiss, action, tick).
    Notification(notifications::NotificationMessage),
    /// Periodic tick while toasts are on screen.
    Tick,
    ConnectWallet,
    FetchPool,
    /// The simulated pool refresh finished.
    PoolFetched,
    AddLiquidity,
    Swap,
    /// Publishes a failed signing attempt with a retry action.
    SimulateFailure,
    /// Publishes a notice that stays until dismissed.
    StickyNotice,
    ClearNotifications,
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NOTIFY_CENTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
