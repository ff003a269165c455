// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is created by the store from a [`Draft`] and never
//! changes afterwards; the only thing that happens to it later is removal.

use crate::config::defaults::{
    DEFAULT_DURATION_MS, DEFAULT_ENTER_DELAY_MS, DEFAULT_ERROR_DURATION_MS, DEFAULT_EXIT_DELAY_MS,
};
use crate::error::{Error, Result};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Ids are handed out by a [`Store`](super::Store) from a monotonically
/// increasing counter and are never reused by that store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of notification; drives the default duration and the styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Short glyph rendered in front of the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "✕",
            Kind::Warning => "!",
            Kind::Info => "i",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durations governing the lifetime of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Display duration for success, warning and info notifications.
    pub default_duration: Duration,
    /// Display duration for error notifications.
    pub error_duration: Duration,
    /// Delay between being added and being shown.
    pub enter_delay: Duration,
    /// Time spent leaving before the notification is removed from the store.
    pub exit_delay: Duration,
}

impl Timings {
    /// Default display duration for a kind when the caller gives none.
    #[must_use]
    pub fn duration_for(&self, kind: Kind) -> Duration {
        match kind {
            Kind::Error => self.error_duration,
            Kind::Success | Kind::Warning | Kind::Info => self.default_duration,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            default_duration: Duration::from_millis(DEFAULT_DURATION_MS),
            error_duration: Duration::from_millis(DEFAULT_ERROR_DURATION_MS),
            enter_delay: Duration::from_millis(DEFAULT_ENTER_DELAY_MS),
            exit_delay: Duration::from_millis(DEFAULT_EXIT_DELAY_MS),
        }
    }
}

/// Single affordance button attached to a notification.
///
/// Pressing it reports `key` back to the host application through
/// [`Event::ActionInvoked`](super::Event::ActionInvoked).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    label: String,
    key: String,
}

impl Action {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Optional fields a publisher call may override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub title: Option<String>,
    pub duration: Option<Duration>,
    pub action: Option<Action>,
}

impl Overrides {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the notification until it is dismissed.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

/// A partially specified notification, as accepted by
/// [`Store::add`](super::Store::add).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub message: String,
    pub kind: Option<Kind>,
    pub title: Option<String>,
    pub duration: Option<Duration>,
    pub action: Option<Action>,
}

impl Draft {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
            title: None,
            duration: None,
            action: None,
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Applies caller overrides; fields left `None` keep the draft's value.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.title.is_some() {
            self.title = overrides.title;
        }
        if overrides.duration.is_some() {
            self.duration = overrides.duration;
        }
        if overrides.action.is_some() {
            self.action = overrides.action;
        }
        self
    }

    /// Rejects drafts whose message is empty or only whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(Error::InvalidNotification(
                "message must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: Option<String>,
    message: String,
    /// Zero means the notification stays until dismissed.
    duration: Duration,
    action: Option<Action>,
    created_at: Instant,
}

impl Notification {
    /// Resolves a draft into a notification, filling in defaults.
    pub(crate) fn from_draft(
        id: NotificationId,
        draft: Draft,
        timings: &Timings,
        created_at: Instant,
    ) -> Self {
        let kind = draft.kind.unwrap_or_default();
        Self {
            id,
            kind,
            title: draft.title,
            message: draft.message,
            duration: draft.duration.unwrap_or_else(|| timings.duration_for(kind)),
            action: draft.action,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Whether this notification waits for a manual dismiss.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    /// Instant at which this notification expires, if it ever does.
    ///
    /// Durations too large to represent are treated as never expiring.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        if self.is_persistent() {
            return None;
        }
        self.created_at.checked_add(self.duration)
    }

    /// Whether the expiry deadline has been reached at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at().is_some_and(|deadline| deadline <= now)
    }
}
