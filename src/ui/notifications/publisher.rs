// SPDX-License-Identifier: MPL-2.0
//! Intent-named entry points for creating notifications.
//!
//! Implementors only provide [`Publish::publish`], which stores an already
//! validated draft. The typed helpers fix the kind, reject empty messages,
//! and mirror warnings and errors to the log.

use super::notification::{Draft, Kind, NotificationId, Overrides};
use super::store::Store;
use crate::error::Result;
use std::time::Instant;

pub trait Publish {
    /// Stores a validated draft and returns the new notification's id.
    fn publish(&mut self, draft: Draft) -> NotificationId;

    /// Publishes a notification of `kind`.
    ///
    /// Fails with [`Error::InvalidNotification`](crate::error::Error::InvalidNotification)
    /// without touching the set when `message` is empty.
    fn notify(
        &mut self,
        kind: Kind,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> Result<NotificationId>
    where
        Self: Sized,
    {
        let draft = Draft::new(message).kind(kind).with_overrides(overrides);
        draft.validate()?;

        match kind {
            Kind::Error => tracing::error!(message = %draft.message, "error notification"),
            Kind::Warning => tracing::warn!(message = %draft.message, "warning notification"),
            Kind::Success | Kind::Info => {
                tracing::debug!(%kind, message = %draft.message, "notification")
            }
        }

        Ok(self.publish(draft))
    }

    fn notify_success(
        &mut self,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> Result<NotificationId>
    where
        Self: Sized,
    {
        self.notify(Kind::Success, message, overrides)
    }

    /// Errors default to a longer duration than the other kinds.
    fn notify_error(
        &mut self,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> Result<NotificationId>
    where
        Self: Sized,
    {
        self.notify(Kind::Error, message, overrides)
    }

    fn notify_warning(
        &mut self,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> Result<NotificationId>
    where
        Self: Sized,
    {
        self.notify(Kind::Warning, message, overrides)
    }

    fn notify_info(
        &mut self,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> Result<NotificationId>
    where
        Self: Sized,
    {
        self.notify(Kind::Info, message, overrides)
    }
}

/// Publishes straight into a [`Store`] at a fixed instant.
#[derive(Debug)]
pub struct PublishAt<'a> {
    store: &'a mut Store,
    now: Instant,
}

impl<'a> PublishAt<'a> {
    pub fn new(store: &'a mut Store, now: Instant) -> Self {
        Self { store, now }
    }
}

impl Publish for PublishAt<'_> {
    fn publish(&mut self, draft: Draft) -> NotificationId {
        self.store.add(draft, self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::notifications::{Action, Notification};
    use std::time::Duration;

    #[test]
    fn notify_error_uses_error_kind_and_longer_duration() {
        let mut store = Store::default();
        let id = PublishAt::new(&mut store, Instant::now())
            .notify_error("x", Overrides::default())
            .unwrap();

        let stored = store.get(id).unwrap();
        assert_eq!(stored.kind(), Kind::Error);
        assert_eq!(stored.duration(), Duration::from_millis(7_000));
    }

    #[test]
    fn notify_success_uses_default_duration() {
        let mut store = Store::default();
        let id = PublishAt::new(&mut store, Instant::now())
            .notify_success("x", Overrides::default())
            .unwrap();

        let stored = store.get(id).unwrap();
        assert_eq!(stored.kind(), Kind::Success);
        assert_eq!(stored.duration(), Duration::from_millis(5_000));
    }

    #[test]
    fn typed_helpers_set_their_kind() {
        let mut store = Store::default();
        let mut publisher = PublishAt::new(&mut store, Instant::now());
        publisher.notify_warning("w", Overrides::default()).unwrap();
        publisher.notify_info("i", Overrides::default()).unwrap();

        let kinds: Vec<_> = store.list().iter().map(Notification::kind).collect();
        assert_eq!(kinds, vec![Kind::Warning, Kind::Info]);
    }

    #[test]
    fn empty_message_is_rejected_without_mutation() {
        let mut store = Store::default();
        let now = Instant::now();
        PublishAt::new(&mut store, now)
            .notify_info("existing", Overrides::default())
            .unwrap();
        let before = store.snapshot();

        let mut publisher = PublishAt::new(&mut store, now);
        for result in [
            publisher.notify_success("", Overrides::default()),
            publisher.notify_error("", Overrides::default()),
            publisher.notify_warning("  ", Overrides::default()),
            publisher.notify_info("", Overrides::default().title("Title only")),
        ] {
            assert!(matches!(result, Err(Error::InvalidNotification(_))));
        }

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut store = Store::default();
        let id = PublishAt::new(&mut store, Instant::now())
            .notify_error(
                "Failed to sign transaction",
                Overrides::default()
                    .title("Signing")
                    .persistent()
                    .action(Action::new("Retry", "retry-signing")),
            )
            .unwrap();

        let stored = store.get(id).unwrap();
        assert_eq!(stored.title(), Some("Signing"));
        assert!(stored.is_persistent());
        assert_eq!(stored.action().map(Action::label), Some("Retry"));
    }
}
