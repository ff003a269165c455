// SPDX-License-Identifier: MPL-2.0
//! Authoritative set of live notifications.
//!
//! The store keeps notifications in insertion order and knows when each one
//! is due to expire. It never reads the clock: callers pass `now`, which
//! keeps expiry deterministic under a virtual clock.
//!
//! Expiry deadlines are derived from each notification's creation time and
//! duration, so removing a notification also cancels its pending expiry.

use super::notification::{Draft, Notification, NotificationId, Timings};
use std::time::Instant;

#[derive(Debug, Default)]
pub struct Store {
    /// Live notifications, oldest first.
    notifications: Vec<Notification>,
    /// Next raw id to hand out.
    next_id: u64,
    timings: Timings,
}

impl Store {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            notifications: Vec::new(),
            next_id: 0,
            timings,
        }
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Replaces the timings used for notifications added from now on.
    pub fn set_timings(&mut self, timings: Timings) {
        self.timings = timings;
    }

    /// Adds a notification built from `draft` and returns its id.
    ///
    /// Missing fields are filled in: kind defaults to info and the duration
    /// to the configured default for the resolved kind. A non-zero duration
    /// schedules expiry at `now + duration`.
    pub fn add(&mut self, draft: Draft, now: Instant) -> NotificationId {
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let notification = Notification::from_draft(id, draft, &self.timings, now);
        tracing::trace!(
            %id,
            kind = %notification.kind(),
            duration = ?notification.duration(),
            "notification added"
        );
        self.notifications.push(notification);
        id
    }

    /// Removes the notification with `id`.
    ///
    /// Unknown ids are ignored, so a manual dismiss racing an expiry is
    /// harmless. Returns `true` if something was removed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.notifications.iter().position(|n| n.id() == id) {
            self.notifications.remove(pos);
            tracing::trace!(%id, "notification removed");
            return true;
        }
        false
    }

    /// Current notifications in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Notification] {
        &self.notifications
    }

    /// Owned copy of the current notifications.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Removes every notification. Ids are still never reused.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    /// Notifications whose expiry is due at `now`, with their deadlines,
    /// in insertion order.
    #[must_use]
    pub fn expired(&self, now: Instant) -> Vec<(NotificationId, Instant)> {
        self.notifications
            .iter()
            .filter_map(|n| {
                n.expires_at()
                    .filter(|deadline| *deadline <= now)
                    .map(|deadline| (n.id(), deadline))
            })
            .collect()
    }

    /// Removes every notification whose expiry is due and returns their ids.
    ///
    /// Used when the store runs without a presentation driver.
    pub fn remove_expired(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut removed = Vec::new();
        self.notifications.retain(|n| {
            if n.is_expired(now) {
                removed.push(n.id());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Earliest pending expiry deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.notifications
            .iter()
            .filter_map(Notification::expires_at)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;
    use std::collections::HashSet;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn new_store_is_empty() {
        let store = Store::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.next_deadline(), None);
    }

    #[test]
    fn list_preserves_insertion_order_with_unique_ids() {
        let mut store = Store::default();
        let now = Instant::now();

        let ids: Vec<_> = (0..10)
            .map(|i| store.add(Draft::new(format!("message-{i}")), now))
            .collect();

        let listed: Vec<_> = store.list().iter().map(Notification::id).collect();
        assert_eq!(listed, ids);

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let messages: Vec<_> = store.list().iter().map(Notification::message).collect();
        assert_eq!(messages[0], "message-0");
        assert_eq!(messages[9], "message-9");
    }

    #[test]
    fn removing_first_of_two_leaves_second() {
        let mut store = Store::default();
        let now = Instant::now();
        let a = store.add(Draft::new("A"), now);
        let b = store.add(Draft::new("B"), now);

        assert!(store.remove(a));

        let remaining: Vec<_> = store.list().iter().map(Notification::id).collect();
        assert_eq!(remaining, vec![b]);
        assert_eq!(store.list()[0].message(), "B");
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = Store::default();
        let now = Instant::now();
        let a = store.add(Draft::new("A"), now);
        store.add(Draft::new("B"), now);

        assert!(store.remove(a));
        let after_first = store.snapshot();

        assert!(!store.remove(a));
        assert_eq!(store.snapshot(), after_first);
    }

    #[test]
    fn ids_are_not_reused_after_removal_or_clear() {
        let mut store = Store::default();
        let now = Instant::now();
        let a = store.add(Draft::new("A"), now);
        store.remove(a);
        store.clear();
        let b = store.add(Draft::new("B"), now);

        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn snapshot_is_detached_from_store() {
        let mut store = Store::default();
        let now = Instant::now();
        store.add(Draft::new("A"), now);

        let mut snapshot = store.snapshot();
        snapshot.clear();

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn error_kind_defaults_to_longer_duration() {
        let mut store = Store::default();
        let now = Instant::now();
        let info = store.add(Draft::new("info"), now);
        let error = store.add(Draft::new("error").kind(Kind::Error), now);

        assert_eq!(store.get(info).map(Notification::duration), Some(ms(5_000)));
        assert_eq!(store.get(error).map(Notification::duration), Some(ms(7_000)));
    }

    #[test]
    fn expired_reports_due_notifications_with_deadlines() {
        let mut store = Store::default();
        let now = Instant::now();
        let short = store.add(Draft::new("short").duration(ms(100)), now);
        store.add(Draft::new("long").duration(ms(1_000)), now);
        store.add(Draft::new("sticky").duration(Duration::ZERO), now);

        assert!(store.expired(now + ms(99)).is_empty());
        assert_eq!(store.expired(now + ms(150)), vec![(short, now + ms(100))]);
        assert_eq!(store.next_deadline(), Some(now + ms(100)));
    }

    #[test]
    fn remove_expired_drops_only_due_notifications() {
        let mut store = Store::default();
        let now = Instant::now();
        let short = store.add(Draft::new("short").duration(ms(100)), now);
        let long = store.add(Draft::new("long").duration(ms(1_000)), now);
        let sticky = store.add(Draft::new("sticky").duration(Duration::ZERO), now);

        assert_eq!(store.remove_expired(now + ms(100)), vec![short]);
        assert!(store.contains(long));

        assert_eq!(store.remove_expired(now + ms(10_000)), vec![long]);
        assert!(store.contains(sticky));
        assert_eq!(store.next_deadline(), None);
    }

    #[test]
    fn removal_cancels_pending_expiry() {
        let mut store = Store::default();
        let now = Instant::now();
        let id = store.add(Draft::new("short").duration(ms(100)), now);

        store.remove(id);
        assert!(store.expired(now + ms(500)).is_empty());
        assert!(store.remove_expired(now + ms(500)).is_empty());
    }

    #[test]
    fn timings_apply_to_later_additions() {
        let mut store = Store::default();
        let now = Instant::now();
        store.set_timings(Timings {
            default_duration: ms(1_500),
            ..Timings::default()
        });

        let id = store.add(Draft::new("x"), now);
        assert_eq!(store.get(id).map(Notification::duration), Some(ms(1_500)));
    }
}
