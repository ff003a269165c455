// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`NotificationCenter`] owns the [`Store`] and the presentation
//! [`Driver`] and reads time from an injected [`Clock`]. The host application
//! constructs one, keeps it in its state, publishes through [`Publish`], and
//! feeds it [`Message`]s from the toast widgets and a periodic tick.

use super::lifecycle::{Driver, Phase, Transition};
use super::notification::{Draft, Notification, NotificationId, Timings};
use super::publisher::Publish;
use super::store::Store;
use super::toast::Toast;
use crate::clock::{Clock, SystemClock};
use iced::Element;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// The action button of a notification was pressed.
    InvokeAction(NotificationId),
    /// Tick for advancing enter, expiry and exit transitions.
    Tick,
}

/// Outcomes the host application has to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ActionInvoked { id: NotificationId, key: String },
}

#[derive(Debug)]
pub struct NotificationCenter<C = SystemClock> {
    store: Store,
    driver: Driver,
    clock: C,
}

impl NotificationCenter<SystemClock> {
    /// Creates an empty center driven by the wall clock.
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self::with_clock(timings, SystemClock)
    }
}

impl Default for NotificationCenter<SystemClock> {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl<C: Clock> NotificationCenter<C> {
    #[must_use]
    pub fn with_clock(timings: Timings, clock: C) -> Self {
        Self {
            store: Store::new(timings),
            driver: Driver::new(timings),
            clock,
        }
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.store.timings()
    }

    pub fn set_timings(&mut self, timings: Timings) {
        self.store.set_timings(timings);
        self.driver.set_timings(timings);
    }

    /// Adds a notification without validating it.
    ///
    /// Prefer the [`Publish`] helpers, which reject empty messages.
    pub fn add(&mut self, draft: Draft) -> NotificationId {
        let now = self.clock.now();
        let id = self.store.add(draft, now);
        self.driver.track(id, now);
        id
    }

    /// Starts the exit transition of `id`. Unknown ids are ignored.
    ///
    /// The notification stays in [`list`](Self::list) until the exit delay
    /// has passed and the next [`tick`](Self::tick) removes it. Transitions
    /// already due are applied first, so a notification whose deadline has
    /// passed keeps leaving from its deadline and this returns `false`.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.tick();
        self.driver.dismiss(id, self.clock.now()).is_some()
    }

    /// Removes `id` immediately, skipping the exit transition.
    ///
    /// Useful to replace a "loading" notice with its outcome.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        self.driver.forget(id);
        self.store.remove(id)
    }

    /// Removes everything at once.
    pub fn clear(&mut self) {
        self.store.clear();
        self.driver.clear();
    }

    /// Current notifications in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Notification] {
        self.store.list()
    }

    /// Notifications paired with their presentation phase, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&Notification, Phase)> {
        self.store
            .list()
            .iter()
            .map(|n| (n, self.driver.phase(n.id())))
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.store.get(id)
    }

    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Phase {
        self.driver.phase(id)
    }

    /// Current visibility of `id`, from 0.0 to 1.0.
    #[must_use]
    pub fn opacity(&self, id: NotificationId) -> f32 {
        self.driver.opacity(id, self.clock.now())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether a tick subscription is needed.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.store.is_empty()
    }

    /// Advances every lifecycle transition due now.
    pub fn tick(&mut self) -> Vec<Transition> {
        let now = self.clock.now();
        let transitions = self.driver.advance(&mut self.store, now);
        for transition in &transitions {
            tracing::trace!(
                id = %transition.id,
                from = ?transition.from,
                to = ?transition.to,
                "notification transition"
            );
        }
        transitions
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
                None
            }
            Message::InvokeAction(id) => {
                let key = self.store.get(id)?.action()?.key().to_string();
                tracing::debug!(%id, %key, "notification action invoked");
                Some(Event::ActionInvoked { id, key })
            }
            Message::Tick => {
                self.tick();
                None
            }
        }
    }

    /// Renders the toast overlay.
    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(self)
    }
}

impl<C: Clock> Publish for NotificationCenter<C> {
    fn publish(&mut self, draft: Draft) -> NotificationId {
        self.add(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::ui::notifications::{Action, Kind, Overrides};

    fn center() -> (NotificationCenter<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (
            NotificationCenter::with_clock(Timings::default(), clock.clone()),
            clock,
        )
    }

    #[test]
    fn new_center_is_empty() {
        let (center, _) = center();
        assert!(center.is_empty());
        assert!(!center.has_notifications());
    }

    #[test]
    fn dismiss_message_starts_leaving_and_tick_removes() {
        let (mut center, clock) = center();
        let id = center
            .notify_success("Swap completed", Overrides::default())
            .unwrap();

        clock.advance_ms(10);
        center.update(Message::Tick);
        assert_eq!(center.phase(id), Phase::Visible);

        center.update(Message::Dismiss(id));
        assert_eq!(center.phase(id), Phase::Leaving);
        assert_eq!(center.len(), 1);

        clock.advance_ms(300);
        center.update(Message::Tick);
        assert!(center.is_empty());
        assert_eq!(center.phase(id), Phase::Removed);
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let (mut center, _) = center();
        let id = center.notify_info("a", Overrides::default()).unwrap();
        assert!(center.remove(id));

        assert!(!center.dismiss(id));
        assert!(!center.remove(id));
        assert!(center.update(Message::Dismiss(id)).is_none());
    }

    #[test]
    fn action_invocation_reports_key() {
        let (mut center, _) = center();
        let id = center
            .notify_error(
                "Failed to add liquidity",
                Overrides::default().action(Action::new("Retry", "retry-add")),
            )
            .unwrap();

        assert_eq!(
            center.update(Message::InvokeAction(id)),
            Some(Event::ActionInvoked {
                id,
                key: "retry-add".to_string()
            })
        );
        // Invoking an action does not dismiss the notification.
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn action_invocation_without_action_is_ignored() {
        let (mut center, _) = center();
        let id = center.notify_info("plain", Overrides::default()).unwrap();
        assert!(center.update(Message::InvokeAction(id)).is_none());
    }

    #[test]
    fn remove_replaces_loading_notice_immediately() {
        let (mut center, _) = center();
        let loading = center
            .notify_info("Fetching pool data...", Overrides::default().persistent())
            .unwrap();

        center.remove(loading);
        let done = center
            .notify_success("Pool data updated", Overrides::default())
            .unwrap();

        let ids: Vec<_> = center.list().iter().map(Notification::id).collect();
        assert_eq!(ids, vec![done]);
    }

    #[test]
    fn entries_pair_notifications_with_phases() {
        let (mut center, clock) = center();
        let first = center.notify_info("one", Overrides::default()).unwrap();
        clock.advance_ms(10);
        center.tick();
        let second = center.notify_warning("two", Overrides::default()).unwrap();

        let entries: Vec<_> = center
            .entries()
            .map(|(n, phase)| (n.id(), n.kind(), phase))
            .collect();
        assert_eq!(
            entries,
            vec![
                (first, Kind::Info, Phase::Visible),
                (second, Kind::Warning, Phase::Pending),
            ]
        );
    }

    #[test]
    fn clear_empties_center() {
        let (mut center, _) = center();
        for i in 0..3 {
            center.notify_info(format!("n{i}"), Overrides::default()).unwrap();
        }
        center.clear();
        assert!(center.is_empty());
        assert!(center.tick().is_empty());
    }

    #[test]
    fn set_timings_applies_to_new_notifications() {
        let (mut center, _) = center();
        center.set_timings(Timings {
            error_duration: std::time::Duration::from_secs(10),
            ..Timings::default()
        });
        let id = center.notify_error("x", Overrides::default()).unwrap();
        assert_eq!(
            center.get(id).map(Notification::duration),
            Some(std::time::Duration::from_secs(10))
        );
    }
}
