// SPDX-License-Identifier: MPL-2.0
//! Presentation lifecycle of toasts.
//!
//! Each notification walks `Pending → Visible → Leaving → Removed`:
//!
//! - `Pending` until the enter delay has passed since it was added,
//! - `Visible` while shown; expiry still counts from when it was added,
//! - `Leaving` once it expires or is dismissed,
//! - `Removed` when the exit delay has passed, at which point the driver
//!   deletes it from the [`Store`].
//!
//! The driver holds no authoritative data. Anything the store no longer
//! contains is forgotten on the next [`Driver::advance`].

use super::notification::{NotificationId, Timings};
use super::store::Store;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Presentation phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Pending,
    Visible,
    Leaving,
    Removed,
}

impl Phase {
    /// Whether the toast should currently be on screen (entering, shown or
    /// fading out).
    #[must_use]
    pub fn is_live(self) -> bool {
        !matches!(self, Phase::Removed)
    }
}

/// A phase change performed by [`Driver::advance`] or [`Driver::dismiss`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub id: NotificationId,
    pub from: Phase,
    pub to: Phase,
}

/// What made a notification start leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeaveCause {
    Expired,
    Dismissed,
}

#[derive(Debug, Clone, Copy)]
struct Track {
    phase: Phase,
    added_at: Instant,
    /// Start of the exit transition, set when entering `Leaving`.
    leaving_since: Option<Instant>,
    /// Opacity the exit fade starts from; zero if the toast was never shown.
    fade_from: f32,
}

impl Track {
    fn new(added_at: Instant) -> Self {
        Self {
            phase: Phase::Pending,
            added_at,
            leaving_since: None,
            fade_from: 0.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct Driver {
    tracks: HashMap<NotificationId, Track>,
    enter_delay: Duration,
    exit_delay: Duration,
}

impl Driver {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            tracks: HashMap::new(),
            enter_delay: timings.enter_delay,
            exit_delay: timings.exit_delay,
        }
    }

    pub fn set_timings(&mut self, timings: Timings) {
        self.enter_delay = timings.enter_delay;
        self.exit_delay = timings.exit_delay;
    }

    /// Starts tracking a freshly added notification in `Pending`.
    pub fn track(&mut self, id: NotificationId, added_at: Instant) {
        self.tracks.entry(id).or_insert_with(|| Track::new(added_at));
    }

    /// Stops tracking `id` without touching the store.
    pub fn forget(&mut self, id: NotificationId) {
        self.tracks.remove(&id);
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Current phase of `id`; untracked ids report `Removed`.
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Phase {
        self.tracks
            .get(&id)
            .map_or(Phase::Removed, |track| track.phase)
    }

    /// Whether no notification is being tracked.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Starts the exit transition for a manual dismiss.
    ///
    /// Returns `None` when the id is unknown or already leaving.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> Option<Transition> {
        self.begin_leaving(id, now, LeaveCause::Dismissed)
    }

    fn begin_leaving(
        &mut self,
        id: NotificationId,
        since: Instant,
        cause: LeaveCause,
    ) -> Option<Transition> {
        let track = self.tracks.get_mut(&id)?;
        if matches!(track.phase, Phase::Leaving | Phase::Removed) {
            return None;
        }

        let from = track.phase;
        track.phase = Phase::Leaving;
        track.leaving_since = Some(since);
        track.fade_from = if from == Phase::Visible { 1.0 } else { 0.0 };
        tracing::debug!(%id, ?cause, "notification leaving");

        Some(Transition {
            id,
            from,
            to: Phase::Leaving,
        })
    }

    /// Visibility of `id` at `now`, from 0.0 (hidden) to 1.0 (opaque).
    ///
    /// Leaving toasts fade out linearly over the exit delay.
    #[must_use]
    pub fn opacity(&self, id: NotificationId, now: Instant) -> f32 {
        let Some(track) = self.tracks.get(&id) else {
            return 0.0;
        };

        match track.phase {
            Phase::Pending | Phase::Removed => 0.0,
            Phase::Visible => 1.0,
            Phase::Leaving => {
                if self.exit_delay.is_zero() {
                    return 0.0;
                }
                let since = track.leaving_since.unwrap_or(now);
                let progress = now.saturating_duration_since(since).as_secs_f32()
                    / self.exit_delay.as_secs_f32();
                (track.fade_from * (1.0 - progress)).clamp(0.0, 1.0)
            }
        }
    }

    /// Applies every transition due at `now` and returns them in the order
    /// notifications appear in the store.
    ///
    /// Expired notifications start leaving at their deadline rather than at
    /// `now`, so a late tick does not stretch the exit transition.
    pub fn advance(&mut self, store: &mut Store, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();

        self.tracks.retain(|id, _| store.contains(*id));

        let live: Vec<_> = store
            .list()
            .iter()
            .map(|n| (n.id(), n.created_at(), n.expires_at()))
            .collect();

        for (id, created_at, expires_at) in live {
            self.track(id, created_at);

            if let Some(track) = self.tracks.get_mut(&id) {
                if track.phase == Phase::Pending
                    && now.saturating_duration_since(track.added_at) >= self.enter_delay
                {
                    track.phase = Phase::Visible;
                    transitions.push(Transition {
                        id,
                        from: Phase::Pending,
                        to: Phase::Visible,
                    });
                }
            }

            if let Some(deadline) = expires_at.filter(|deadline| *deadline <= now) {
                transitions.extend(self.begin_leaving(id, deadline, LeaveCause::Expired));
            }

            let exit_done = self.tracks.get(&id).is_some_and(|track| {
                track.phase == Phase::Leaving
                    && track
                        .leaving_since
                        .is_some_and(|since| now.saturating_duration_since(since) >= self.exit_delay)
            });

            if exit_done {
                store.remove(id);
                self.tracks.remove(&id);
                transitions.push(Transition {
                    id,
                    from: Phase::Leaving,
                    to: Phase::Removed,
                });
            }
        }

        transitions
    }
}
