// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of user actions
//! (wallet connection, adding liquidity, swaps, pool refreshes) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its `Kind`, and the `Draft` it is built from
//! - [`store`] - `Store`, the authoritative ordered set with expiry deadlines
//! - [`publisher`] - `Publish`, typed entry points with message validation
//! - [`lifecycle`] - `Driver`, the `Pending → Visible → Leaving → Removed` machine
//! - [`center`] - `NotificationCenter`, tying the above to a clock and messages
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{NotificationCenter, Overrides, Publish, Timings};
//!
//! let mut center = NotificationCenter::new(Timings::default());
//! let id = center.notify_success("Liquidity added successfully!", Overrides::default())?;
//!
//! // In your view function, render toasts
//! let toast_overlay = center.view().map(Message::Notification);
//! ```

mod center;
mod lifecycle;
mod notification;
mod publisher;
mod store;
mod toast;

pub use center::{Event, Message as NotificationMessage, NotificationCenter};
pub use lifecycle::{Driver, Phase, Transition};
pub use notification::{Action, Draft, Kind, Notification, NotificationId, Overrides, Timings};
pub use publisher::{Publish, PublishAt};
pub use store::Store;
pub use toast::Toast;
