// SPDX-License-Identifier: MPL-2.0
//! `notify_center` is a toast notification center built with the Iced GUI
//! framework.
//!
//! It keeps an ordered set of short-lived notifications with per-kind
//! default durations, walks each one through an explicit
//! `Pending → Visible → Leaving → Removed` presentation lifecycle, and renders
//! them as a toast stack. A small demo application publishes notifications
//! from a mock liquidity pool panel.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
