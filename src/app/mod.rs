// SPDX-License-Identifier: MPL-2.0
//! Application root state for the pool demo.
//!
//! The `App` owns a [`NotificationCenter`] and a mock liquidity pool panel.
//! Its buttons stand in for wallet connection, pool refresh, add-liquidity and
//! swap flows; their only effect is to publish notifications, so every kind
//! of toast and every lifecycle path can be exercised by hand.

mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Result;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{
    Action, Event, NotificationCenter, NotificationId, NotificationMessage, Overrides, Publish,
};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Column, Container, Row, Stack, Text};
use iced::{alignment, time, window, Element, Length, Subscription, Task, Theme};
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Action key of the "Retry" button on failed signing notices.
const RETRY_SIGNING: &str = "retry-signing";

/// Simulated latency of a pool data refresh.
const FETCH_LATENCY: Duration = Duration::from_millis(800);

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    notifications: NotificationCenter,
    theme_mode: ThemeMode,
    tick_interval: Duration,
    wallet_connected: bool,
    /// "Fetching" notice to replace once the refresh completes.
    pending_fetch: Option<NotificationId>,
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    if !paths::init_cli_override(flags.config_dir) {
        tracing::warn!("config directory override was already set");
    }

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Logs a rejected publish instead of failing the update.
fn published(result: Result<NotificationId>) -> Option<NotificationId> {
    match result {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::error!(error = %err, "notification rejected");
            None
        }
    }
}

impl App {
    fn from_config(config: &Config) -> Self {
        Self {
            notifications: NotificationCenter::new(config.notifications.timings()),
            theme_mode: config.general.theme_mode,
            tick_interval: config.notifications.tick_interval(),
            wallet_connected: false,
            pending_fetch: None,
        }
    }

    fn new() -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::from_loaded(&config, config_warning), Task::none())
    }

    /// Builds the state from loaded settings and reports a broken settings
    /// file as a warning toast.
    fn from_loaded(config: &Config, config_warning: Option<String>) -> Self {
        let mut app = Self::from_config(config);

        if let Some(warning) = config_warning {
            published(
                app.notifications
                    .notify_warning(warning, Overrides::default().title("Settings")),
            );
        }

        app
    }

    fn title(&self) -> String {
        if self.wallet_connected {
            "Notify Center - ALGO/USDC (wallet connected)".to_string()
        } else {
            "Notify Center - ALGO/USDC".to_string()
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.notifications.has_notifications() {
            time::every(self.tick_interval).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                match self.notifications.update(notification_message) {
                    Some(Event::ActionInvoked { key, .. }) => self.handle_action(&key),
                    None => Task::none(),
                }
            }
            Message::Tick => {
                self.notifications.update(NotificationMessage::Tick);
                Task::none()
            }
            Message::ConnectWallet => {
                if self.wallet_connected {
                    self.wallet_connected = false;
                    published(
                        self.notifications
                            .notify_info("Disconnected from wallet", Overrides::default()),
                    );
                } else {
                    self.wallet_connected = true;
                    published(self.notifications.notify_success(
                        "Wallet connected",
                        Overrides::default().title("Wallet"),
                    ));
                }
                Task::none()
            }
            Message::FetchPool => {
                if self.pending_fetch.is_some() {
                    return Task::none();
                }
                self.pending_fetch = published(
                    self.notifications
                        .notify_info("Fetching pool data...", Overrides::default().persistent()),
                );
                Task::perform(tokio::time::sleep(FETCH_LATENCY), |()| {
                    Message::PoolFetched
                })
            }
            Message::PoolFetched => {
                if let Some(id) = self.pending_fetch.take() {
                    self.notifications.remove(id);
                }
                published(
                    self.notifications
                        .notify_success("Pool data updated successfully!", Overrides::default()),
                );
                Task::none()
            }
            Message::AddLiquidity => {
                self.require_wallet("add liquidity", "Liquidity added successfully!");
                Task::none()
            }
            Message::Swap => {
                self.require_wallet("swap tokens", "Swap completed successfully!");
                Task::none()
            }
            Message::SimulateFailure => {
                published(
                    self.notifications.notify_error(
                        "The wallet rejected the signing request.",
                        Overrides::default()
                            .title("Signing failed")
                            .action(Action::new("Retry", RETRY_SIGNING)),
                    ),
                );
                Task::none()
            }
            Message::StickyNotice => {
                published(self.notifications.notify_warning(
                    "Using demo data - pool API temporarily unavailable",
                    Overrides::default().persistent(),
                ));
                Task::none()
            }
            Message::ClearNotifications => {
                self.notifications.clear();
                Task::none()
            }
        }
    }

    /// Publishes `success` if a wallet is connected, a warning otherwise.
    fn require_wallet(&mut self, operation: &str, success: &str) {
        let result = if self.wallet_connected {
            self.notifications.notify_success(success, Overrides::default())
        } else {
            self.notifications.notify_warning(
                format!("Connect a wallet first to {operation}"),
                Overrides::default(),
            )
        };
        published(result);
    }

    fn handle_action(&mut self, key: &str) -> Task<Message> {
        match key {
            RETRY_SIGNING => {
                published(
                    self.notifications
                        .notify_info("Retrying transaction signing...", Overrides::default()),
                );
                Task::done(Message::AddLiquidity)
            }
            other => {
                tracing::warn!(key = other, "unhandled notification action");
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = Text::new("ALGO / USDC liquidity pool")
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::PRIMARY_500),
            });

        let status = Text::new(if self.wallet_connected {
            "Wallet connected"
        } else {
            "Wallet not connected"
        })
        .size(typography::BODY);

        let connect_label = if self.wallet_connected {
            "Disconnect wallet"
        } else {
            "Connect wallet"
        };

        let panel = Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(status)
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(action_button(connect_label, Message::ConnectWallet))
                    .push(action_button("Refresh pool data", Message::FetchPool)),
            )
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(action_button("Add liquidity", Message::AddLiquidity))
                    .push(action_button("Swap", Message::Swap)),
            )
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(action_button("Simulate failure", Message::SimulateFailure))
                    .push(action_button("Sticky notice", Message::StickyNotice)),
            )
            .push(action_button(
                "Clear notifications",
                Message::ClearNotifications,
            ));

        let base = Container::new(
            Container::new(panel)
                .width(Length::Fixed(sizing::PANEL_WIDTH))
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(self.notifications.view().map(Message::Notification))
            .into()
    }
}

fn action_button(label: &'static str, message: Message) -> Element<'static, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .into()
}
