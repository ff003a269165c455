// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent, an optional title and
//! action button, and a dismiss button. Their opacity follows the
//! presentation phase so entering and leaving toasts fade.

use super::center::{Message, NotificationCenter};
use super::notification::{Kind, Notification};
use crate::clock::Clock;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, font, Color, Element, Font, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast at the given opacity.
    pub fn view(notification: &Notification, alpha: f32) -> Element<'_, Message> {
        let kind = notification.kind();
        let accent_color = kind.color();
        let id = notification.id();

        let icon = Text::new(kind.glyph())
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(accent_color, alpha)),
            });

        let mut body = Column::new().spacing(spacing::XXS);

        if let Some(title) = notification.title() {
            body = body.push(
                Text::new(title)
                    .size(typography::BODY)
                    .font(Font {
                        weight: font::Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .style(move |theme: &Theme| text_style(theme, alpha)),
            );
        }

        body = body.push(
            Text::new(notification.message())
                .size(typography::BODY_SM)
                .style(move |theme: &Theme| text_style(theme, alpha)),
        );

        if let Some(action) = notification.action() {
            body = body.push(
                button(Text::new(action.label()).size(typography::CAPTION))
                    .on_press(Message::InvokeAction(id))
                    .padding(spacing::XXS)
                    .style(move |theme: &Theme, status| action_button_style(theme, status, alpha)),
            );
        }

        let dismiss_button = button(Text::new("×").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        // Layout: [icon] [title/message/action] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, kind, alpha))
            .into()
    }

    /// Renders the overlay with every live notification, oldest on top,
    /// stacked in the top-right corner.
    pub fn view_overlay<C: Clock>(center: &NotificationCenter<C>) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = center
            .entries()
            .filter(|(_, phase)| phase.is_live())
            .map(|(notification, _)| Self::view(notification, center.opacity(notification.id())))
            .collect();

        if toasts.is_empty() {
            // Empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Scales a color's alpha channel by `alpha`.
fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

fn text_style(theme: &Theme, alpha: f32) -> text::Style {
    text::Style {
        color: Some(fade(theme.palette().text, alpha)),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, kind: Kind, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let tinted = Color {
        a: opacity::SURFACE,
        ..mix(bg_color, kind.color(), 0.15)
    };

    container::Style {
        background: Some(iced::Background::Color(fade(tinted, alpha))),
        border: iced::Border {
            color: fade(kind.color(), alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Linear blend of `base` toward `accent`.
fn mix(base: Color, accent: Color, amount: f32) -> Color {
    let t = amount.clamp(0.0, 1.0);
    Color::from_rgb(
        base.r + (accent.r - base.r) * t,
        base.g + (accent.g - base.g) * t,
        base.b + (accent.b - base.b) * t,
    )
}

fn action_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let base = theme.extended_palette().background.base;
    let overlay = match status {
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_SUBTLE,
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(iced::Background::Color(fade(
            Color {
                a: overlay,
                ..palette::GRAY_400
            },
            alpha,
        ))),
        text_color: fade(base.text, alpha),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: fade(base.text, alpha),
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(fade(
                Color {
                    a: if matches!(status, button::Status::Hovered) {
                        opacity::OVERLAY_SUBTLE
                    } else {
                        opacity::OVERLAY_MEDIUM
                    },
                    ..palette::GRAY_400
                },
                alpha,
            ))),
            text_color: fade(base.text, alpha),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: fade(
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..base.text
                },
                alpha,
            ),
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
