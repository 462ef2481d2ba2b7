// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications: a severity-colored
//! header with an icon glyph, a title and a dismiss button, above a message
//! body. Error toasts render wider, with a bold body on a tinted background.

use super::manager::{Manager, Message};
use super::notification::{Notification, Phase, Severity};
use super::surface::SurfaceBucket;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, title: &'a str) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();
        let faded = notification.phase() == Phase::Hiding;

        // Header: [glyph] [title] ......... [dismiss]
        let glyph = Text::new(severity.glyph().to_string())
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| iced::widget::text::Style {
                color: Some(palette::WHITE),
            });

        let title_text = Text::new(title)
            .size(typography::BODY)
            .style(move |_theme: &Theme| iced::widget::text::Style {
                color: Some(palette::WHITE),
            });

        let notification_id = notification.id();
        let dismiss_button = button(
            Text::new("✕")
                .size(typography::CAPTION)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::WHITE),
                }),
        )
        .on_press(Message::Dismiss(notification_id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

        let header = Container::new(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(glyph)
                .push(
                    Container::new(title_text)
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Left),
                )
                .push(dismiss_button),
        )
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::SM])
        .style(move |_theme: &Theme| header_style(accent_color, faded));

        // Body: error toasts get bold text on a tinted background.
        let body_text = if severity == Severity::Error {
            let mut bold = iced::Font::DEFAULT;
            bold.weight = iced::font::Weight::Bold;
            Text::new(notification.message())
                .size(typography::BODY)
                .font(bold)
        } else {
            Text::new(notification.message()).size(typography::BODY)
        };

        let body = Container::new(body_text.style(move |theme: &Theme| {
            iced::widget::text::Style {
                color: Some(fade(theme.palette().text, faded)),
            }
        }))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |theme: &Theme| body_style(theme, severity, faded));

        let width = match SurfaceBucket::for_severity(severity) {
            SurfaceBucket::Standard => sizing::TOAST_WIDTH,
            SurfaceBucket::Critical => sizing::TOAST_WIDTH_CRITICAL,
        };

        Container::new(Column::new().push(header).push(body))
            .width(Length::Fixed(width))
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, faded))
            .into()
    }

    /// Renders the overlay with every surface that has visible toasts.
    ///
    /// The standard surface stacks bottom-right; the critical surface is
    /// pinned top-center, above everything else.
    pub fn view_overlay<'a>(manager: &'a Manager, title: &'a str) -> Element<'a, Message> {
        let surfaces = manager.surfaces();

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
        let mut any = false;

        if let Some(surface) = surfaces.get(SurfaceBucket::Standard) {
            if !surface.is_empty() {
                any = true;
                let toasts: Vec<Element<'a, Message>> = surface
                    .iter()
                    .map(|notification| Self::view(notification, title))
                    .collect();
                let column = Column::with_children(toasts)
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Right);
                layers = layers.push(
                    Container::new(column)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(alignment::Horizontal::Right)
                        .align_y(alignment::Vertical::Bottom)
                        .padding(spacing::MD),
                );
            }
        }

        if let Some(surface) = surfaces.get(SurfaceBucket::Critical) {
            if !surface.is_empty() {
                any = true;
                let toasts: Vec<Element<'a, Message>> = surface
                    .iter()
                    .map(|notification| Self::view(notification, title))
                    .collect();
                let column = Column::with_children(toasts)
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Center);
                layers = layers.push(
                    Container::new(column)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(alignment::Horizontal::Center)
                        .align_y(alignment::Vertical::Top)
                        .padding(spacing::MD),
                );
            }
        }

        if any {
            layers.into()
        } else {
            // An empty container that takes no space.
            Container::new(Text::new(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        }
    }
}

/// Applies the hiding-phase fade to a color.
fn fade(color: Color, faded: bool) -> Color {
    if faded {
        Color {
            a: color.a * opacity::HIDING,
            ..color
        }
    } else {
        color
    }
}

/// Style for the severity-colored header strip.
fn header_style(accent_color: Color, faded: bool) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(fade(accent_color, faded))),
        border: iced::Border {
            radius: iced::border::Radius::new(0.0)
                .top_left(radius::MD)
                .top_right(radius::MD),
            ..Default::default()
        },
        text_color: Some(fade(palette::WHITE, faded)),
        ..Default::default()
    }
}

/// Style for the toast body. Error bodies get a tinted background.
fn body_style(theme: &Theme, severity: Severity, faded: bool) -> container::Style {
    let bg_color = if severity == Severity::Error {
        palette::ERROR_100
    } else {
        theme.extended_palette().background.base.color
    };

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, faded))),
        border: iced::Border {
            radius: iced::border::Radius::new(0.0)
                .bottom_left(radius::MD)
                .bottom_right(radius::MD),
            ..Default::default()
        },
        text_color: Some(fade(theme.palette().text, faded)),
        ..Default::default()
    }
}

/// Style function for the outer toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, faded: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, faded))),
        border: iced::Border {
            color: fade(accent_color, faded),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette::WHITE,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: palette::WHITE,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: palette::WHITE,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
