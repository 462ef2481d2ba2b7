// SPDX-License-Identifier: MPL-2.0
//! View rendering: demo controls with the toast overlay stacked on top.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Severity, Toast};
use iced::widget::{button, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Renders the demo screen with the toast overlay above it.
pub fn view(app: &App) -> Element<'_, Message> {
    let title = Text::new("Toast notifications").size(typography::TITLE_MD);

    let input = text_input("Message to display…", &app.input)
        .on_input(Message::InputChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(360.0));

    let severity_buttons = Row::new()
        .spacing(spacing::XS)
        .push(show_button("Info", Severity::Info))
        .push(show_button("Success", Severity::Success))
        .push(show_button("Warning", Severity::Warning))
        .push(show_button("Error", Severity::Error));

    let fetch_button = button(Text::new("Fetch endpoint").size(typography::BODY))
        .on_press(Message::Fetch)
        .padding(spacing::XS);

    let endpoint_caption = Text::new(app.endpoint.clone()).size(typography::CAPTION);

    let diagnostics_caption = Text::new(format!(
        "{} diagnostic events recorded",
        app.diagnostics.event_count()
    ))
    .size(typography::CAPTION);

    let content = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(input)
            .push(severity_buttons)
            .push(fetch_button)
            .push(endpoint_caption)
            .push(diagnostics_caption),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let overlay = Toast::view_overlay(&app.manager, app.toast_title.as_str())
        .map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(overlay)
        .into()
}

fn show_button(label: &str, severity: Severity) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::Show(severity))
        .padding(spacing::XS)
        .into()
}
