// SPDX-License-Identifier: MPL-2.0
//! Update logic: routes messages and turns presenter effects into timers.
//!
//! Every [`Effect`] becomes a fire-and-forget deferred task; there is no
//! cancellation token, so the hide/remove sequence always runs to
//! completion and relies on idempotent removal.

use super::{App, Message};
use crate::ui::notifications::{Effect, NotificationMessage, Severity};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::InputChanged(value) => {
            app.input = value;
            Task::none()
        }
        Message::Show(severity) => {
            let text = if app.input.trim().is_empty() {
                format!("This is a {} notification", severity.label())
            } else {
                app.input.clone()
            };
            schedule(app.manager.show(text, severity))
        }
        Message::Notification(notification_message) => {
            schedule(app.manager.handle_message(&notification_message))
        }
        Message::Fetch => match app.http.clone() {
            Some(client) => {
                let url = app.endpoint.clone();
                Task::perform(
                    async move {
                        client
                            .get(&url)
                            .await
                            .map(|body| body.len())
                            .map_err(|e| e.to_string())
                    },
                    Message::FetchCompleted,
                )
            }
            None => schedule(app.manager.show("HTTP client unavailable", Severity::Error)),
        },
        Message::FetchCompleted(Ok(bytes)) => schedule(
            app.manager
                .show(format!("Fetched {} bytes", bytes), Severity::Success),
        ),
        Message::FetchCompleted(Err(error)) => schedule(app.manager.show(error, Severity::Error)),
    }
}

/// Schedules presenter effects as deferred tasks.
fn schedule(effects: Vec<Effect>) -> Task<Message> {
    Task::batch(effects.into_iter().map(|effect| match effect {
        Effect::ScheduleHide { id, after } => Task::perform(tokio::time::sleep(after), move |_| {
            Message::Notification(NotificationMessage::HideElapsed(id))
        }),
        Effect::ScheduleRemoval { id, after } => {
            Task::perform(tokio::time::sleep(after), move |_| {
                Message::Notification(NotificationMessage::RemoveElapsed(id))
            })
        }
    }))
}
