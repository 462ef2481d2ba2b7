// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::{self, Severity};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The demo message input changed.
    InputChanged(String),
    /// Present the typed message with the given severity.
    Show(Severity),
    /// Notification lifecycle messages (dismiss, timer expiries).
    Notification(notifications::NotificationMessage),
    /// Fire a request against the configured endpoint.
    Fetch,
    /// Result of the demo request, reduced to a displayable form.
    FetchCompleted(Result<usize, String>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional endpoint the demo "fetch" button requests.
    pub endpoint: Option<String>,
}
