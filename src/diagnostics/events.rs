// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! Events capture what the notification presenter and the HTTP client were
//! doing when issues occurred. They are stored in a memory-bounded buffer
//! and mirrored to the console via `tracing`.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A classified HTTP failure observed by the response classifier.
    HttpFailure {
        /// Stable category label (e.g. `Bad request`, `HTTP Error 418`).
        label: String,
        /// Body snippet or transport error description.
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },

    /// A toast was presented to the user.
    ToastShown {
        /// Severity bucket of the toast.
        severity: String,
        /// The message that was displayed.
        message: String,
    },

    /// Non-critical warning.
    Warning {
        /// Brief description of the warning
        message: String,
    },

    /// Critical error.
    Error {
        /// Brief description of the error
        message: String,
    },
}
