// SPDX-License-Identifier: MPL-2.0
//! Shared handle over the diagnostic event buffer.
//!
//! The handle is cheap to clone and safe to hand to every component that
//! wants to record events (presenter, HTTP client). Events are mirrored to
//! the console through `tracing` so `RUST_LOG` controls verbosity.

use std::sync::{Arc, Mutex};

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{DiagnosticEvent, DiagnosticEventKind};

/// Cloneable handle used by components to record diagnostic events.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records a classified HTTP failure.
    pub fn log_http_failure(&self, label: impl Into<String>, detail: Option<String>) {
        let label = label.into();
        tracing::error!(%label, detail = detail.as_deref(), "http failure");
        self.record(DiagnosticEventKind::HttpFailure {
            label,
            detail,
        });
    }

    /// Records a presented toast.
    pub fn log_toast(&self, severity: impl Into<String>, message: impl Into<String>) {
        let severity = severity.into();
        let message = message.into();
        tracing::info!(%severity, %message, "toast shown");
        self.record(DiagnosticEventKind::ToastShown { severity, message });
    }

    /// Records a non-critical warning.
    pub fn log_warning(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "warning");
        self.record(DiagnosticEventKind::Warning { message });
    }

    /// Records a critical error.
    pub fn log_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(%message, "error");
        self.record(DiagnosticEventKind::Error { message });
    }

    /// Returns a snapshot of the buffered event kinds, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEventKind> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().map(|event| event.kind.clone()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.buffer.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }

    fn record(&self, kind: DiagnosticEventKind) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(DiagnosticEvent::new(kind));
        }
    }
}
