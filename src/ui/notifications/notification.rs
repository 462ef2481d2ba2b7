// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum, and
//! the lifecycle `Phase` tracked for every toast.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Unique identifier for a notification.
///
/// Derived from the creation time in milliseconds, with a monotonic counter
/// in the low bits as a tiebreaker for notifications created within the
/// same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self((millis << 16) | (seq & 0xFFFF))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (neutral/dark header).
    #[default]
    Info,
    /// Operation completed successfully (green header).
    Success,
    /// Warning that doesn't block operation (yellow header).
    Warning,
    /// Error requiring attention (red header, longer display, distinct surface).
    Error,
}

impl Severity {
    /// Returns the header accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::GRAY_700,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the icon glyph paired with this severity.
    #[must_use]
    pub fn glyph(&self) -> char {
        match self {
            Severity::Info => 'ℹ',
            Severity::Success => '✔',
            Severity::Warning => '⚠',
            Severity::Error => '✖',
        }
    }

    /// Returns the lowercase label used in logs and diagnostics.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Display and removal timings for the presenter.
///
/// Errors stay visible longer than everything else; the removal grace is
/// the fixed delay between the hide request and detaching the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    /// Display duration for `Severity::Error`.
    pub error: Duration,
    /// Display duration for every other severity.
    pub default: Duration,
    /// Delay between hide and removal.
    pub removal_grace: Duration,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            error: Duration::from_millis(8000),
            default: Duration::from_millis(5000),
            removal_grace: Duration::from_millis(500),
        }
    }
}

impl Durations {
    /// Returns the display duration for the given severity.
    #[must_use]
    pub fn display(&self, severity: Severity) -> Duration {
        match severity {
            Severity::Error => self.error,
            _ => self.default,
        }
    }
}

/// Lifecycle phase of an inserted notification.
///
/// Removal is not a phase: a removed notification no longer exists in any
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted into a surface, show not yet requested.
    Inserted,
    /// Shown by the toolkit; the hide timer is running.
    Shown,
    /// Hide requested; the removal grace timer is running.
    Hiding,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines color, duration, and surface bucket).
    severity: Severity,
    /// The message text displayed in the toast body.
    message: String,
    /// When this notification was created.
    created_at: Instant,
    /// Current lifecycle phase.
    phase: Phase,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            phase: Phase::Inserted,
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}
