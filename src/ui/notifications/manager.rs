// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the rendering surfaces and drives each toast through
//! `Inserted → Shown → Hiding → removed`. It never sleeps itself: timing
//! comes back as [`Effect`]s that the application layer turns into deferred
//! tasks. There is no cancellation; once scheduled, the hide/remove
//! sequence runs to completion and relies on removal being idempotent.

use super::notification::{Durations, Notification, NotificationId, Phase, Severity};
use super::surface::{SurfaceBucket, Surfaces};
use super::toolkit::{Alert, BlockingAlert, OverlayToolkit, Toolkit};
use crate::diagnostics::DiagnosticsHandle;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (user clicked the close button).
    Dismiss(NotificationId),
    /// The display duration for a toast ran out.
    HideElapsed(NotificationId),
    /// The removal grace after hide ran out.
    RemoveElapsed(NotificationId),
}

/// Deferred work requested by the presenter.
///
/// The application layer schedules each effect as a fire-and-forget timer
/// feeding the matching [`Message`] back into the update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Request a hide after the toast's display duration.
    ScheduleHide {
        id: NotificationId,
        after: Duration,
    },
    /// Detach the toast once the removal grace has passed.
    ScheduleRemoval {
        id: NotificationId,
        after: Duration,
    },
}

/// Manages the rendering surfaces and the per-toast lifecycle.
#[derive(Debug)]
pub struct Manager {
    /// Lazily created surfaces, one per bucket.
    surfaces: Surfaces,
    /// Visual backend; `None` means the toolkit is unavailable.
    toolkit: Option<Box<dyn Toolkit>>,
    /// Blocking alert used when the toolkit is absent or show fails.
    alert: Box<dyn Alert>,
    /// Display/removal timings.
    durations: Durations,
    /// Optional diagnostics handle for recording warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            surfaces: Surfaces::new(),
            toolkit: Some(Box::new(OverlayToolkit)),
            alert: Box::new(BlockingAlert::new("Notifications")),
            durations: Durations::default(),
            diagnostics: None,
        }
    }
}

impl Manager {
    /// Creates a manager with the default overlay toolkit and native alert.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the display/removal timings.
    #[must_use]
    pub fn with_durations(mut self, durations: Durations) -> Self {
        self.durations = durations;
        self
    }

    /// Replaces the visual backend. `None` models an unavailable toolkit.
    #[must_use]
    pub fn with_toolkit(mut self, toolkit: Option<Box<dyn Toolkit>>) -> Self {
        self.toolkit = toolkit;
        self
    }

    /// Replaces the blocking alert implementation.
    #[must_use]
    pub fn with_alert(mut self, alert: Box<dyn Alert>) -> Self {
        self.alert = alert;
        self
    }

    /// Sets the diagnostics handle for recording warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Presents a message with the given severity.
    ///
    /// Resolves (lazily creating) the surface for the severity's bucket,
    /// inserts a toast, asks the toolkit to show it, and returns the hide
    /// timer to schedule. In degraded mode (toolkit absent or show failed)
    /// the user gets a blocking alert instead and no timer is returned.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> Vec<Effect> {
        let message = message.into();

        let Some(toolkit) = self.toolkit.as_mut() else {
            tracing::info!(
                severity = severity.label(),
                %message,
                "toolkit unavailable, falling back to blocking alert"
            );
            self.alert.alert(&message);
            return Vec::new();
        };

        let bucket = SurfaceBucket::for_severity(severity);
        let notification = Notification::new(severity, message.clone());
        let id = notification.id();
        self.surfaces.get_or_create(bucket).insert(notification);

        // The message is logged whether or not rendering succeeds below.
        if let Some(handle) = &self.diagnostics {
            handle.log_toast(severity.label(), &message);
            match severity {
                Severity::Warning => handle.log_warning(&message),
                Severity::Error => handle.log_error(&message),
                Severity::Info | Severity::Success => {}
            }
        } else {
            tracing::info!(severity = severity.label(), %message, "toast shown");
        }

        match toolkit.show(id) {
            Ok(()) => {
                if let Some(notification) = self.surfaces.find_mut(id) {
                    notification.set_phase(Phase::Shown);
                }
                vec![Effect::ScheduleHide {
                    id,
                    after: self.durations.display(severity),
                }]
            }
            Err(e) => {
                tracing::error!("Failed to show toast: {}", e);
                self.alert.alert(&message);
                // Best-effort cleanup; a missing element is fine.
                self.surfaces.remove(id);
                Vec::new()
            }
        }
    }

    /// Handles the expiry of a toast's display duration.
    ///
    /// A hide failure is swallowed; removal is scheduled regardless, and
    /// it is scheduled even if the toast was already dismissed manually.
    pub fn hide_elapsed(&mut self, id: NotificationId) -> Vec<Effect> {
        if let Some(toolkit) = self.toolkit.as_mut() {
            if let Err(e) = toolkit.hide(id) {
                tracing::warn!("Failed to hide toast: {}", e);
            }
        }
        if let Some(notification) = self.surfaces.find_mut(id) {
            notification.set_phase(Phase::Hiding);
        }
        vec![Effect::ScheduleRemoval {
            id,
            after: self.durations.removal_grace,
        }]
    }

    /// Detaches a toast after the removal grace. Idempotent.
    pub fn remove_elapsed(&mut self, id: NotificationId) {
        if !self.surfaces.remove(id) {
            tracing::debug!(?id, "toast already removed");
        }
    }

    /// Dismisses a notification immediately (close button).
    ///
    /// The already-scheduled hide/remove timers keep running; they land on
    /// the idempotent no-op paths.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.surfaces.remove(id)
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) -> Vec<Effect> {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
                Vec::new()
            }
            Message::HideElapsed(id) => self.hide_elapsed(*id),
            Message::RemoveElapsed(id) => {
                self.remove_elapsed(*id);
                Vec::new()
            }
        }
    }

    /// Returns the surface registry for rendering.
    #[must_use]
    pub fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    /// Returns whether any toast is currently inserted.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.surfaces.toast_count() > 0
    }

    /// Returns the configured timings.
    #[must_use]
    pub fn durations(&self) -> Durations {
        self.durations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::toolkit::ToolkitError;
    use std::sync::{Arc, Mutex};

    /// Alert spy recording every message it was asked to display.
    #[derive(Debug, Default, Clone)]
    struct AlertSpy {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl Alert for AlertSpy {
        fn alert(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    impl AlertSpy {
        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    /// Toolkit whose show always fails.
    #[derive(Debug)]
    struct FailingToolkit;

    impl Toolkit for FailingToolkit {
        fn show(&mut self, _id: NotificationId) -> Result<(), ToolkitError> {
            Err(ToolkitError("renderer gone".to_string()))
        }

        fn hide(&mut self, _id: NotificationId) -> Result<(), ToolkitError> {
            Err(ToolkitError("renderer gone".to_string()))
        }
    }

    fn manager_with_spy() -> (Manager, AlertSpy) {
        let spy = AlertSpy::default();
        let manager = Manager::new().with_alert(Box::new(spy.clone()));
        (manager, spy)
    }

    #[test]
    fn show_inserts_into_one_lazily_created_surface() {
        let (mut manager, _spy) = manager_with_spy();

        manager.show("x", Severity::Info);
        manager.show("x", Severity::Info);

        assert_eq!(manager.surfaces().surface_count(), 1);
        assert_eq!(manager.surfaces().toast_count(), 2);
    }

    #[test]
    fn error_toasts_get_their_own_surface() {
        let (mut manager, _spy) = manager_with_spy();

        manager.show("ok", Severity::Success);
        manager.show("boom", Severity::Error);

        assert_eq!(manager.surfaces().surface_count(), 2);
        assert_eq!(
            manager
                .surfaces()
                .get(SurfaceBucket::Critical)
                .map(|s| s.len()),
            Some(1)
        );
    }

    #[test]
    fn show_schedules_hide_with_severity_duration() {
        let (mut manager, _spy) = manager_with_spy();

        let effects = manager.show("boom", Severity::Error);
        assert!(matches!(
            effects.as_slice(),
            [Effect::ScheduleHide { after, .. }] if *after == Duration::from_millis(8000)
        ));

        let effects = manager.show("ok", Severity::Success);
        assert!(matches!(
            effects.as_slice(),
            [Effect::ScheduleHide { after, .. }] if *after == Duration::from_millis(5000)
        ));
    }

    #[test]
    fn hide_elapsed_schedules_removal_after_grace() {
        let (mut manager, _spy) = manager_with_spy();

        let effects = manager.show("hello", Severity::Info);
        let [Effect::ScheduleHide { id, .. }] = effects.as_slice() else {
            panic!("expected a hide effect");
        };

        let effects = manager.hide_elapsed(*id);
        assert!(matches!(
            effects.as_slice(),
            [Effect::ScheduleRemoval { after, .. }] if *after == Duration::from_millis(500)
        ));
    }

    #[test]
    fn removal_is_idempotent_after_manual_dismiss() {
        let (mut manager, _spy) = manager_with_spy();

        let effects = manager.show("bye", Severity::Info);
        let [Effect::ScheduleHide { id, .. }] = effects.as_slice() else {
            panic!("expected a hide effect");
        };

        assert!(manager.dismiss(*id));
        // The scheduled sequence still runs; both steps must be harmless.
        manager.hide_elapsed(*id);
        manager.remove_elapsed(*id);
        manager.remove_elapsed(*id);

        assert_eq!(manager.surfaces().toast_count(), 0);
    }

    #[test]
    fn absent_toolkit_alerts_and_installs_nothing() {
        let spy = AlertSpy::default();
        let mut manager = Manager::new()
            .with_toolkit(None)
            .with_alert(Box::new(spy.clone()));

        let effects = manager.show("hi", Severity::Warning);

        assert!(effects.is_empty());
        assert_eq!(spy.messages(), vec!["hi".to_string()]);
        assert_eq!(manager.surfaces().surface_count(), 0);
        assert_eq!(manager.surfaces().toast_count(), 0);
    }

    #[test]
    fn show_failure_alerts_and_removes_the_element() {
        let spy = AlertSpy::default();
        let mut manager = Manager::new()
            .with_toolkit(Some(Box::new(FailingToolkit)))
            .with_alert(Box::new(spy.clone()));

        let effects = manager.show("broken", Severity::Info);

        assert!(effects.is_empty());
        assert_eq!(spy.messages(), vec!["broken".to_string()]);
        // The surface stays (created lazily, never destroyed) but is empty.
        assert_eq!(manager.surfaces().surface_count(), 1);
        assert_eq!(manager.surfaces().toast_count(), 0);
    }

    #[test]
    fn hide_failure_still_schedules_removal() {
        let spy = AlertSpy::default();
        let mut manager = Manager::new()
            .with_toolkit(Some(Box::new(FailingToolkit)))
            .with_alert(Box::new(spy.clone()));

        // Use an id that was never shown; hide will fail, removal proceeds.
        let id = Notification::new(Severity::Info, "x").id();
        let effects = manager.hide_elapsed(id);

        assert!(matches!(
            effects.as_slice(),
            [Effect::ScheduleRemoval { .. }]
        ));
    }

    #[test]
    fn warnings_and_errors_reach_the_diagnostics_buffer() {
        use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};

        let (mut manager, _spy) = manager_with_spy();
        let handle = DiagnosticsHandle::default();
        manager.set_diagnostics(handle.clone());

        manager.show("careful", Severity::Warning);
        manager.show("broken", Severity::Error);

        let events = handle.snapshot();
        assert!(events
            .iter()
            .any(|e| matches!(e, DiagnosticEventKind::Warning { message } if message == "careful")));
        assert!(events
            .iter()
            .any(|e| matches!(e, DiagnosticEventKind::Error { message } if message == "broken")));
    }

    #[test]
    fn handle_message_routes_dismiss() {
        let (mut manager, _spy) = manager_with_spy();
        let effects = manager.show("x", Severity::Info);
        let [Effect::ScheduleHide { id, .. }] = effects.as_slice() else {
            panic!("expected a hide effect");
        };

        let follow_up = manager.handle_message(&Message::Dismiss(*id));
        assert!(follow_up.is_empty());
        assert_eq!(manager.surfaces().toast_count(), 0);
    }
}
