// SPDX-License-Identifier: MPL-2.0
//! The seam between the presenter and the visual backend.
//!
//! `show`/`hide` are fallible so the presenter can fall back to a blocking
//! alert when the backend misbehaves; tests substitute failing or recording
//! implementations.

use std::fmt;

use super::notification::NotificationId;

/// Error raised by a toolkit backend.
#[derive(Debug, Clone)]
pub struct ToolkitError(pub String);

impl fmt::Display for ToolkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toolkit error: {}", self.0)
    }
}

/// Visual backend for toast rendering.
pub trait Toolkit: fmt::Debug {
    /// Requests the backend render/show the toast.
    fn show(&mut self, id: NotificationId) -> Result<(), ToolkitError>;

    /// Requests the backend hide the toast (start of the removal grace).
    fn hide(&mut self, id: NotificationId) -> Result<(), ToolkitError>;
}

/// Default backend: the Iced overlay renders directly from presenter state,
/// so show/hide cannot fail.
#[derive(Debug, Default)]
pub struct OverlayToolkit;

impl Toolkit for OverlayToolkit {
    fn show(&mut self, _id: NotificationId) -> Result<(), ToolkitError> {
        Ok(())
    }

    fn hide(&mut self, _id: NotificationId) -> Result<(), ToolkitError> {
        Ok(())
    }
}

/// Synchronous blocking alert, the degraded-mode fallback.
pub trait Alert: fmt::Debug {
    /// Blocks until the user dismisses the dialog.
    fn alert(&self, message: &str);
}

/// Production alert backed by a native modal message dialog.
#[derive(Debug)]
pub struct BlockingAlert {
    title: String,
}

impl BlockingAlert {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Alert for BlockingAlert {
    fn alert(&self, message: &str) {
        rfd::MessageDialog::new()
            .set_title(&self.title)
            .set_description(message)
            .set_level(rfd::MessageLevel::Warning)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
