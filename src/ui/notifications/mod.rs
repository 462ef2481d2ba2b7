// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction, then hide and detach on their own.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels and
//!   lifecycle phases
//! - [`surface`] - Lazily created rendering surfaces, one per placement bucket
//! - [`toolkit`] - Fallible seam to the visual backend, plus the blocking
//!   alert fallback
//! - [`manager`] - `Manager` driving the per-toast lifecycle and returning
//!   scheduling effects
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{Manager, Severity};
//!
//! let mut manager = Manager::new();
//!
//! // Present a message; schedule the returned effects as timers.
//! let effects = manager.show("Saved successfully", Severity::Success);
//!
//! // In your view function, render the toast overlay
//! let overlay = Toast::view_overlay(&manager, "My App").map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Display duration: 8s for errors, 5s for everything else, plus a 500ms
//!   removal grace after hide
//! - Placement: bottom-right for info/success/warning, top-center for errors
//! - No cancellation: scheduled hide/remove timers always run; removal is
//!   idempotent so manual dismissal stays safe

mod manager;
mod notification;
mod surface;
mod toast;
mod toolkit;

pub use manager::{Effect, Manager, Message as NotificationMessage};
pub use notification::{Durations, Notification, NotificationId, Phase, Severity};
pub use surface::{Surface, SurfaceBucket, Surfaces};
pub use toast::Toast;
pub use toolkit::{Alert, BlockingAlert, OverlayToolkit, Toolkit, ToolkitError};
