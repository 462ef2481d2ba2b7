// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting in-memory activity records.
//!
//! This module provides infrastructure for capturing diagnostic events
//! (classified HTTP failures, presented toasts, warnings, errors) in a
//! memory-bounded circular buffer shared through a cloneable handle.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Enum representing different types of diagnostic events
//! - [`DiagnosticsHandle`]: Cloneable recording handle shared across components

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsHandle;
pub use events::{DiagnosticEvent, DiagnosticEventKind};
