// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens and the toast notification system.

pub mod design_tokens;
pub mod notifications;
