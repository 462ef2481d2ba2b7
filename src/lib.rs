// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides severity-classified toast notifications and an
//! HTTP client wrapper that classifies failures, built with the Iced GUI
//! framework.
//!
//! Toasts are inserted into lazily created rendering surfaces (errors get
//! their own high-visibility surface), shown for a severity-dependent
//! duration, then hidden and detached. When the visual toolkit is absent or
//! fails, the presenter degrades to a blocking alert dialog.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod ui;
