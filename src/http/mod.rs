// SPDX-License-Identifier: MPL-2.0
//! Classified HTTP client.
//!
//! [`Client`] wraps `reqwest` with an observational response classifier:
//! every failure is mapped to an [`ErrorCategory`], logged, and re-raised
//! unchanged. Registration happens explicitly at bootstrap (the application
//! constructs the client and hands it to whoever needs it) rather than as
//! an import-time side effect.

mod classifier;
mod client;
mod errors;

pub use classifier::ErrorCategory;
pub use client::Client;
pub use errors::Error;
