// SPDX-License-Identifier: MPL-2.0
//! Classification of HTTP failures into stable diagnostic categories.
//!
//! The classifier is purely observational: it never retries and never
//! changes the failure it inspects. Categories carry the labels that end
//! up in the diagnostics buffer and the console log.

use std::fmt;

use super::errors::Error;

/// Category of an intercepted HTTP failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// No response was received at all.
    Network,
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 404
    NotFound,
    /// 500
    ServerError,
    /// Any other status code.
    Http(u16),
}

impl ErrorCategory {
    /// Classifies a failure by its status code, if any.
    ///
    /// `None` means no response was received (transport-level failure).
    #[must_use]
    pub fn classify(status: Option<u16>) -> Self {
        match status {
            None => ErrorCategory::Network,
            Some(400) => ErrorCategory::BadRequest,
            Some(401) => ErrorCategory::Unauthorized,
            Some(404) => ErrorCategory::NotFound,
            Some(500) => ErrorCategory::ServerError,
            Some(code) => ErrorCategory::Http(code),
        }
    }

    /// Classifies a client error without consuming it.
    #[must_use]
    pub fn of(error: &Error) -> Self {
        Self::classify(error.status())
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Network => write!(f, "Network error: no response from server"),
            ErrorCategory::BadRequest => write!(f, "Bad request"),
            ErrorCategory::Unauthorized => write!(f, "Unauthorized access"),
            ErrorCategory::NotFound => write!(f, "Resource not found"),
            ErrorCategory::ServerError => write!(f, "Server error"),
            ErrorCategory::Http(code) => write!(f, "HTTP Error {}", code),
        }
    }
}
