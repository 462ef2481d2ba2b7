// SPDX-License-Identifier: MPL-2.0
//! Error types for the classified HTTP client.

/// Errors that can occur when making HTTP requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP client itself could not be constructed.
    #[error("Failed to construct HTTP client")]
    Build(#[source] reqwest::Error),
    /// The request produced no response at all (DNS, connect, timeout).
    #[error("Network error: no response from server")]
    Network(#[source] reqwest::Error),
    /// A response arrived but its body could not be read.
    #[error("Failed to read response body (status {status})")]
    Body { status: u16, detail: String },
    /// The server answered with a non-success status.
    #[error("Request failed with status {status}")]
    Status { status: u16, body: String },
}

impl Error {
    /// The status code carried by this error, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } | Error::Body { status, .. } => Some(*status),
            Error::Build(_) | Error::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_read_failure_keeps_the_received_status() {
        let error = Error::Body {
            status: 500,
            detail: "stream cut short".to_string(),
        };
        assert_eq!(error.status(), Some(500));
        assert_eq!(
            format!("{}", error),
            "Failed to read response body (status 500)"
        );
    }

    #[test]
    fn status_error_exposes_its_code() {
        let error = Error::Status {
            status: 404,
            body: String::new(),
        };
        assert_eq!(error.status(), Some(404));
    }
}
