// SPDX-License-Identifier: MPL-2.0
//! HTTP client wrapper that classifies every failure before re-raising it.
//!
//! The wrapper is registered once during application bootstrap and sits
//! between callers and `reqwest`. Successful responses pass through
//! untouched; failures are classified, recorded in the diagnostics buffer,
//! and returned to the caller unchanged. No retries, no backoff.

use std::time::Duration;

use crate::diagnostics::DiagnosticsHandle;

use super::classifier::ErrorCategory;
use super::errors::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client with response classification.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    diagnostics: DiagnosticsHandle,
}

impl Client {
    /// Builds the shared client. Call once during application bootstrap.
    pub fn new(diagnostics: DiagnosticsHandle) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Build(e)
            })?;
        Ok(Self { http, diagnostics })
    }

    /// Sends a GET request and returns the response body on success.
    ///
    /// On failure the error is classified and logged, then returned to the
    /// caller unchanged so component-specific handling still applies.
    pub async fn get(&self, url: &str) -> Result<String, Error> {
        let resp = match self.http.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("API Error: {}", e);
                let error = Error::Network(e);
                self.observe(&error);
                return Err(error);
            }
        };

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to read response body: {}", e);
                // A response did arrive, so keep its status for classification.
                let error = Error::Body {
                    status: status.as_u16(),
                    detail: e.to_string(),
                };
                self.observe(&error);
                return Err(error);
            }
        };

        if !status.is_success() {
            let error = Error::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            };
            self.observe(&error);
            return Err(error);
        }

        Ok(body)
    }

    /// Emits the diagnostic record for a failure without altering it.
    fn observe(&self, error: &Error) {
        let category = ErrorCategory::of(error);
        let detail = match error {
            Error::Status { body, .. } if !body.is_empty() => Some(body.clone()),
            Error::Status { .. } => None,
            Error::Body { detail, .. } => Some(detail.clone()),
            Error::Build(e) | Error::Network(e) => Some(e.to_string()),
        };
        self.diagnostics.log_http_failure(category.to_string(), detail);
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so the cut never splits a code point.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_limits_long_bodies() {
        let long = "x".repeat(5000);
        let truncated = truncate_body(&long);
        assert!(truncated.len() < long.len());
        assert!(truncated.ends_with("...[truncated]"));
    }

    #[test]
    fn truncate_body_never_splits_a_multibyte_character() {
        // 'é' straddles the 2000-byte cutoff (bytes 1999..2001).
        let body = format!("{}é{}", "x".repeat(1999), "y".repeat(100));
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("...[truncated]"));
        assert!(!truncated.contains('é'));
        assert!(truncated.starts_with(&"x".repeat(1999)));
    }

    #[test]
    fn truncate_body_keeps_a_whole_multibyte_character_before_the_cutoff() {
        let body = format!("{}é{}", "x".repeat(1998), "y".repeat(100));
        let truncated = truncate_body(&body);

        assert!(truncated.contains('é'));
        assert!(truncated.ends_with("...[truncated]"));
    }
}
