// SPDX-License-Identifier: MPL-2.0
use iced_toasts::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use iced_toasts::http::{Client, Error, ErrorCategory};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with_handle() -> (Client, DiagnosticsHandle) {
    let handle = DiagnosticsHandle::default();
    let client = Client::new(handle.clone()).expect("failed to build client");
    (client, handle)
}

fn http_failure_labels(handle: &DiagnosticsHandle) -> Vec<String> {
    handle
        .snapshot()
        .into_iter()
        .filter_map(|event| match event {
            DiagnosticEventKind::HttpFailure { label, .. } => Some(label),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn known_status_codes_log_their_category_label() {
    let server = MockServer::start().await;
    let cases = [
        (400u16, "Bad request"),
        (401, "Unauthorized access"),
        (404, "Resource not found"),
        (500, "Server error"),
    ];

    for (status, _) in cases {
        Mock::given(method("GET"))
            .and(path(format!("/{}", status)))
            .respond_with(ResponseTemplate::new(status).set_body_string("details"))
            .mount(&server)
            .await;
    }

    let (client, handle) = client_with_handle();
    for (status, label) in cases {
        let result = client.get(&format!("{}/{}", server.uri(), status)).await;
        match result {
            Err(Error::Status {
                status: got, body, ..
            }) => {
                // The failure is re-raised unchanged: code and body preserved.
                assert_eq!(got, status);
                assert_eq!(body, "details");
            }
            other => panic!("expected a status error, got {:?}", other.map(|_| ())),
        }
        assert!(http_failure_labels(&handle).contains(&label.to_string()));
    }
}

#[tokio::test]
async fn other_status_codes_log_the_generic_label() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teapot"))
        .respond_with(ResponseTemplate::new(418).set_body_string("short and stout"))
        .mount(&server)
        .await;

    let (client, handle) = client_with_handle();
    let result = client.get(&format!("{}/teapot", server.uri())).await;

    let Err(error) = result else {
        panic!("expected a failure");
    };
    assert_eq!(ErrorCategory::of(&error), ErrorCategory::Http(418));
    assert!(http_failure_labels(&handle).contains(&"HTTP Error 418".to_string()));
}

#[tokio::test]
async fn success_passes_the_body_through_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;

    let (client, handle) = client_with_handle();
    let body = client
        .get(&format!("{}/ok", server.uri()))
        .await
        .expect("request should succeed");

    assert_eq!(body, "hello");
    assert_eq!(handle.event_count(), 0);
}

#[tokio::test]
async fn missing_response_logs_the_network_category() {
    // Nothing listens on this port; the connection is refused before any
    // response exists.
    let (client, handle) = client_with_handle();
    let result = client.get("http://127.0.0.1:1/unreachable").await;

    let Err(error) = result else {
        panic!("expected a failure");
    };
    assert!(matches!(error, Error::Network(_)));
    assert_eq!(ErrorCategory::of(&error), ErrorCategory::Network);
    assert!(http_failure_labels(&handle)
        .contains(&"Network error: no response from server".to_string()));
}
