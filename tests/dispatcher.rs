use riot_caller::api::http::{HttpGet, UreqDispatcher};
use riot_caller::AppError;
use serde_json::json;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Serves exactly one response and returns the raw request head.
fn one_shot_server(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];

        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });

    (base, handle)
}

fn dispatcher() -> UreqDispatcher {
    UreqDispatcher::new(Duration::from_secs(5))
}

#[test]
fn credential_goes_in_query_string() {
    let (base, server) = one_shot_server("200 OK", r#"{"id":"abc123","tier":"MASTER"}"#);
    let url = format!("{}/lol/league/v4/leagues/abc123", base);

    let body = dispatcher().get(&url, Some("RGAPI-key")).unwrap();
    assert_eq!(body, json!({ "id": "abc123", "tier": "MASTER" }));

    let request = server.join().unwrap();
    let request_line = request.lines().next().unwrap();
    assert_eq!(
        request_line,
        "GET /lol/league/v4/leagues/abc123?api_key=RGAPI-key HTTP/1.1"
    );
    assert!(!request.to_ascii_lowercase().contains("x-riot-token"));
}

#[test]
fn no_credential_no_query_param() {
    let (base, server) = one_shot_server("200 OK", "[]");
    let url = format!("{}/lol/status/v4/platform-data", base);

    let body = dispatcher().get(&url, None).unwrap();
    assert_eq!(body, json!([]));

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /lol/status/v4/platform-data HTTP/1.1"));
}

#[test]
fn non_success_status_is_service_call_error() {
    let (base, server) = one_shot_server("403 Forbidden", r#"{"status":{"status_code":403}}"#);
    let url = format!("{}/lol/league/v4/leagues/abc123", base);

    let err = dispatcher().get(&url, Some("RGAPI-key")).unwrap_err();
    server.join().unwrap();

    match err {
        AppError::ServiceCall { url: failed, cause } => {
            assert_eq!(failed, url);
            assert!(cause.contains("403"), "cause: {}", cause);
            assert!(!cause.contains("RGAPI-key"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn non_json_body_is_service_call_error() {
    let (base, server) = one_shot_server("200 OK", "<html>oops</html>");
    let url = format!("{}/lol/status/v4/platform-data", base);

    let err = dispatcher().get(&url, None).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, AppError::ServiceCall { .. }));
}

#[test]
fn connection_refused_is_service_call_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/lol/status/v4/platform-data", listener.local_addr().unwrap());
    drop(listener);

    let err = dispatcher().get(&url, Some("RGAPI-key")).unwrap_err();
    match err {
        AppError::ServiceCall { url: failed, cause } => {
            assert_eq!(failed, url);
            assert!(!cause.contains("RGAPI-key"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
