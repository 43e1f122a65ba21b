//! Tests for the fetch session against a local HTTP listener.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use bench_ingest::{FetchConfig, IngestError, fetch_records};
use bench_model::Category;

const DATA_BODY: &str = r#"{"data": [
    {"id": "1", "name": "Intel Core i7-9700K", "speed": "3600 MHz"},
    {"id": "2", "name": "AMD Ryzen 7 5800X", "speed": "3800 MHz"}
]}"#;

fn read_request(stream: &mut TcpStream) -> String {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut buf).unwrap();
        if read == 0 {
            break;
        }
        request.extend_from_slice(&buf[..read]);
    }
    String::from_utf8_lossy(&request).into_owned()
}

fn write_response(stream: &mut TcpStream, status: &str, extra_headers: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {status}\r\n{extra_headers}Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).unwrap();
    let _ = stream.flush();
}

/// Serves one response per `(status, headers, body)` entry and returns the
/// raw requests it received, lowercased.
fn spawn_site(
    responses: Vec<(&'static str, &'static str, &'static str)>,
) -> (String, thread::JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for (status, headers, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            requests.push(read_request(&mut stream).to_lowercase());
            write_response(&mut stream, status, headers, body);
        }
        requests
    });
    (format!("http://{addr}"), handle)
}

fn local_config(base_url: &str) -> FetchConfig {
    FetchConfig::default()
        .with_timeout(Duration::from_secs(5))
        .with_base_url(base_url)
}

#[test]
fn fetch_opens_session_then_downloads_data() {
    let (base_url, handle) = spawn_site(vec![
        (
            "200 OK",
            "Set-Cookie: PHPSESSID=abc123; Path=/\r\n",
            "<html>mega page</html>",
        ),
        ("200 OK", "Content-Type: application/json\r\n", DATA_BODY),
    ]);

    let records = fetch_records(Category::Cpu, &local_config(&base_url)).expect("fetch records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name(), Some("AMD Ryzen 7 5800X"));

    let requests = handle.join().expect("server thread");
    assert_eq!(requests.len(), 2);
    assert!(requests[0].starts_with("get /cpu_mega_page.html "));
    assert!(requests[1].starts_with("get /data/?_="));

    let data_request = &requests[1];
    let referer = format!("referer: {}/cpu_mega_page.html", base_url.to_lowercase());
    assert!(data_request.contains(&referer), "{data_request}");
    assert!(data_request.contains("x-requested-with: xmlhttprequest"));
    assert!(data_request.contains("cookie: phpsessid=abc123"));
    assert!(data_request.contains("accept: application/json, text/javascript, */*; q=0.01"));
}

#[test]
fn non_success_status_is_reported_with_url() {
    let (base_url, handle) = spawn_site(vec![("503 Service Unavailable", "", "busy")]);

    let err = fetch_records(Category::Gpu, &local_config(&base_url)).unwrap_err();
    match err {
        IngestError::Status { url, status } => {
            assert_eq!(status, 503);
            assert_eq!(url, format!("{base_url}/GPU_mega_page.html"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    handle.join().expect("server thread");
}

#[test]
fn malformed_data_body_is_a_json_error() {
    let (base_url, handle) = spawn_site(vec![
        ("200 OK", "", "<html>mega page</html>"),
        ("200 OK", "", "<html>blocked</html>"),
    ]);

    let err = fetch_records(Category::Storage, &local_config(&base_url)).unwrap_err();
    assert!(matches!(err, IngestError::Json(_)));
    handle.join().expect("server thread");
}
