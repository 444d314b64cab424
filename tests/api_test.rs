// End-to-end checks of the HTTP book source against a one-shot loopback
// server.

use books_cli::api::ApiClient;
use books_cli::config::Config;
use books_cli::{BookService, BookSource, CatalogError};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Once;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const FIXTURE: &str = include_str!("fixtures/books.json");

static BYPASS_PROXY: Once = Once::new();

/// Serve a single HTTP response and return the server URL.
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf);
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (format!("http://{addr}/books.json"), handle)
}

fn client_for(url: String) -> ApiClient {
    // Keep loopback requests away from any proxy configured on the host.
    // Set once, before the first client reads the environment.
    BYPASS_PROXY.call_once(|| {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        std::env::set_var("no_proxy", "127.0.0.1,localhost");
    });
    let config = Config {
        url,
        timeout: Some(Duration::from_secs(10)),
        ..Config::default()
    };
    ApiClient::new(&config).unwrap()
}

#[test]
fn fetches_raw_body() {
    let (url, server) = serve_once("200 OK", FIXTURE);
    let body = client_for(url).fetch().unwrap();
    server.join().unwrap();

    assert_eq!(body, FIXTURE.as_bytes());
}

#[test]
fn service_searches_over_http() {
    let (url, server) = serve_once("200 OK", FIXTURE);
    let service = BookService::new(client_for(url));
    let books = service.search_by_title("javascript").unwrap();
    server.join().unwrap();

    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Eloquent JavaScript, Second Edition",
            "Learning JavaScript Design Patterns",
        ]
    );
}

#[test]
fn error_status_is_retrieval_error() {
    let (url, server) = serve_once("503 Service Unavailable", "down for maintenance");
    let err = client_for(url).fetch().unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, CatalogError::Retrieval(_)));
    assert!(err.to_string().contains("503"), "{err}");
    assert!(err.to_string().contains("down for maintenance"), "{err}");
}

#[test]
fn html_body_is_decode_error() {
    let (url, server) = serve_once("200 OK", "<html>not a catalog</html>");
    let err = BookService::new(client_for(url)).sort_by_author().unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, CatalogError::Decode(_)));
}

#[test]
fn refused_connection_is_retrieval_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let err = client_for(format!("http://{addr}/books.json"))
        .fetch()
        .unwrap_err();

    assert!(matches!(err, CatalogError::Retrieval(_)));
}
