//! Grinex rate source against a local one-shot HTTP server.

mod support;

use std::sync::Arc;

use kursbot::adapter::outbound::grinex::GrinexRates;
use kursbot::application::message::{RATE_BUTTON, RATE_ERROR_PREFIX};
use kursbot::application::{process_event, MessageRouter};
use kursbot::domain::RateSnapshot;
use kursbot::error::RateError;
use kursbot::port::{InboundEvent, RateSource};
use rust_decimal_macros::dec;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one HTTP response and return the endpoint URL.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/rates?offset=0")
}

/// Endpoint on a local port that nothing listens on.
async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    format!("http://{addr}/rates?offset=0")
}

#[tokio::test]
async fn fetch_extracts_pair_of_interest() {
    let url = serve_once(
        "200 OK",
        r#"{"usdtrub":{"sell":"90.1","buy":"89.9"},"usdta7a5":{"sell":"81.00","buy":"80.00"}}"#,
    )
    .await;

    let snapshot = GrinexRates::with_endpoint(url).fetch().await.unwrap();
    assert_eq!(snapshot, RateSnapshot::new(dec!(80.00), dec!(81.00)));
}

#[tokio::test]
async fn fetch_missing_pair_is_unavailable() {
    let url = serve_once("200 OK", r#"{"usdtrub":{"sell":"90.1","buy":"89.9"}}"#).await;

    let result = GrinexRates::with_endpoint(url).fetch().await;
    assert_eq!(result, Err(RateError::Unavailable));
}

#[tokio::test]
async fn fetch_non_numeric_quote_is_parse_error() {
    let url = serve_once("200 OK", r#"{"usdta7a5":{"sell":"81.00","buy":"abc"}}"#).await;

    let result = GrinexRates::with_endpoint(url).fetch().await;
    assert!(matches!(result, Err(RateError::Parse(_))));
}

#[tokio::test]
async fn fetch_server_error_is_network_error() {
    let url = serve_once("503 Service Unavailable", "{}").await;

    let result = GrinexRates::with_endpoint(url).fetch().await;
    assert!(matches!(result, Err(RateError::Network(_))));
}

#[tokio::test]
async fn fetch_overflowing_quote_is_parse_error() {
    let url = serve_once(
        "200 OK",
        r#"{"usdta7a5":{"buy":"80","sell":"79228162514264337593543950335"}}"#,
    )
    .await;

    let result = GrinexRates::with_endpoint(url).fetch().await;
    assert!(matches!(result, Err(RateError::Parse(_))));
}

#[tokio::test]
async fn refused_connection_error_names_the_cause() {
    let url = closed_endpoint().await;

    let Err(RateError::Network(message)) = GrinexRates::with_endpoint(url).fetch().await else {
        panic!("expected a network error");
    };
    assert!(message.to_lowercase().contains("connect"), "{message}");
}

#[tokio::test]
async fn refused_connection_reply_carries_the_cause() {
    let url = closed_endpoint().await;
    let router = MessageRouter::new(Arc::new(GrinexRates::with_endpoint(url)));
    let transport = support::transport::RecordingTransport::new();

    process_event(&router, &transport, InboundEvent::text(42, RATE_BUTTON)).await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.starts_with(RATE_ERROR_PREFIX));
    assert!(sent[0].text.to_lowercase().contains("connect"), "{}", sent[0].text);
    assert!(!sent[0].text.contains("RUB"));
}
