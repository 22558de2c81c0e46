//! Integration tests driving the client SDK against a live server.
//!
//! The server binds an ephemeral port on the loopback interface, so the
//! full client -> socket -> router path is exercised.

use tokio::net::TcpListener;

use userpay_client::{ClientError, UserpayClient};
use userpay_hex::{LookupService, inbound::HttpServer};

/// Spawns the API on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = HttpServer::new(LookupService::new()).router();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_hello_and_health() {
    let client = UserpayClient::new(spawn_server().await);

    assert_eq!(client.hello().await.unwrap(), "Hello World");
    assert!(client.health().await.unwrap());
}

#[tokio::test]
async fn test_payment_summary_round_trip() {
    let client = UserpayClient::new(spawn_server().await);

    let without_filter = client.payment_summary("42", None).await.unwrap();
    assert_eq!(without_filter, "User ID: 42, Filter: undefined");

    let with_filter = client
        .payment_summary("42", Some("recent".to_string()))
        .await
        .unwrap();
    assert_eq!(with_filter, "User ID: 42, Filter: recent");
}

#[tokio::test]
async fn test_payment_summary_encodes_filter() {
    let client = UserpayClient::new(spawn_server().await);

    // Spaces survive the query-string round trip.
    let body = client
        .payment_summary("42", Some("last week".to_string()))
        .await
        .unwrap();

    assert_eq!(body, "User ID: 42, Filter: last week");
}

#[tokio::test]
async fn test_user_routes() {
    let client = UserpayClient::new(spawn_server().await);

    assert_eq!(client.users_index().await.unwrap(), "Users index");
    assert_eq!(client.user("alice").await.unwrap(), "User ID: alice");
}

#[tokio::test]
async fn test_unmatched_path_surfaces_as_api_error() {
    let client = UserpayClient::new(spawn_server().await);

    // A slash inside the ID pushes the request off every route.
    let result = client.payment_summary("a/b", None).await;

    match result {
        Err(ClientError::Api { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected 404 Api error, got {:?}", other.map(|_| ())),
    }
}
