//! Tests for metadata pinning against a local mock of the Pinata API.

use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
use loresmith_core::NewBackstory;
use loresmith_database::InMemoryStore;
use loresmith_interface::{BackstoryRepository, MetadataPinner};
use loresmith_ipfs::{MetadataRequest, PinataClient, pin_token_metadata};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Spawn a mock Pinata API and return its base URL.
async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Mock server failed");
    });
    format!("http://{addr}")
}

/// Mock that records the pinned body and answers with a fixed CID.
fn recording_router(seen: Arc<Mutex<Option<Value>>>) -> Router {
    Router::new().route(
        "/pinning/pinJSONToIPFS",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                assert_eq!(headers["authorization"], "Bearer test-jwt");
                *seen.lock().unwrap() = Some(body);
                Json(json!({
                    "IpfsHash": "bafytestcid",
                    "PinSize": 321,
                    "Timestamp": "2025-01-15T00:00:00Z"
                }))
            }
        }),
    )
}

#[tokio::test]
async fn test_pin_json_returns_cid_uri_and_gateway() -> anyhow::Result<()> {
    let seen = Arc::new(Mutex::new(None));
    let url = spawn_mock(recording_router(seen.clone())).await;

    let client = PinataClient::new("test-jwt")
        .with_api_url(url)
        .with_gateway_url("https://gw.example/ipfs");
    let pinned = client.pin_json("doc", &json!({"hello": "world"})).await?;

    assert_eq!(pinned.cid, "bafytestcid");
    assert_eq!(pinned.uri, "ipfs://bafytestcid");
    assert_eq!(pinned.gateway_url, "https://gw.example/ipfs/bafytestcid");

    let body = seen.lock().unwrap().clone().expect("request body");
    assert_eq!(body["pinataContent"]["hello"], "world");
    assert_eq!(body["pinataMetadata"]["name"], "doc");
    Ok(())
}

#[tokio::test]
async fn test_pin_json_surfaces_api_errors() {
    let router = Router::new().route(
        "/pinning/pinJSONToIPFS",
        post(|| async { (StatusCode::UNAUTHORIZED, "invalid jwt") }),
    );
    let url = spawn_mock(router).await;

    let client = PinataClient::new("bad-jwt").with_api_url(url);
    let err = client.pin_json("doc", &json!({})).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("401"), "unexpected error: {message}");
    assert!(message.contains("invalid jwt"));
}

#[tokio::test]
async fn test_token_metadata_defaults_to_active_backstory() -> anyhow::Result<()> {
    let seen = Arc::new(Mutex::new(None));
    let url = spawn_mock(recording_router(seen.clone())).await;
    let client = PinataClient::new("test-jwt").with_api_url(url);

    let store = InMemoryStore::new();
    store
        .insert_backstory(NewBackstory {
            token_id: "7".into(),
            backstory: "Born under a red moon.".into(),
            prompt_version: Some(1),
        })
        .await?;

    let mut request = MetadataRequest {
        token_id: "7".into(),
        image: Some("ipfs://bafyimage".into()),
        ..Default::default()
    };
    request.traits.insert("Class".into(), "Ranger".into());

    let pinned = pin_token_metadata(&store, &client, &request).await?;
    assert_eq!(pinned.uri, "ipfs://bafytestcid");

    let body = seen.lock().unwrap().clone().expect("request body");
    let content = &body["pinataContent"];
    assert_eq!(content["name"], "#7");
    assert_eq!(content["description"], "Born under a red moon.");
    assert_eq!(content["attributes"][0]["trait_type"], "Class");
    assert_eq!(body["pinataMetadata"]["name"], "token-7-metadata");
    Ok(())
}

#[tokio::test]
async fn test_empty_token_id_is_rejected_before_pinning() {
    let client = PinataClient::new("test-jwt").with_api_url("http://127.0.0.1:9");
    let store = InMemoryStore::new();

    let err = pin_token_metadata(&store, &client, &MetadataRequest::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("tokenId must not be empty"));
}
