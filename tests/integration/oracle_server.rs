use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::{json, Value};
use slp_oracle::oracle::server::{router, BAD_REQUEST_KIND};
use tower::ServiceExt;

use crate::common::scripts::{genesis_script, mint_script, send_script};

async fn get(uri: &str) -> (StatusCode, Value) {
    request(Method::GET, uri).await
}

async fn request(method: Method, uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_genesis_over_http() {
    let script = genesis_script(8, None, 10_000_000_000_000_000);
    let (status, body) = get(&format!("/{}", hex::encode(&script))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["transactionType"], json!("GENESIS"));
    assert_eq!(body["data"]["batonVout"], Value::Null);
    assert_eq!(body["data"]["genesisOrMintQuantity"], json!("10000000000000000"));
}

#[tokio::test]
async fn test_mint_and_send_over_http() {
    let (_, mint) = get(&format!("/{}", hex::encode(mint_script(Some(2), 100)))).await;
    assert_eq!(mint["data"]["containsBaton"], json!(true));
    assert_eq!(mint["data"]["batonVout"], json!(2));

    let (_, send) = get(&format!("/{}", hex::encode(send_script(&[3, 4])))).await;
    assert_eq!(send["data"]["sendOutputs"], json!(["3", "4"]));
}

#[tokio::test]
async fn test_decode_failure_is_200_with_kind() {
    let script = genesis_script(10, None, 1);
    let (status, body) = get(&format!("/{}", hex::encode(&script))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["kind"], json!("InvalidDecimals"));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_invalid_hex_is_200_with_kind() {
    let (status, body) = get("/6a04534c5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["kind"], json!("InvalidHex"));

    let (status, body) = get("/xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], json!("InvalidHex"));
}

#[tokio::test]
async fn test_root_is_empty_script() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["kind"], json!("NotSlp"));
}

#[tokio::test]
async fn test_unsupported_requests_still_answer_json() {
    let (status, body) = get("/6a/04534c5000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["kind"], json!(BAD_REQUEST_KIND));

    let (status, body) = request(Method::POST, "/6a").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], json!(BAD_REQUEST_KIND));
}
