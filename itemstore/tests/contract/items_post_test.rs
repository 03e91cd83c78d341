//! Contract Test: POST /items/

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use crate::support::items::{create_test_app, send, send_json};

/// POST /items/ - 正常系: 登録したアイテムがそのまま返る
#[tokio::test]
async fn test_create_item_returns_item() {
    let (app, state) = create_test_app();
    let payload = json!({"id": 1, "name": "Pen", "price": 1.5});

    let (status, body) = send_json(&app, "POST", "/items/", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Pen", "price": 1.5, "description": null})
    );
    assert_eq!(state.registry.len().await, 1);
}

/// POST /items - 末尾スラッシュなしでも受け付ける
#[tokio::test]
async fn test_create_item_without_trailing_slash() {
    let (app, _state) = create_test_app();
    let payload = json!({"id": 2, "name": "Book", "price": 9.99, "description": "novel"});

    let (status, body) = send_json(&app, "POST", "/items", &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "novel");
}

/// POST /items/ - 異常系: 重複IDは400
#[tokio::test]
async fn test_create_item_duplicate_id() {
    let (app, state) = create_test_app();
    let payload = json!({"id": 1, "name": "Pen", "price": 1.5});
    send_json(&app, "POST", "/items/", &payload).await;

    let duplicate = json!({"id": 1, "name": "Pencil", "price": 0.5});
    let (status, body) = send_json(&app, "POST", "/items/", &duplicate).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Item with this ID already exists"}));

    let stored = state.registry.get(1).await.unwrap();
    assert_eq!(stored.name, "Pen");
}

/// POST /items/ - 異常系: 必須フィールド欠落はレジストリに到達しない
#[tokio::test]
async fn test_create_item_missing_field_rejected() {
    let (app, state) = create_test_app();
    let payload = json!({"id": 1, "price": 1.5});

    let (status, body) = send_json(&app, "POST", "/items/", &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("name"));
    assert!(state.registry.is_empty().await);
}

/// POST /items/ - 異常系: 型不一致はレジストリに到達しない
#[tokio::test]
async fn test_create_item_wrong_type_rejected() {
    let (app, state) = create_test_app();
    let payload = json!({"id": "one", "name": "Pen", "price": 1.5});

    let (status, body) = send_json(&app, "POST", "/items/", &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    assert!(state.registry.is_empty().await);
}

/// POST /items/ - 異常系: JSONとして不正なボディは422 + detail
#[tokio::test]
async fn test_create_item_malformed_json_rejected() {
    let (app, state) = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/items/")
        .header("content-type", "application/json")
        .body(Body::from("{\"id\": 1,"))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    assert!(state.registry.is_empty().await);
}

/// POST /items/ - 異常系: Content-Type欠落も422 + detail
#[tokio::test]
async fn test_create_item_missing_content_type_rejected() {
    let (app, state) = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/items/")
        .body(Body::from(r#"{"id": 1, "name": "Pen", "price": 1.5}"#))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    assert!(state.registry.is_empty().await);
}
