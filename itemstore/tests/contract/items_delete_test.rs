//! Contract Test: DELETE /items/{id}

use axum::http::StatusCode;
use serde_json::json;

use crate::support::items::{create_test_app, send_empty, send_json};

/// DELETE /items/{id} - 正常系: 削除メッセージが返る
#[tokio::test]
async fn test_delete_item_success() {
    let (app, state) = create_test_app();
    send_json(&app, "POST", "/items/", &json!({"id": 1, "name": "Pen", "price": 1.5})).await;
    send_json(&app, "POST", "/items/", &json!({"id": 2, "name": "Book", "price": 9.99})).await;

    let (status, body) = send_empty(&app, "DELETE", "/items/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Item deleted successfully"}));
    assert_eq!(state.registry.len().await, 1);

    let (status, _) = send_empty(&app, "GET", "/items/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// DELETE /items/{id} - 二重削除は404
#[tokio::test]
async fn test_delete_item_twice() {
    let (app, _state) = create_test_app();
    send_json(&app, "POST", "/items/", &json!({"id": 1, "name": "Pen", "price": 1.5})).await;
    send_empty(&app, "DELETE", "/items/1").await;

    let (status, body) = send_empty(&app, "DELETE", "/items/1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Item not found"}));
}
