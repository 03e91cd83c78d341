//! REST APIハンドラー
//!
//! アイテムCRUD API

/// APIエラーレスポンス型
pub mod error;

/// 形式不正を422に変換するリクエスト抽出器
pub mod extract;

/// アイテムCRUDハンドラー
pub mod items;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// アプリケーション全体のルーターを作成
///
/// `/items` と `/items/` は同じハンドラーで受け付ける。
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/items/", get(items::list_items).post(items::create_item))
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
