//! アイテムCRUD APIハンドラー

use axum::{extract::State, Json};

use super::{
    error::AppError,
    extract::{ValidJson, ValidPath},
};
use crate::{
    common::{
        protocol::DeleteResponse,
        types::{Item, ItemId},
    },
    AppState,
};

/// POST /items/ - アイテム登録
pub async fn create_item(
    State(state): State<AppState>,
    ValidJson(item): ValidJson<Item>,
) -> Result<Json<Item>, AppError> {
    let created = state.registry.create(item).await?;
    Ok(Json(created))
}

/// GET /items/ - アイテム一覧取得
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.registry.list().await)
}

/// GET /items/{id} - アイテム取得
pub async fn get_item(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<ItemId>,
) -> Result<Json<Item>, AppError> {
    let item = state.registry.get(id).await?;
    Ok(Json(item))
}

/// PUT /items/{id} - アイテム更新（全置換）
pub async fn update_item(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<ItemId>,
    ValidJson(item): ValidJson<Item>,
) -> Result<Json<Item>, AppError> {
    let updated = state.registry.update(id, item).await?;
    Ok(Json(updated))
}

/// DELETE /items/{id} - アイテム削除
pub async fn delete_item(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<ItemId>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.registry.delete(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
