//! API通信プロトコル
//!
//! アイテム本体以外のレスポンスボディ

use serde::{Deserialize, Serialize};

/// 削除成功時のメッセージ
pub const ITEM_DELETED_MESSAGE: &str = "Item deleted successfully";

/// DELETE /items/{id} のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    /// 完了メッセージ
    pub message: String,
}

impl DeleteResponse {
    /// 削除成功レスポンスを作成
    pub fn deleted() -> Self {
        Self {
            message: ITEM_DELETED_MESSAGE.to_string(),
        }
    }
}

/// エラーレスポンス
///
/// ```json
/// { "detail": "Item not found" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// クライアント向けメッセージ
    pub detail: String,
}
