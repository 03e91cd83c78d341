//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::common::{error::StoreError, protocol::ErrorResponse};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub enum AppError {
    /// レジストリが拒否した操作
    Store(StoreError),
    /// 境界層で拒否されたリクエスト（ボディ・パスの形式不正）
    InvalidRequest(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            // クライアントには固定メッセージのみ返し、IDを含む詳細はログに残す
            AppError::Store(err) => {
                debug!(error = %err, "Request rejected");
                (err.status_code(), err.external_message().to_string())
            }
            AppError::InvalidRequest(detail) => {
                debug!(%detail, "Malformed request");
                (StatusCode::UNPROCESSABLE_ENTITY, detail)
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
