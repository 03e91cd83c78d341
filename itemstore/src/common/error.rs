//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `StoreError`は`external_message()`と`status_code()`を提供し、
//! API層はこれをそのままHTTPレスポンスに変換する。

use axum::http::StatusCode;
use thiserror::Error;

use crate::common::types::ItemId;

/// Process-level error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (socket bind, serve loop)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Item registry error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An item with the same id is already stored
    #[error("Item {0} already exists")]
    DuplicateKey(ItemId),

    /// No item is stored under the id
    #[error("Item {0} not found")]
    NotFound(ItemId),
}

impl StoreError {
    /// Returns the fixed message shown to clients.
    ///
    /// The `Display` implementation carries the item id and is meant for logs.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::DuplicateKey(_) => "Item with this ID already exists",
            Self::NotFound(_) => "Item not found",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateKey(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Result type alias (process)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (registry)
pub type StoreResult<T> = Result<T, StoreError>;
