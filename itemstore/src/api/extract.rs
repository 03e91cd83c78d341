//! リクエスト抽出器
//!
//! axum標準の `Json` / `Path` をラップし、形式不正を `AppError` の
//! JSONエラーレスポンス（422）に変換する。

use axum::extract::{FromRequest, FromRequestParts};

use super::error::AppError;

/// 形式不正時に422 + `{"detail": ...}` を返すJSONボディ抽出器
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// 形式不正時に422 + `{"detail": ...}` を返すパスパラメータ抽出器
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);
