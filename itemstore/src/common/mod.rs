//! 共通型定義
//!
//! レジストリとAPI層の双方から参照される型・エラー・ワイヤー形式

/// エラー型
pub mod error;

/// API通信プロトコル（レスポンスボディ）
pub mod protocol;

/// コアデータ型
pub mod types;
