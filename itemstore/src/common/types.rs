//! 共通型定義
//!
//! Item等のコアデータ型

use serde::{Deserialize, Serialize};

/// アイテムID（呼び出し側が指定する主キー）
pub type ItemId = i64;

/// アイテム
///
/// レジストリに格納される唯一のエンティティ。`id` は呼び出し側が指定し、
/// コレクション内で一意でなければならない。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// 一意識別子
    pub id: ItemId,
    /// 名前
    pub name: String,
    /// 価格
    pub price: f64,
    /// 説明（省略時・null時はNone）
    #[serde(default)]
    pub description: Option<String>,
}
