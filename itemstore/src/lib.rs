//! itemstore Server
//!
//! メモリ内アイテムレジストリをHTTPで公開するサーバー

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// REST APIハンドラー
pub mod api;

/// アイテム登録管理
pub mod registry;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// アプリケーション状態
#[derive(Clone, Default)]
pub struct AppState {
    /// アイテムレジストリ
    pub registry: registry::ItemRegistry,

    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// 空のレジストリで状態を初期化
    pub fn new() -> Self {
        Self::default()
    }
}
