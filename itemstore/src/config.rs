//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs.

use crate::common::error::{CommonError, CommonResult};

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use itemstore::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("ITEMSTORE_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Falls back to `default` if neither is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// デフォルトのバインドアドレス
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
pub const DEFAULT_PORT: u16 = 8000;

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// ホストアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ServerConfig {
    /// 環境変数 `ITEMSTORE_HOST` / `ITEMSTORE_PORT`（旧: `HOST` / `PORT`）から読み込む
    pub fn from_env() -> Self {
        let host = get_env_with_fallback_or("ITEMSTORE_HOST", "HOST", DEFAULT_HOST);
        let port = get_env_with_fallback_parse("ITEMSTORE_PORT", "PORT", DEFAULT_PORT);
        Self { host, port }
    }

    /// CLI引数から作成
    pub fn from_args(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// ログ出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// 人間向けテキスト
    #[default]
    Text,
    /// JSON Lines
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CommonError::Config(format!(
                "unknown log format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

/// ロギング設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// tracingフィルタ（例: `info`, `itemstore=debug`）
    pub level: String,
    /// 出力形式
    pub format: LogFormat,
}

impl LogConfig {
    /// 環境変数 `ITEMSTORE_LOG_LEVEL` と `ITEMSTORE_LOG_FORMAT` から読み込む
    ///
    /// `ITEMSTORE_LOG_LEVEL` が未設定の場合は標準の `RUST_LOG` を使う。
    /// 不明な形式が指定された場合はエラーを返す。
    pub fn from_env() -> CommonResult<Self> {
        let level = std::env::var("ITEMSTORE_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let format = match std::env::var("ITEMSTORE_LOG_FORMAT") {
            Ok(value) => value.parse()?,
            Err(_) => LogFormat::default(),
        };
        Ok(Self { level, format })
    }
}
