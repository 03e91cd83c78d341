//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::common::error::{CommonError, CommonResult};
use crate::config::{LogConfig, LogFormat};

/// 環境変数の設定でロギングを初期化する
pub fn init() -> CommonResult<()> {
    init_with(&LogConfig::from_env()?)
}

/// 指定した設定でロギングを初期化する
///
/// 既にグローバルsubscriberが設定済みの場合はエラーを返す。
pub fn init_with(config: &LogConfig) -> CommonResult<()> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| CommonError::Config(format!("invalid log level '{}': {}", config.level, e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.format {
        LogFormat::Text => builder.with_target(true).try_init(),
        LogFormat::Json => builder.json().with_target(false).try_init(),
    };

    result.map_err(|e| CommonError::Config(format!("failed to install subscriber: {}", e)))
}
