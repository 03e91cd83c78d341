//! serve サブコマンド

use clap::Args;

use crate::config::ServerConfig;

/// serve サブコマンドの引数
///
/// 省略した値は `ServerConfig::from_env()` と同じ環境変数・デフォルトで補完する。
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port (default: $ITEMSTORE_PORT, $PORT, or 8000)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address (default: $ITEMSTORE_HOST, $HOST, or 0.0.0.0)
    #[arg(short = 'H', long)]
    pub host: Option<String>,
}

impl ServeArgs {
    /// 引数を環境変数由来の設定に上書きして最終的なサーバー設定を得る
    pub fn resolve(self) -> ServerConfig {
        let env = ServerConfig::from_env();
        ServerConfig::from_args(self.host.unwrap_or(env.host), self.port.unwrap_or(env.port))
    }
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        args.resolve()
    }
}
