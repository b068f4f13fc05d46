//! # Product Service 設定
//!
//! 環境変数から Product Service の設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `PRODUCT_SERVICE_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `PRODUCT_SERVICE_PORT` | No | `8010` | ポート番号 |
//! | `DB_USER` | **Yes** | - | データベースユーザー |
//! | `DB_PASSWORD` | **Yes** | - | データベースパスワード |
//! | `DB_HOST` | No | `localhost` | データベースホスト |
//! | `DB_PORT` | No | `5432` | データベースポート |
//! | `DB_NAME` | **Yes** | - | データベース名 |
//! | `DB_AUTO_MIGRATE` | No | `false` | 起動時に `migrations/` を適用する |

use std::env;

use inventory_infra::db::DbCredentials;
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    #[error("{key} の値が不正です: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// データベース接続設定
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 接続資格情報（ユーザー・パスワード・ホスト・ポート）
    pub credentials:  DbCredentials,
    /// データベース名
    pub name:         String,
    /// 起動時にマイグレーションを適用するか
    pub auto_migrate: bool,
}

/// Product Service の設定
#[derive(Debug, Clone)]
pub struct ProductServiceConfig {
    /// バインドアドレス
    pub host:     String,
    /// ポート番号
    pub port:     u16,
    /// データベース接続設定
    pub database: DatabaseConfig,
}

impl ProductServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = |key: &'static str, default: u16| -> Result<u16, ConfigError> {
            match get(key) {
                Some(value) => value
                    .parse()
                    .map_err(|_| ConfigError::Invalid { key, value }),
                None => Ok(default),
            }
        };

        let auto_migrate = match get("DB_AUTO_MIGRATE").as_deref() {
            None | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key:   "DB_AUTO_MIGRATE",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            host:     get("PRODUCT_SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port:     port("PRODUCT_SERVICE_PORT", 8010)?,
            database: DatabaseConfig {
                credentials: DbCredentials::new(
                    required("DB_USER")?,
                    required("DB_PASSWORD")?,
                    get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                    port("DB_PORT", 5432)?,
                ),
                name: required("DB_NAME")?,
                auto_migrate,
            },
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
