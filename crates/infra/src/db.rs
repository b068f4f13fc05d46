//! # PostgreSQL データベース接続管理
//!
//! データベース接続プールの作成と管理を行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: 毎回接続を張り直すオーバーヘッドを避け、接続を再利用
//! - **接続情報の構造化**: 資格情報とデータベース名から `PgConnectOptions`
//!   を組み立てる。URL 文字列の組み立てを行わないため、パスワードに
//!   `@` や `/` を含んでもエスケープ不要
//! - **起動時に接続を確立**: `connect` は即座に接続を試みるため、
//!   到達不能なストアは起動時に検出される
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use inventory_infra::db::{self, DbCredentials};
//!
//! let credentials = DbCredentials::new("app", "secret", "localhost", 5432);
//! let pool = db::create_pool(db::connect_options(&credentials, "inventory")).await?;
//!
//! let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
//!     .fetch_one(&pool)
//!     .await?;
//! ```

use std::{fmt, time::Duration};

use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// データベース接続の資格情報
///
/// `Debug` 出力ではパスワードをマスクする。
#[derive(Clone, PartialEq, Eq)]
pub struct DbCredentials {
    pub user:     String,
    pub password: String,
    pub host:     String,
    pub port:     u16,
}

impl DbCredentials {
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            host: host.into(),
            port,
        }
    }
}

impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("user", &self.user)
            .field("password", &"********")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// 資格情報とデータベース名から接続オプションを組み立てる
pub fn connect_options(credentials: &DbCredentials, database_name: &str) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&credentials.host)
        .port(credentials.port)
        .username(&credentials.user)
        .password(&credentials.password)
        .database(database_name)
}

/// PostgreSQL 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを
/// アプリケーション全体で共有する。
///
/// # 設定値
///
/// - `max_connections(10)`: 最大接続数
/// - `acquire_timeout(5秒)`: 接続取得のタイムアウト。超過時はエラー
///
/// # エラー
///
/// 接続失敗・認証エラー・データベース不存在は `sqlx::Error` で返す。
/// この関数はパニックしない。
pub async fn create_pool(options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// データベースマイグレーションを実行する
///
/// `products` テーブルの DDL を適用する。適用済みのマイグレーションはスキップされる。
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// ストアへの疎通を確認する（Readiness Check 用）
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
