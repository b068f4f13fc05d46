//! # アプリケーション構築
//!
//! DB 接続の初期化とルーター構築、サーバー起動を担当する。
//! `main.rs` は設定読み込みとトレーシング初期化に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use inventory_infra::{
    db,
    repository::{PostgresProductRepository, ProductRepository},
};
use sqlx::PgPool;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::DatabaseConfig,
    handler::{
        ProductState,
        ReadinessState,
        create_product,
        delete_product,
        get_product,
        health_check,
        readiness_check,
        update_product,
    },
};

/// 起動時の致命的エラー
///
/// いずれもトラフィックを受け付ける前に発生し、プロセスを終了させる。
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("データベース接続に失敗しました: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("マイグレーションの適用に失敗しました: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("{addr} へのバインドに失敗しました: {source}")]
    Bind {
        addr:   String,
        #[source]
        source: std::io::Error,
    },

    #[error("サーバーが異常終了しました: {0}")]
    Serve(#[source] std::io::Error),
}

/// 商品 API のルーター
///
/// `{id}` は文字列のまま抽出し、整数への変換はハンドラで行う。
pub fn product_routes(state: Arc<ProductState>) -> Router {
    Router::new()
        .route("/product", post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}

/// ヘルスチェック込みのルーター全体を構築する
///
/// `readiness_state` が `None` の場合、`/health/ready` は公開しない。
pub fn build_router(
    product_state: Arc<ProductState>,
    readiness_state: Option<Arc<ReadinessState>>,
) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(product_routes(product_state));

    if let Some(state) = readiness_state {
        router = router.merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(state),
        );
    }

    router.layer(TraceLayer::new_for_http())
}

/// Product Service アプリケーション
pub struct App {
    router: Router,
}

impl App {
    /// 設定から DB に接続し、アプリケーションを組み立てる
    ///
    /// 接続は即時に行い、失敗した場合はエラーを返す。
    /// `auto_migrate` が有効なら `migrations/` を適用する。
    pub async fn initialise(config: &DatabaseConfig) -> Result<Self, StartupError> {
        let options = db::connect_options(&config.credentials, &config.name);
        let pool = db::create_pool(options)
            .await
            .map_err(StartupError::Connect)?;
        tracing::info!(
            host = %config.credentials.host,
            port = config.credentials.port,
            database = %config.name,
            "データベースに接続しました"
        );

        if config.auto_migrate {
            db::run_migrations(&pool).await?;
            tracing::info!("マイグレーションを適用しました");
        }

        Ok(Self::from_pool(pool))
    }

    /// 接続済みプールからアプリケーションを組み立てる
    pub fn from_pool(pool: PgPool) -> Self {
        let repository = Arc::new(PostgresProductRepository::new(pool.clone()));
        let readiness_state = Arc::new(ReadinessState { pool });

        Self {
            router: build_router(
                Arc::new(ProductState { repository }),
                Some(readiness_state),
            ),
        }
    }

    /// 任意のリポジトリからアプリケーションを組み立てる（Readiness Check なし）
    pub fn with_repository(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            router: build_router(Arc::new(ProductState { repository }), None),
        }
    }

    /// ルーターを取得する
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// 指定アドレスで HTTP サーバーを起動する
    pub async fn run(self, addr: &str) -> Result<(), StartupError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| StartupError::Bind {
                addr: addr.to_string(),
                source,
            })?;
        tracing::info!("Product Service サーバーを起動します: {addr}");

        axum::serve(listener, self.router)
            .await
            .map_err(StartupError::Serve)
    }
}
