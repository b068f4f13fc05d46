//! # Product Service サーバー
//!
//! 商品（名前・在庫数・価格）の CRUD API を提供するサービス。
//!
//! ## 環境変数
//!
//! 設定項目は [`inventory_product_service::config`] を参照。
//! ログ出力は `LOG_FORMAT`（`json` / `pretty`）と `RUST_LOG` で制御する。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p inventory-product-service
//!
//! # 本番環境
//! DB_USER=app DB_PASSWORD=... DB_NAME=inventory \
//!   cargo run -p inventory-product-service --release
//! ```

use inventory_product_service::{App, config::ProductServiceConfig};
use inventory_shared::observability::{TracingConfig, init_tracing};

/// Product Service サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. DB 接続とルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env("product-service"));
    let _tracing_guard = tracing::info_span!("app", service = "product-service").entered();

    // 設定読み込み
    let config = ProductServiceConfig::from_env()?;
    let addr = config.bind_address();

    // DB 接続に失敗した場合はトラフィックを受け付ける前に終了する
    let app = App::initialise(&config.database).await?;

    app.run(&addr).await?;

    Ok(())
}
