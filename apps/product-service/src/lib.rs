//! # Product Service ライブラリ
//!
//! 商品の CRUD API を提供するサービス。
//! ルーター・ハンドラ・起動処理をテストから利用できるよう公開する。
//!
//! ## モジュール構成
//!
//! - [`app`] - アプリケーション（DB 接続とルーターの保持、起動）
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ

pub mod app;
pub mod config;
pub mod error;
pub mod handler;

pub use app::{App, build_router};
