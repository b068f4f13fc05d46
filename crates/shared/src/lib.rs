//! # Inventory 共有ユーティリティ
//!
//! このクレートは、Inventory
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, product-service）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum / sqlx への依存は持たない（HTTP 変換は各サービスの責務）

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
