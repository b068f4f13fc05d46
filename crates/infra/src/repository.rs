//! # リポジトリ実装
//!
//! ## 設計方針
//!
//! - **単一ステートメント**: 各操作は 1 つの SQL 文で完結し、トランザクションを張らない
//! - **パラメータ化クエリ**: 値はすべてバインドパラメータで渡す（文字列連結しない）
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod product_repository;

pub use product_repository::{PostgresProductRepository, ProductRepository};
