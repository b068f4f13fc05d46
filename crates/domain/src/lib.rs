//! # Inventory ドメイン層
//!
//! 商品（Product）のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! product-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`product`] - 商品エンティティと識別子
//!
//! ## 使用例
//!
//! ```rust
//! use inventory_domain::product::{NewProduct, Product, ProductId};
//!
//! let id: ProductId = "1".parse().unwrap();
//! let product = Product::new(id, NewProduct::new("chair", 5, 100.0));
//! assert_eq!(product.name(), "chair");
//! ```

pub mod error;
pub mod product;

pub use error::DomainError;
