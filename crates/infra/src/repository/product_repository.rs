//! # ProductRepository
//!
//! 商品の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **存在確認をしない更新・削除**: `update` / `delete` は対象行が
//!   存在しなくても成功扱いにする（影響行数を見ない）
//! - **NotFound は Option で表現**: `find_by_id` は行がなければ `Ok(None)`
//!   を返し、404 への変換は API 層が行う
//! - **価格のスケールはストアが決める**: `price` 列は `NUMERIC(10, 7)`。
//!   読み取り時に `DOUBLE PRECISION` へキャストする

use async_trait::async_trait;
use inventory_domain::product::{NewProduct, Product, ProductId};
use sqlx::PgPool;

use crate::error::InfraError;

/// 商品リポジトリトレイト
///
/// 商品の単一行 CRUD 操作を定義する。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// ID で商品を検索する
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, InfraError>;

    /// 商品を挿入し、採番された ID 付きの商品を返す
    async fn insert(&self, product: &NewProduct) -> Result<Product, InfraError>;

    /// 商品の名前・数量・価格を更新する
    ///
    /// 該当 ID の行がなくてもエラーにしない。引数の商品をそのまま返す。
    async fn update(&self, product: &Product) -> Result<Product, InfraError>;

    /// 商品を削除する
    ///
    /// 該当 ID の行がなくてもエラーにしない。
    async fn delete(&self, id: &ProductId) -> Result<(), InfraError>;
}

/// PostgreSQL 実装の ProductRepository
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `products` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id:       i64,
    name:     String,
    quantity: i32,
    price:    f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::from_db(ProductId::new(row.id), row.name, row.quantity, row.price)
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, InfraError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                id,
                name,
                COALESCE(quantity, 0) AS quantity,
                COALESCE(price, 0)::DOUBLE PRECISION AS price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(name = %product.name))]
    async fn insert(&self, product: &NewProduct) -> Result<Product, InfraError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, quantity, price)
            VALUES ($1, $2, $3)
            RETURNING
                id,
                name,
                COALESCE(quantity, 0) AS quantity,
                COALESCE(price, 0)::DOUBLE PRECISION AS price
            "#,
        )
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = row.id, "商品を登録しました");
        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %product.id()))]
    async fn update(&self, product: &Product) -> Result<Product, InfraError> {
        sqlx::query(
            r#"
            UPDATE products
            SET name = $2, quantity = $3, price = $4
            WHERE id = $1
            "#,
        )
        .bind(product.id().as_i64())
        .bind(product.name())
        .bind(product.quantity())
        .bind(product.price())
        .execute(&self.pool)
        .await?;

        Ok(product.clone())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &ProductId) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresProductRepository>();
        assert_send_sync::<Box<dyn ProductRepository>>();
    }
}
