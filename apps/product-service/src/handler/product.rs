//! # 商品ハンドラ
//!
//! 商品の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /product/{id}` - 商品取得
//! - `POST /product` - 商品登録
//! - `PUT /product/{id}` - 商品更新
//! - `DELETE /product/{id}` - 商品削除
//!
//! ## ステータスコード
//!
//! | 状況 | ステータス |
//! |------|-----------|
//! | ID が整数でない / ボディが不正 | 400（ストアにはアクセスしない） |
//! | 取得対象が存在しない | 404 |
//! | ストアエラー | 500 |
//!
//! 更新・削除は対象が存在しなくても 200 を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use inventory_domain::product::{NewProduct, Product, ProductId};
use inventory_infra::repository::ProductRepository;
use serde::{Deserialize, Serialize};

use crate::error::ProductServiceError;

/// 商品 API の共有状態
pub struct ProductState {
    pub repository: Arc<dyn ProductRepository>,
}

// --- リクエスト/レスポンス型 ---

/// 商品登録・更新リクエスト
///
/// `id` キーが含まれていても無視する（ID はストアが採番する）。
/// `quantity` / `price` は省略時 0。
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name:     String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub price:    f64,
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        NewProduct::new(req.name, req.quantity, req.price)
    }
}

/// 商品 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id:       i64,
    pub name:     String,
    pub quantity: i32,
    pub price:    f64,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id:       product.id().as_i64(),
            name:     product.name().to_string(),
            quantity: product.quantity(),
            price:    product.price(),
        }
    }
}

/// 削除結果 DTO（`{"result":"success"}`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResultDto {
    pub result: String,
}

impl DeleteResultDto {
    fn success() -> Self {
        Self {
            result: "success".to_string(),
        }
    }
}

// --- ハンドラ ---

/// GET /product/{id}
pub async fn get_product(
    State(state): State<Arc<ProductState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ProductServiceError> {
    let id: ProductId = raw_id.parse()?;

    let product = state
        .repository
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ProductServiceError::NotFound(format!("商品が見つかりません: {id}")))?;

    Ok((StatusCode::OK, Json(ProductDto::from(product))))
}

/// POST /product
///
/// ## レスポンス
///
/// - `201 Created`: 採番された ID を含む商品
/// - `400 Bad Request`: ボディが不正
pub async fn create_product(
    State(state): State<Arc<ProductState>>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ProductServiceError> {
    let Json(req) = payload?;

    let product = state.repository.insert(&req.into()).await?;
    tracing::info!(id = %product.id(), "商品を登録しました");

    Ok((StatusCode::CREATED, Json(ProductDto::from(product))))
}

/// PUT /product/{id}
///
/// ID はパスから取り、ボディの `id` は使わない。
/// 対象が存在しない場合も 200 で送信内容を返す。
pub async fn update_product(
    State(state): State<Arc<ProductState>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ProductServiceError> {
    let id: ProductId = raw_id.parse()?;
    let Json(req) = payload?;

    let product = state
        .repository
        .update(&Product::new(id, req.into()))
        .await?;

    Ok((StatusCode::OK, Json(ProductDto::from(product))))
}

/// DELETE /product/{id}
///
/// 対象が存在しない場合も 200 を返す（2 回目の削除は何もしない）。
pub async fn delete_product(
    State(state): State<Arc<ProductState>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ProductServiceError> {
    let id: ProductId = raw_id.parse()?;

    state.repository.delete(&id).await?;

    Ok((StatusCode::OK, Json(DeleteResultDto::success())))
}
