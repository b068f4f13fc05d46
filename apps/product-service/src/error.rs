//! # Product Service エラー定義
//!
//! Product Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError / InfraError / JsonRejection
//!        ↓ 変換
//! ProductServiceError
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + RFC 9457 JSON)
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use inventory_domain::DomainError;
use inventory_infra::InfraError;
use inventory_shared::ErrorResponse;
use thiserror::Error;

/// ハンドラで発生するエラー
#[derive(Debug, Error)]
pub enum ProductServiceError {
    /// 不正なリクエスト（ID が整数でない、ボディが不正な JSON）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// 商品が見つからない（取得時のみ）
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// ストアエラー（接続失敗、クエリ失敗、制約違反）
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for ProductServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<JsonRejection> for ProductServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ProductServiceError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ProductServiceError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ProductServiceError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg))
            }
            ProductServiceError::Database(e) => {
                // 内部エラーの詳細はログにのみ出力する
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "ストアエラーが発生しました"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bad_requestは400になる() {
        let response = ProductServiceError::BadRequest("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_foundは404になる() {
        let response = ProductServiceError::NotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_databaseは500になる() {
        let response =
            ProductServiceError::Database(InfraError::unexpected("接続断")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domainのvalidationはbad_requestに変換される() {
        let err: ProductServiceError = DomainError::Validation("整数ではない".to_string()).into();
        assert!(matches!(err, ProductServiceError::BadRequest(msg) if msg == "整数ではない"));
    }
}
