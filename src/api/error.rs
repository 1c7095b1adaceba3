use crate::application::book::BookApplicationError;
use crate::domain::BookValidationError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと、リクエストの抽出失敗をラップし、
/// HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    /// アプリケーション層のエラー
    Application(BookApplicationError),
    /// リクエストボディやパスを解釈できない
    InvalidRequest { status: StatusCode, message: String },
}

impl From<BookApplicationError> for ApiError {
    fn from(err: BookApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<BookValidationError> for ApiError {
    fn from(err: BookValidationError) -> Self {
        ApiError::Application(BookApplicationError::from(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400/415/422 - axumの抽出失敗（ステータスはaxumの判定に従う）
            ApiError::InvalidRequest { status, message } => (status, "INVALID_REQUEST", message),

            // 400 Bad Request - 書名・著者名が空
            ApiError::Application(BookApplicationError::Validation(ref e)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }

            // 500 Internal Server Error - ストレージ障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(BookApplicationError::StorageError(ref e)) => {
                tracing::error!("Book storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Failed to access book storage".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
