use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// `axum::Json` の抽出失敗を`ApiError`のJSONボディで返す
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` の抽出失敗を`ApiError`のJSONボディで返す
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);
