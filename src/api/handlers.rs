use crate::application::book::{
    ServiceDependencies, add_book as execute_add_book, get_all_books as execute_get_all_books,
    reserve_book as execute_reserve_book,
};
use crate::domain::value_objects::BookId;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{
    error::ApiError,
    extract::{AppJson, AppPath},
    types::{BookDto, ReservationResponse},
};

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

/// GET /books - 書籍一覧を書名順で取得
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookDto>>, ApiError> {
    let books = execute_get_all_books(&state.service_deps).await?;

    Ok(Json(books.into_iter().map(BookDto::from).collect()))
}

/// POST /books - 書籍を追加
///
/// 書名または著者名が空の場合は400を返し、何も保存しない。
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<BookDto>,
) -> Result<StatusCode, ApiError> {
    let book = req.to_domain()?;

    execute_add_book(&state.service_deps, book).await?;

    Ok(StatusCode::CREATED)
}

/// POST /books/:id/reserve - 書籍を予約
///
/// 存在しない書籍や予約済みの書籍に対しては`reserved: false`を返す。
pub async fn reserve_book(
    State(state): State<Arc<AppState>>,
    AppPath(book_id): AppPath<BookId>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reserved = execute_reserve_book(&state.service_deps, book_id).await?;

    Ok(Json(ReservationResponse { book_id, reserved }))
}
