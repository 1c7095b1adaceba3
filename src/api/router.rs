use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, create_book, list_books, reserve_book};

/// Creates the API router with all book catalog endpoints
///
/// - GET /books - List books sorted by name
/// - POST /books - Add a book
/// - POST /books/:id/reserve - Reserve a book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id/reserve", post(reserve_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
