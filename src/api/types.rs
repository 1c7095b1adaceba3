use serde::{Deserialize, Serialize};

use crate::domain::{Book, BookId, BookValidationError};

/// 書籍DTO（GET /books のレスポンス要素、POST /books のリクエスト）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDto {
    pub name: String,
    pub author: String,
    #[serde(rename = "isReserved", default)]
    pub is_reserved: bool,
}

impl BookDto {
    /// ドメインの書籍に変換する（バリデーションを含む）
    pub fn to_domain(&self) -> Result<Book, BookValidationError> {
        Book::with_reservation(self.name.as_str(), self.author.as_str(), self.is_reserved)
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            name: book.name().to_string(),
            author: book.author().to_string(),
            is_reserved: book.is_reserved(),
        }
    }
}

/// 予約レスポンス（POST /books/:id/reserve）
#[derive(Debug, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub book_id: BookId,
    pub reserved: bool,
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
