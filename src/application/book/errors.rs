use crate::domain::BookValidationError;
use thiserror::Error;

/// 書籍管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookApplicationError {
    /// 書籍の値が不正
    #[error("Invalid book: {0}")]
    Validation(#[from] BookValidationError),

    /// ストレージのエラー
    #[error("Book storage error")]
    StorageError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookApplicationError>;
