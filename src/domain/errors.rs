use thiserror::Error;

/// 書籍生成時のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookValidationError {
    /// 書名が空（空白のみを含む）
    #[error("Name must not be blank")]
    BlankName,
    /// 著者名が空（空白のみを含む）
    #[error("Author must not be blank")]
    BlankAuthor,
}
