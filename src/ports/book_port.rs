use crate::domain::{book::Book, value_objects::BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍ストレージポート
///
/// ユースケース層が消費する永続化の抽象。
/// SQL実装とインメモリ実装がある。
#[async_trait]
pub trait BookPort: Send + Sync {
    /// 保存されているすべての書籍を取得する
    ///
    /// 順序は保証しない（並び替えは呼び出し側の責務）。
    async fn get_all_books(&self) -> Result<Vec<Book>>;

    /// 新しい書籍を保存する
    ///
    /// IDはストア側で採番される。書名・著者名の一意制約はない。
    async fn create_book(&self, book: Book) -> Result<()>;

    /// IDで書籍を取得する
    ///
    /// 存在しない場合はエラーではなく`None`を返す。
    async fn get_book_by_id(&self, id: BookId) -> Result<Option<Book>>;

    /// 書籍を予約する
    ///
    /// IDが存在し、かつ未予約の場合にのみ予約済みにする。
    /// 判定と更新は単一のアトミックな条件付き書き込みで行うこと。
    /// 同じIDへの同時呼び出しのうち`true`を返すのは高々1つ。
    async fn reserve_book(&self, id: BookId) -> Result<bool>;
}
