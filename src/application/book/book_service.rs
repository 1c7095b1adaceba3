use crate::domain::{book::Book, value_objects::BookId};
use crate::ports::BookPort;
use std::sync::Arc;

use super::errors::{BookApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞いは持たず、ユースケース関数に明示的に渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_port: Arc<dyn BookPort>,
}

/// すべての書籍を書名順に取得する
///
/// 書名の大文字小文字を区別せずに昇順で並べる。
/// 安定ソートのため、同じキーの書籍はストレージの順序を保つ。
pub async fn get_all_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    let mut books = deps
        .book_port
        .get_all_books()
        .await
        .map_err(BookApplicationError::StorageError)?;

    books.sort_by_cached_key(Book::sort_key);

    tracing::debug!(count = books.len(), "Listed books");
    Ok(books)
}

/// 書籍を追加する
///
/// バリデーションは`Book`の生成時に済んでいるため、ここではポートに委譲するのみ。
pub async fn add_book(deps: &ServiceDependencies, book: Book) -> Result<()> {
    let name = book.name().to_string();

    deps.book_port
        .create_book(book)
        .await
        .map_err(BookApplicationError::StorageError)?;

    tracing::info!(name = %name, "Book added");
    Ok(())
}

/// 書籍を予約する
///
/// ビジネスルール：
/// - 書籍が存在しなければ`false`
/// - 既に予約済みなら`false`（ストレージの更新は行わない）
/// - それ以外はポートのアトミックな条件付き更新の結果を返す
///
/// 事前チェックは高速化のためのもので、同時実行下の正しさは
/// ポートの条件付き更新が保証する。二つの呼び出しが同時に
/// 事前チェックを通過することはありうる。
pub async fn reserve_book(deps: &ServiceDependencies, id: BookId) -> Result<bool> {
    // 1. 書籍の存在確認
    let book = deps
        .book_port
        .get_book_by_id(id)
        .await
        .map_err(BookApplicationError::StorageError)?;

    let Some(book) = book else {
        tracing::debug!(book_id = %id, "Reservation rejected: book not found");
        return Ok(false);
    };

    // 2. 予約状態の事前チェック
    if book.is_reserved() {
        tracing::debug!(book_id = %id, "Reservation rejected: already reserved");
        return Ok(false);
    }

    // 3. アトミックな条件付き更新
    let reserved = deps
        .book_port
        .reserve_book(id)
        .await
        .map_err(BookApplicationError::StorageError)?;

    if reserved {
        tracing::info!(book_id = %id, "Book reserved");
    } else {
        tracing::debug!(book_id = %id, "Reservation lost to a concurrent request");
    }

    Ok(reserved)
}
