use crate::domain::{book::Book, value_objects::BookId};
use crate::ports::book_port::{BookPort, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookに変換する
///
/// `title`列がドメインの書名に対応する。
/// 空白のみの値が保存されていた場合はバリデーションエラーとして扱う。
fn map_row_to_book(row: &PgRow) -> Result<Book> {
    let title: String = row.try_get("title")?;
    let author: String = row.try_get("author")?;
    let is_reserved: bool = row.try_get("is_reserved")?;

    Ok(Book::with_reservation(title, author, is_reserved)?)
}

/// BookPortのPostgreSQL実装
///
/// `book`テーブルに対してパラメータ化されたSQLを発行する。
pub struct BookDao {
    pool: PgPool,
}

impl BookDao {
    /// PostgreSQLコネクションプールから新しいBookDaoを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookPort for BookDao {
    /// 全書籍を取得（挿入順）
    async fn get_all_books(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT
                id,
                title,
                author,
                is_reserved
            FROM book
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_book).collect()
    }

    async fn create_book(&self, book: Book) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO book (title, author, is_reserved)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(book.name())
        .bind(book.author())
        .bind(book.is_reserved())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_book_by_id(&self, id: BookId) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT
                id,
                title,
                author,
                is_reserved
            FROM book
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book).transpose()
    }

    /// 条件付きUPDATEで予約する
    ///
    /// 判定と更新を1文で行うため、同時に複数の予約が来ても
    /// 影響行数が1になるのは1つだけ。
    async fn reserve_book(&self, id: BookId) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE book
            SET is_reserved = TRUE
            WHERE id = $1 AND is_reserved = FALSE
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
