//! PostgreSQL アダプターのテスト
//!
//! DATABASE_URL が設定されているときだけ実データベースに対して検証する。
//! 未設定の場合、各テストは何もせずに成功する。

mod common;

use book_management::adapters::postgres::PostgresBookDao;
use book_management::domain::{Book, BookId};
use book_management::ports::BookPort;
use serial_test::serial;
use sqlx::{PgPool, Row};
use std::sync::Arc;

async fn setup() -> Option<(PgPool, PostgresBookDao)> {
    let pool = common::create_test_pool().await?;
    common::reset_book_table(&pool).await;
    let dao = PostgresBookDao::new(pool.clone());
    Some((pool, dao))
}

async fn insert_rows(pool: &PgPool, rows: &[(&str, &str, bool)]) {
    for (title, author, is_reserved) in rows {
        sqlx::query("INSERT INTO book (title, author, is_reserved) VALUES ($1, $2, $3)")
            .bind(*title)
            .bind(*author)
            .bind(*is_reserved)
            .execute(pool)
            .await
            .expect("Failed to insert test book");
    }
}

#[tokio::test]
#[serial]
async fn test_get_all_books_from_db() {
    let Some((pool, dao)) = setup().await else {
        return;
    };
    insert_rows(
        &pool,
        &[
            ("Hamlet", "Shakespeare", false),
            ("Les fleurs du mal", "Beaudelaire", false),
            ("Harry Potter", "Rowling", true),
        ],
    )
    .await;

    let books = dao.get_all_books().await.expect("Failed to get books");

    assert_eq!(
        books,
        vec![
            Book::with_reservation("Hamlet", "Shakespeare", false).unwrap(),
            Book::with_reservation("Les fleurs du mal", "Beaudelaire", false).unwrap(),
            Book::with_reservation("Harry Potter", "Rowling", true).unwrap(),
        ]
    );
}

#[tokio::test]
#[serial]
async fn test_create_book_in_db() {
    let Some((pool, dao)) = setup().await else {
        return;
    };

    dao.create_book(Book::new("Les misérables", "Victor Hugo").unwrap())
        .await
        .expect("Failed to create book");

    let rows = sqlx::query("SELECT id, title, author, is_reserved FROM book")
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert!(row.get::<i32, _>("id") > 0);
    assert_eq!(row.get::<String, _>("title"), "Les misérables");
    assert_eq!(row.get::<String, _>("author"), "Victor Hugo");
    assert!(!row.get::<bool, _>("is_reserved"));
}

#[tokio::test]
#[serial]
async fn test_get_book_by_id() {
    let Some((pool, dao)) = setup().await else {
        return;
    };
    insert_rows(&pool, &[("Les misérables", "Victor Hugo", false)]).await;

    let book = dao
        .get_book_by_id(BookId::new(1))
        .await
        .expect("Failed to get book")
        .expect("Book should exist");

    assert_eq!(book.name(), "Les misérables");
    assert_eq!(book.author(), "Victor Hugo");
    assert!(!book.is_reserved());

    let missing = dao.get_book_by_id(BookId::new(999)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[serial]
async fn test_reserve_book_in_db() {
    let Some((pool, dao)) = setup().await else {
        return;
    };
    insert_rows(
        &pool,
        &[
            ("Les misérables", "Victor Hugo", false),
            ("Hamlet", "Shakespeare", true),
        ],
    )
    .await;

    assert!(dao.reserve_book(BookId::new(1)).await.unwrap());
    assert!(!dao.reserve_book(BookId::new(1)).await.unwrap());
    // 既に予約済み
    assert!(!dao.reserve_book(BookId::new(2)).await.unwrap());
    // 存在しない
    assert!(!dao.reserve_book(BookId::new(999)).await.unwrap());

    let is_reserved: bool = sqlx::query("SELECT is_reserved FROM book WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap()
        .get("is_reserved");
    assert!(is_reserved);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn test_concurrent_reserve_in_db() {
    let Some((pool, dao)) = setup().await else {
        return;
    };
    insert_rows(&pool, &[("Hamlet", "Shakespeare", false)]).await;
    let dao = Arc::new(dao);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let dao = dao.clone();
            tokio::spawn(async move { dao.reserve_book(BookId::new(1)).await.unwrap() })
        })
        .collect();

    let results: Vec<bool> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(results.iter().filter(|r| **r).count(), 1);
}
