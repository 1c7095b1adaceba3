use crate::domain::{book::Book, value_objects::BookId};
use crate::ports::book_port::{BookPort, Result};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// BookPortのインメモリ実装
///
/// IDは挿入順に1から採番される（`id = index + 1`）。
/// テストダブル、およびデータベース未設定時のバックエンドとして使用する。
pub struct BookStore {
    books: Mutex<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Book>>> {
        self.books
            .lock()
            .map_err(|_| "in-memory book store lock poisoned".into())
    }

    fn index_of(id: BookId) -> Option<usize> {
        if !id.is_assignable() {
            return None;
        }
        usize::try_from(id.value() - 1).ok()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookPort for BookStore {
    async fn get_all_books(&self) -> Result<Vec<Book>> {
        Ok(self.lock()?.clone())
    }

    async fn create_book(&self, book: Book) -> Result<()> {
        self.lock()?.push(book);
        Ok(())
    }

    async fn get_book_by_id(&self, id: BookId) -> Result<Option<Book>> {
        let books = self.lock()?;
        Ok(Self::index_of(id).and_then(|i| books.get(i)).cloned())
    }

    /// 判定と更新を同じロック内で行う
    async fn reserve_book(&self, id: BookId) -> Result<bool> {
        let mut books = self.lock()?;
        let book = match Self::index_of(id) {
            Some(index) => books.get_mut(index),
            None => None,
        };
        Ok(book.is_some_and(Book::reserve))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str) -> Book {
        Book::new(name, "Victor Hugo").unwrap()
    }

    #[tokio::test]
    async fn test_ids_follow_insertion_order() {
        let store = BookStore::new();
        store.create_book(book("Les Misérables")).await.unwrap();
        store.create_book(book("Notre-Dame de Paris")).await.unwrap();

        let first = store.get_book_by_id(BookId::new(1)).await.unwrap();
        let second = store.get_book_by_id(BookId::new(2)).await.unwrap();

        assert_eq!(first.unwrap().name(), "Les Misérables");
        assert_eq!(second.unwrap().name(), "Notre-Dame de Paris");
    }

    #[tokio::test]
    async fn test_get_book_by_unknown_id_is_none() {
        let store = BookStore::new();
        store.create_book(book("Les Misérables")).await.unwrap();

        for id in [0, -1, 2, i32::MAX] {
            let result = store.get_book_by_id(BookId::new(id)).await.unwrap();
            assert!(result.is_none(), "id {} should not match", id);
        }
    }

    #[tokio::test]
    async fn test_reserve_only_once() {
        let store = BookStore::new();
        store.create_book(book("Les Misérables")).await.unwrap();

        assert!(store.reserve_book(BookId::new(1)).await.unwrap());
        assert!(!store.reserve_book(BookId::new(1)).await.unwrap());

        let stored = store.get_book_by_id(BookId::new(1)).await.unwrap().unwrap();
        assert!(stored.is_reserved());
    }

    #[tokio::test]
    async fn test_reserve_unknown_id_returns_false() {
        let store = BookStore::new();
        assert!(!store.reserve_book(BookId::new(1)).await.unwrap());
        assert!(!store.reserve_book(BookId::new(0)).await.unwrap());
    }
}
