pub mod book_dao;

// パブリックに型を再エクスポート
pub use book_dao::BookDao as PostgresBookDao;
