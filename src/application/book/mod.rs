mod book_service;
mod errors;

pub use book_service::{ServiceDependencies, add_book, get_all_books, reserve_book};
pub use errors::{BookApplicationError, Result};
