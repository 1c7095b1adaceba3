pub mod book;
pub mod errors;
pub mod value_objects;

pub use book::Book;
pub use errors::*;
pub use value_objects::*;
