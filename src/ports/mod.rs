pub mod book_port;

pub use book_port::*;
