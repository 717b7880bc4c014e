//! Model Module
//!
//! Record types held by the bookstore.
//!
//! ## Records
//! - `Author`: name plus number of books written
//! - `Book`: inventory entry with an embedded copy of its author
//!
//! A `Book` carries its `Author` by value. Editing the author registry later
//! never reaches books that were already stored.

mod author;
mod book;

pub use author::Author;
pub use book::{Book, BookType, RENTAL_PRICE};

/// A record that can be looked up by name
pub trait Keyed {
    /// The lookup key (first match wins)
    fn key(&self) -> &str;
}
