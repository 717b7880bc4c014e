//! Command definitions
//!
//! Represents operations requested against a bookstore.

use crate::model::{Author, Book};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    AddBook,
    AddAuthor,
    UpdateBook,
    UpdateAuthor,
    DeleteBook,
    DeleteAuthor,
    CountAvailable,
}

/// A bookstore operation
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a book to the inventory
    AddBook { book: Book },

    /// Append an author to the registry
    AddAuthor {
        name: String,
        number_of_books_written: i64,
    },

    /// Replace the first book with the same name
    UpdateBook { book: Book },

    /// Replace the first author named `name`
    UpdateAuthor { name: String, author: Author },

    /// Remove the first book named `name`
    DeleteBook { name: String },

    /// Remove the first author named `name`
    DeleteAuthor { name: String },

    /// Count books in and out of stock
    CountAvailable,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::AddBook { .. } => CommandType::AddBook,
            Command::AddAuthor { .. } => CommandType::AddAuthor,
            Command::UpdateBook { .. } => CommandType::UpdateBook,
            Command::UpdateAuthor { .. } => CommandType::UpdateAuthor,
            Command::DeleteBook { .. } => CommandType::DeleteBook,
            Command::DeleteAuthor { .. } => CommandType::DeleteAuthor,
            Command::CountAvailable => CommandType::CountAvailable,
        }
    }

    /// Name of the record the command targets, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Command::AddBook { book } | Command::UpdateBook { book } => Some(book.name.as_str()),
            Command::AddAuthor { name, .. }
            | Command::UpdateAuthor { name, .. }
            | Command::DeleteBook { name }
            | Command::DeleteAuthor { name } => Some(name.as_str()),
            Command::CountAvailable => None,
        }
    }
}
