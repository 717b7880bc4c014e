//! Bookstore Module
//!
//! The container that owns the author registry and the book inventory.
//!
//! ## Responsibilities
//! - Validate input before any mutation
//! - Pin rental prices to zero
//! - First-match update and delete by name
//! - Stock counts over the inventory
//!
//! Every failing operation leaves both sequences exactly as they were.

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{
    BookstoreError, Result, AUTHOR_NOT_FOUND_DELETE, AUTHOR_NOT_FOUND_UPDATE, BLANK_AUTHOR_NAME,
    BLANK_BOOK_NAME, BOOK_NOT_FOUND,
};
use crate::model::{Author, Book};
use crate::registry::Registry;
use crate::request::{Command, Response};
use crate::snapshot::InventorySnapshot;

/// In-memory bookstore
///
/// ## Access Model
///
/// Single-threaded: reads take `&self`, mutations take `&mut self`.
/// Wrap in [`SharedBookstore`](crate::shared::SharedBookstore) when more than
/// one thread needs access.
#[derive(Debug, Clone)]
pub struct Bookstore {
    /// Bookstore configuration
    config: Config,

    /// Author registry, insertion order
    authors: Registry<Author>,

    /// Book inventory, insertion order
    books: Registry<Book>,
}

impl Bookstore {
    /// Create an empty bookstore with the default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty bookstore with the given config
    pub fn with_config(config: Config) -> Self {
        Self {
            authors: Registry::with_capacity(config.initial_capacity),
            books: Registry::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Rebuild a bookstore from a snapshot
    ///
    /// Every record goes through the same checks as a fresh add: books are
    /// validated and rentals re-priced, authors are validated in strict mode.
    /// Any failure rejects the whole snapshot.
    pub fn restore(config: Config, snapshot: InventorySnapshot) -> Result<Self> {
        debug!(
            authors = snapshot.authors.len(),
            books = snapshot.books.len(),
            "restoring bookstore from snapshot"
        );

        if config.strict_author_validation {
            for author in &snapshot.authors {
                author.validate()?;
            }
        }

        let books = snapshot
            .books
            .into_iter()
            .map(Book::into_stored)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            config,
            authors: snapshot.authors.into(),
            books: books.into(),
        })
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        let command_type = command.command_type();
        let result = match command {
            Command::AddBook { book } => self.add_book(book).map(|_| Response::Done),
            Command::AddAuthor {
                name,
                number_of_books_written,
            } => self
                .add_author(name, number_of_books_written)
                .map(|_| Response::Done),
            Command::UpdateBook { book } => self.update_book(book).map(|_| Response::Done),
            Command::UpdateAuthor { name, author } => {
                self.update_author(&name, author).map(|_| Response::Done)
            }
            Command::DeleteBook { name } => self.delete_book(&name).map(|_| Response::Done),
            Command::DeleteAuthor { name } => self.delete_author(&name).map(|_| Response::Done),
            Command::CountAvailable => Ok(Response::counts(self.count_books_available())),
        };

        if let Err(e) = &result {
            warn!(?command_type, error = %e, "command rejected");
        }
        result
    }

    // =========================================================================
    // Books
    // =========================================================================

    /// Add a book to the inventory
    ///
    /// Fails on a blank name, negative page count or negative price.
    /// Rentals are stored with a zero price.
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        let book = book.into_stored()?;
        debug!(name = %book.name, book_type = %book.book_type, "adding book");
        self.books.push(book);
        Ok(())
    }

    /// Replace the first book with the same name, keeping its position
    pub fn update_book(&mut self, book: Book) -> Result<()> {
        let book = book.into_stored()?;
        let name = book.name.clone();
        match self.books.replace_first(&name, book) {
            Some(_) => {
                debug!(name = %name, "updated book");
                Ok(())
            }
            None => Err(BookstoreError::NotFound(BOOK_NOT_FOUND.to_string())),
        }
    }

    /// Remove the first book named `name`
    pub fn delete_book(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(BookstoreError::Validation(BLANK_BOOK_NAME.to_string()));
        }

        self.books
            .remove_first(name)
            .map(|_| debug!(name = %name, "deleted book"))
            .ok_or_else(|| BookstoreError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// Count books in stock and out of stock
    ///
    /// Returns `(in_stock, out_of_stock)`.
    pub fn count_books_available(&self) -> (usize, usize) {
        let in_stock = self.books.iter().filter(|b| b.is_in_stock).count();
        (in_stock, self.books.len() - in_stock)
    }

    // =========================================================================
    // Authors
    // =========================================================================

    /// Add an author to the registry
    ///
    /// Accepts any input unless strict author validation is enabled.
    pub fn add_author(
        &mut self,
        name: impl Into<String>,
        number_of_books_written: i64,
    ) -> Result<()> {
        let author = Author::new(name, number_of_books_written);
        if self.config.strict_author_validation {
            author.validate()?;
        }

        debug!(name = %author.name, "adding author");
        self.authors.push(author);
        Ok(())
    }

    /// Replace the first author named `name` with a copy of `author`
    ///
    /// Books already in the inventory keep their own copy of the old record.
    pub fn update_author(&mut self, name: &str, author: Author) -> Result<()> {
        if self.config.strict_author_validation {
            author.validate()?;
        }

        self.authors
            .replace_first(name, author)
            .map(|_| debug!(name = %name, "updated author"))
            .ok_or_else(|| BookstoreError::NotFound(AUTHOR_NOT_FOUND_UPDATE.to_string()))
    }

    /// Remove the first author named `name`
    pub fn delete_author(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(BookstoreError::Validation(BLANK_AUTHOR_NAME.to_string()));
        }

        self.authors
            .remove_first(name)
            .map(|_| debug!(name = %name, "deleted author"))
            .ok_or_else(|| BookstoreError::NotFound(AUTHOR_NOT_FOUND_DELETE.to_string()))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Books in insertion order
    pub fn books(&self) -> &[Book] {
        self.books.as_slice()
    }

    /// Authors in insertion order
    pub fn authors(&self) -> &[Author] {
        self.authors.as_slice()
    }

    /// First book named `name`
    pub fn find_book(&self, name: &str) -> Option<&Book> {
        self.books.get(name)
    }

    /// First author named `name`
    pub fn find_author(&self, name: &str) -> Option<&Author> {
        self.authors.get(name)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// True when there are no books and no authors
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.authors.is_empty()
    }

    /// Value copy of both sequences
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            authors: self.authors.as_slice().to_vec(),
            books: self.books.as_slice().to_vec(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Bookstore {
    fn default() -> Self {
        Self::new()
    }
}
