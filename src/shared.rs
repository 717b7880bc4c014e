//! Shared access
//!
//! A bookstore behind one exclusive lock, for callers with more than one
//! thread. Every operation takes the lock for its whole duration, so
//! validation and mutation are never interleaved with another caller.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::bookstore::Bookstore;
use crate::error::Result;
use crate::model::{Author, Book};
use crate::request::{Command, Response};
use crate::snapshot::InventorySnapshot;

/// Cloneable handle to a locked bookstore
#[derive(Debug, Clone, Default)]
pub struct SharedBookstore {
    inner: Arc<Mutex<Bookstore>>,
}

impl SharedBookstore {
    pub fn new(bookstore: Bookstore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bookstore)),
        }
    }

    /// Run `f` with exclusive access to the bookstore
    pub fn with<R>(&self, f: impl FnOnce(&mut Bookstore) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn execute(&self, command: Command) -> Result<Response> {
        self.inner.lock().execute(command)
    }

    pub fn add_book(&self, book: Book) -> Result<()> {
        self.inner.lock().add_book(book)
    }

    pub fn add_author(&self, name: impl Into<String>, number_of_books_written: i64) -> Result<()> {
        self.inner.lock().add_author(name, number_of_books_written)
    }

    pub fn update_book(&self, book: Book) -> Result<()> {
        self.inner.lock().update_book(book)
    }

    pub fn update_author(&self, name: &str, author: Author) -> Result<()> {
        self.inner.lock().update_author(name, author)
    }

    pub fn delete_book(&self, name: &str) -> Result<()> {
        self.inner.lock().delete_book(name)
    }

    pub fn delete_author(&self, name: &str) -> Result<()> {
        self.inner.lock().delete_author(name)
    }

    pub fn count_books_available(&self) -> (usize, usize) {
        self.inner.lock().count_books_available()
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        self.inner.lock().snapshot()
    }
}

impl From<Bookstore> for SharedBookstore {
    fn from(bookstore: Bookstore) -> Self {
        Self::new(bookstore)
    }
}
