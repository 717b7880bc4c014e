//! Error types for the bookstore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using BookstoreError
pub type Result<T> = std::result::Result<T, BookstoreError>;

/// Unified error type for bookstore operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookstoreError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot corruption detected: {0}")]
    Corruption(String),
}

impl BookstoreError {
    /// True for precondition failures raised before any mutation
    pub fn is_validation(&self) -> bool {
        matches!(self, BookstoreError::Validation(_))
    }

    /// True when an update or delete named an absent record
    pub fn is_not_found(&self) -> bool {
        matches!(self, BookstoreError::NotFound(_))
    }
}

// =============================================================================
// Messages
// =============================================================================

pub(crate) const BLANK_BOOK_NAME: &str =
    "Cannot have a blank name for this book. Please enter a book title.";
pub(crate) const NEGATIVE_PAGES: &str =
    "Pages cannot be negative. Check your entry and try again.";
pub(crate) const NEGATIVE_PRICE: &str =
    "Price cannot be less than zero. Check your entry and try again.";
pub(crate) const NON_FINITE_PRICE: &str =
    "Price must be a finite number. Check your entry and try again.";
pub(crate) const BLANK_AUTHOR_NAME: &str =
    "Cannot have a blank name for this author. Please enter an author name.";
pub(crate) const NEGATIVE_BOOKS_WRITTEN: &str =
    "Number of books written cannot be negative. Check your entry and try again.";
pub(crate) const BOOK_NOT_FOUND: &str = "Book not found in inventory, try again.";
pub(crate) const AUTHOR_NOT_FOUND_UPDATE: &str = "Author not found, please try again.";
pub(crate) const AUTHOR_NOT_FOUND_DELETE: &str = "Author not found in inventory, try again.";
