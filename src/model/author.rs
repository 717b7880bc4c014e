//! Author record

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BookstoreError, Result, BLANK_AUTHOR_NAME, NEGATIVE_BOOKS_WRITTEN};
use super::Keyed;

/// An author in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Lookup key. Not required to be unique.
    pub name: String,

    /// Books this author has written
    pub number_of_books_written: i64,
}

impl Author {
    pub fn new(name: impl Into<String>, number_of_books_written: i64) -> Self {
        Self {
            name: name.into(),
            number_of_books_written,
        }
    }

    /// Field checks applied only when strict author validation is enabled
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(BookstoreError::Validation(BLANK_AUTHOR_NAME.to_string()));
        }

        if self.number_of_books_written < 0 {
            return Err(BookstoreError::Validation(NEGATIVE_BOOKS_WRITTEN.to_string()));
        }

        Ok(())
    }
}

impl Keyed for Author {
    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} books)", self.name, self.number_of_books_written)
    }
}
