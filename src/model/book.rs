//! Book record
//!
//! Inventory entries and the checks applied before they are stored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{
    BookstoreError, Result, BLANK_BOOK_NAME, NEGATIVE_PAGES, NEGATIVE_PRICE, NON_FINITE_PRICE,
};
use super::{Author, Keyed};

/// Price stored for every rental, whatever was supplied
pub const RENTAL_PRICE: f64 = 0.00;

/// Kind of inventory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookType {
    EBook,
    PhysicalCopy,
    /// Rentals are never sold; their price is pinned to `RENTAL_PRICE`
    Rental,
}

impl BookType {
    pub fn label(&self) -> &'static str {
        match self {
            BookType::EBook => "eBook",
            BookType::PhysicalCopy => "Physical",
            BookType::Rental => "Rental",
        }
    }
}

impl fmt::Display for BookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A book in the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Lookup key. Not required to be unique.
    pub name: String,

    pub book_type: BookType,

    pub num_pages: i64,

    pub price: f64,

    pub is_in_stock: bool,

    pub is_best_selling: bool,

    /// Snapshot of the author at the time the book was added or updated
    pub author: Author,
}

impl Book {
    /// Create a book that is out of stock and not a best seller
    pub fn new(
        name: impl Into<String>,
        book_type: BookType,
        num_pages: i64,
        price: f64,
        author: Author,
    ) -> Self {
        Self {
            name: name.into(),
            book_type,
            num_pages,
            price,
            is_in_stock: false,
            is_best_selling: false,
            author,
        }
    }

    /// Set the stock flag
    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.is_in_stock = in_stock;
        self
    }

    /// Set the best-seller flag
    pub fn best_selling(mut self, best_selling: bool) -> Self {
        self.is_best_selling = best_selling;
        self
    }

    /// Check the fields required of every stored book
    ///
    /// Order matters for the reported message: name, then pages, then price.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(BookstoreError::Validation(BLANK_BOOK_NAME.to_string()));
        }

        if self.num_pages < 0 {
            return Err(BookstoreError::Validation(NEGATIVE_PAGES.to_string()));
        }

        if self.price < 0.0 {
            return Err(BookstoreError::Validation(NEGATIVE_PRICE.to_string()));
        }

        if !self.price.is_finite() {
            return Err(BookstoreError::Validation(NON_FINITE_PRICE.to_string()));
        }

        Ok(())
    }

    /// Validate and apply the rental price rule, producing the stored form
    pub(crate) fn into_stored(mut self) -> Result<Self> {
        self.validate()?;
        if self.book_type == BookType::Rental {
            self.price = RENTAL_PRICE;
        }
        Ok(self)
    }
}

impl Keyed for Book {
    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} pages, ${:.2}, {}{}, by {}",
            self.name,
            self.book_type,
            self.num_pages,
            self.price,
            if self.is_in_stock { "in stock" } else { "out of stock" },
            if self.is_best_selling { ", best seller" } else { "" },
            self.author,
        )
    }
}
