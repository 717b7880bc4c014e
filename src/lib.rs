//! # Bookstore
//!
//! An in-memory bookstore inventory with:
//! - An author registry and a book inventory, both in insertion order
//! - Field validation before every mutation
//! - First-match update and delete by name
//! - In-stock / out-of-stock counts
//! - Checksummed snapshots of the whole inventory
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 SharedBookstore (optional)                   │
//! │                    (single Mutex)                            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Bookstore                                │
//! │          (validation, Command routing, counts)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Registry   │          │  Registry   │
//!   │  <Author>   │          │   <Book>    │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │  Snapshot   │
//!                           │ (CRC frame) │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod registry;
pub mod request;
pub mod snapshot;
pub mod bookstore;
pub mod shared;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BookstoreError, Result};
pub use config::Config;
pub use bookstore::Bookstore;
pub use model::{Author, Book, BookType};
pub use request::{Command, Response};
pub use shared::SharedBookstore;
pub use snapshot::InventorySnapshot;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the bookstore crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
