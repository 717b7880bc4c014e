//! Registry Module
//!
//! Ordered, in-memory sequence of named records.
//!
//! ## Responsibilities
//! - Keep records in insertion order
//! - First-match lookup by name
//! - In-place replacement that keeps the position
//! - Order-preserving removal
//!
//! ## Data Structure Choice
//! A plain `Vec` with linear scans:
//! - Duplicate names are allowed, so a map would lose records
//! - Insertion order is part of the contract
//! - Future: a name -> positions index for large inventories

mod table;

pub use table::Registry;
