//! Snapshot Module
//!
//! Point-in-time value copies of a bookstore, and a checksummed binary
//! frame for moving them around. Nothing here touches the filesystem.
//!
//! ## Frame Format
//! ```text
//! ┌──────────┬─────────────┬─────────┬─────────┬──────────────────────┐
//! │Magic (4) │ Version (4) │ CRC (4) │ Len (4) │ Body (bincode)       │
//! └──────────┴─────────────┴─────────┴─────────┴──────────────────────┘
//! ```
//! All integers are little-endian. The CRC covers the body only.

mod codec;

use serde::{Deserialize, Serialize};

use crate::model::{Author, Book};

pub use codec::{decode, encode};

/// Magic bytes at the start of every frame
pub const MAGIC: &[u8; 4] = b"BKSN";

/// Frame format version
pub const VERSION: u32 = 1;

/// Header size: magic (4) + version (4) + crc (4) + body length (4)
pub const HEADER_SIZE: usize = 16;

/// Value copy of both bookstore sequences, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
}

impl InventorySnapshot {
    /// Encode into a checksummed frame
    pub fn encode(&self) -> crate::Result<Vec<u8>> {
        encode(self)
    }

    /// Decode and verify a frame produced by [`InventorySnapshot::encode`]
    pub fn decode(bytes: &[u8]) -> crate::Result<Self> {
        decode(bytes)
    }
}
