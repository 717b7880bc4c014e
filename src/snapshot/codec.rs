//! Snapshot codec
//!
//! Encoding and decoding of snapshot frames.

use crate::error::{BookstoreError, Result};

use super::{InventorySnapshot, HEADER_SIZE, MAGIC, VERSION};

/// Encode a snapshot
///
/// Format: magic (4) + version (4) + crc (4) + body_len (4) + body
pub fn encode(snapshot: &InventorySnapshot) -> Result<Vec<u8>> {
    let body = bincode::serialize(snapshot)
        .map_err(|e| BookstoreError::Serialization(e.to_string()))?;

    let body_len = u32::try_from(body.len()).map_err(|_| {
        BookstoreError::Serialization(format!("snapshot body too large: {} bytes", body.len()))
    })?;

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&body);
    let crc = hasher.finalize();

    let mut frame = Vec::with_capacity(HEADER_SIZE + body.len());
    frame.extend_from_slice(MAGIC);
    frame.extend_from_slice(&VERSION.to_le_bytes());
    frame.extend_from_slice(&crc.to_le_bytes());
    frame.extend_from_slice(&body_len.to_le_bytes());
    frame.extend_from_slice(&body);

    Ok(frame)
}

/// Decode and verify a snapshot frame
pub fn decode(bytes: &[u8]) -> Result<InventorySnapshot> {
    if bytes.len() < HEADER_SIZE {
        return Err(BookstoreError::Corruption(format!(
            "frame too short: {} bytes, need at least {}",
            bytes.len(),
            HEADER_SIZE
        )));
    }

    if &bytes[0..4] != MAGIC {
        return Err(BookstoreError::Corruption("bad magic".to_string()));
    }

    let version = read_u32(bytes, 4);
    if version != VERSION {
        return Err(BookstoreError::Corruption(format!(
            "unsupported version {}",
            version
        )));
    }

    let expected_crc = read_u32(bytes, 8);
    let body_len = read_u32(bytes, 12) as usize;

    let body = &bytes[HEADER_SIZE..];
    if body.len() != body_len {
        return Err(BookstoreError::Corruption(format!(
            "body length mismatch: header says {}, found {}",
            body_len,
            body.len()
        )));
    }

    let actual_crc = crc32fast::hash(body);
    if actual_crc != expected_crc {
        return Err(BookstoreError::Corruption(format!(
            "CRC mismatch: expected {:08x}, got {:08x}",
            expected_crc, actual_crc
        )));
    }

    bincode::deserialize(body).map_err(|e| BookstoreError::Serialization(e.to_string()))
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(buf)
}
