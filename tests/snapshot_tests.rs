//! Snapshot Tests
//!
//! Tests verify:
//! - Snapshots copy both sequences in order
//! - Frames decode back to the same snapshot
//! - Corrupted or truncated frames are rejected

use bookstore::config::Config;
use bookstore::snapshot::{HEADER_SIZE, MAGIC, VERSION};
use bookstore::{Author, Book, BookType, Bookstore, BookstoreError, InventorySnapshot};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_store() -> Bookstore {
    let mut store = Bookstore::new();
    let tolkien = Author::new("JRR Tolkien", 12);
    store.add_author("JRR Tolkien", 12).unwrap();
    store.add_author("Dr Suess", 60).unwrap();
    store
        .add_book(
            Book::new("Lord of The Rings", BookType::EBook, 1000, 19.99, tolkien.clone())
                .in_stock(true)
                .best_selling(true),
        )
        .unwrap();
    store
        .add_book(Book::new("The Hobbit: Rental", BookType::Rental, 1000, 19.99, tolkien))
        .unwrap();
    store
}

// =============================================================================
// Snapshot Tests
// =============================================================================

#[test]
fn test_snapshot_is_a_value_copy() {
    let mut store = setup_store();
    let snapshot = store.snapshot();

    store.delete_book("Lord of The Rings").unwrap();

    assert_eq!(snapshot.books.len(), 2);
    assert_eq!(snapshot.books[0].name, "Lord of The Rings");
    assert_eq!(snapshot.authors.len(), 2);
}

#[test]
fn test_restore_rebuilds_store() {
    let store = setup_store();

    let restored = Bookstore::restore(Config::default(), store.snapshot()).unwrap();

    assert_eq!(restored.books(), store.books());
    assert_eq!(restored.authors(), store.authors());
    assert_eq!(restored.count_books_available(), (1, 1));
}

#[test]
fn test_restore_rejects_invalid_book_from_decoded_frame() {
    let bad_rental = Book {
        name: "R".to_string(),
        book_type: BookType::Rental,
        num_pages: -7,
        price: -3.0,
        is_in_stock: true,
        is_best_selling: false,
        author: Author::new("JRR Tolkien", 12),
    };
    let snapshot = InventorySnapshot {
        authors: Vec::new(),
        books: vec![bad_rental],
    };

    // The frame itself is intact; the record inside breaks the book rules
    let decoded = InventorySnapshot::decode(&snapshot.encode().unwrap()).unwrap();
    let err = Bookstore::restore(Config::default(), decoded).unwrap_err();

    assert_eq!(
        err,
        BookstoreError::Validation(
            "Pages cannot be negative. Check your entry and try again.".to_string()
        )
    );
}

#[test]
fn test_restore_rejects_negative_price() {
    let mut snapshot = setup_store().snapshot();
    snapshot.books[0].price = -0.01;

    let err = Bookstore::restore(Config::default(), snapshot).unwrap_err();

    assert!(err.is_validation());
}

#[test]
fn test_restore_repins_rental_price() {
    let mut snapshot = setup_store().snapshot();
    snapshot.books[1].price = 42.0;

    let restored = Bookstore::restore(Config::default(), snapshot).unwrap();

    assert_eq!(restored.find_book("The Hobbit: Rental").unwrap().price, 0.00);
}

#[test]
fn test_restore_validates_authors_in_strict_mode() {
    let mut snapshot = setup_store().snapshot();
    snapshot.authors.push(Author::new("", -1));

    // Lenient mode keeps the original author behaviour
    let lenient = Bookstore::restore(Config::default(), snapshot.clone()).unwrap();
    assert_eq!(lenient.author_count(), 3);

    let strict = Config::builder().strict_author_validation(true).build();
    let err = Bookstore::restore(strict, snapshot).unwrap_err();
    assert!(err.is_validation());
}

// =============================================================================
// Frame Tests
// =============================================================================

#[test]
fn test_encode_decode_preserves_inventory() {
    let snapshot = setup_store().snapshot();

    let frame = snapshot.encode().unwrap();
    assert_eq!(&frame[0..4], MAGIC);

    let decoded = InventorySnapshot::decode(&frame).unwrap();
    assert_eq!(decoded, snapshot);
    assert_eq!(decoded.books[1].price, 0.0);
}

#[test]
fn test_empty_snapshot_frame() {
    let frame = InventorySnapshot::default().encode().unwrap();
    assert!(frame.len() >= HEADER_SIZE);
    assert_eq!(
        InventorySnapshot::decode(&frame).unwrap(),
        InventorySnapshot::default()
    );
}

#[test]
fn test_flipped_body_byte_detected() {
    let mut frame = setup_store().snapshot().encode().unwrap();
    let last = frame.len() - 1;
    frame[last] ^= 0xFF;

    match InventorySnapshot::decode(&frame) {
        Err(BookstoreError::Corruption(msg)) => assert!(msg.contains("CRC mismatch")),
        other => panic!("Expected CRC corruption, got {:?}", other),
    }
}

#[test]
fn test_bad_magic_detected() {
    let mut frame = setup_store().snapshot().encode().unwrap();
    frame[0] = b'X';

    assert!(matches!(
        InventorySnapshot::decode(&frame),
        Err(BookstoreError::Corruption(_))
    ));
}

#[test]
fn test_unknown_version_detected() {
    let mut frame = setup_store().snapshot().encode().unwrap();
    frame[4..8].copy_from_slice(&99u32.to_le_bytes());

    match InventorySnapshot::decode(&frame) {
        Err(BookstoreError::Corruption(msg)) => assert!(msg.contains("version 99")),
        other => panic!("Expected version corruption, got {:?}", other),
    }
}

#[test]
fn test_undecodable_body_is_serialization_error() {
    // Valid header and CRC around a body that is not a bincode snapshot
    let body = [0xFFu8; 3];
    let mut frame = Vec::with_capacity(HEADER_SIZE + body.len());
    frame.extend_from_slice(MAGIC);
    frame.extend_from_slice(&VERSION.to_le_bytes());
    frame.extend_from_slice(&crc32fast::hash(&body).to_le_bytes());
    frame.extend_from_slice(&(body.len() as u32).to_le_bytes());
    frame.extend_from_slice(&body);

    assert!(matches!(
        InventorySnapshot::decode(&frame),
        Err(BookstoreError::Serialization(_))
    ));
}

#[test]
fn test_truncated_frame_detected() {
    let frame = setup_store().snapshot().encode().unwrap();

    assert!(matches!(
        InventorySnapshot::decode(&frame[..HEADER_SIZE - 1]),
        Err(BookstoreError::Corruption(_))
    ));
    assert!(matches!(
        InventorySnapshot::decode(&frame[..frame.len() - 3]),
        Err(BookstoreError::Corruption(_))
    ));
}
