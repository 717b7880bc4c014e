//! SharedBookstore Tests
//!
//! Tests verify that the locked handle forwards operations and keeps every
//! record when several threads write at once.

use std::thread;

use bookstore::{Author, Book, BookType, Bookstore, Command, Response, SharedBookstore};

#[test]
fn test_shared_forwards_operations() {
    let shared = SharedBookstore::new(Bookstore::new());

    shared.add_author("JRR Tolkien", 12).unwrap();
    shared
        .add_book(Book::new(
            "The Hobbit",
            BookType::PhysicalCopy,
            310,
            39.99,
            Author::new("JRR Tolkien", 12),
        ))
        .unwrap();
    shared
        .update_author("JRR Tolkien", Author::new("JRR Tolkien", 13))
        .unwrap();

    assert_eq!(shared.count_books_available(), (0, 1));
    assert_eq!(
        shared.execute(Command::CountAvailable).unwrap(),
        Response::Counts {
            in_stock: 0,
            out_of_stock: 1
        }
    );

    shared.delete_book("The Hobbit").unwrap();
    shared.delete_author("JRR Tolkien").unwrap();
    assert!(shared.with(|store| store.is_empty()));
}

#[test]
fn test_concurrent_adds_keep_every_record() {
    let shared = SharedBookstore::default();
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..per_thread {
                    let book = Book::new(
                        format!("book-{}-{}", t, i),
                        BookType::EBook,
                        100,
                        1.0,
                        Author::new("anon", 0),
                    )
                    .in_stock(i % 2 == 0);
                    shared.add_book(book).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.books.len(), threads * per_thread);
    assert_eq!(
        shared.count_books_available(),
        (threads * per_thread / 2, threads * per_thread / 2)
    );
}

#[test]
fn test_with_runs_under_lock() {
    let shared: SharedBookstore = Bookstore::new().into();

    shared.with(|store| {
        store.add_author("a", 1).unwrap();
        store.update_author("a", Author::new("b", 2)).unwrap();
    });

    assert_eq!(shared.with(|store| store.authors().to_vec()), vec![Author::new("b", 2)]);
}
