//! Bookstore Demo Binary
//!
//! Replays a fixed inventory script and logs the resulting collections.

use bookstore::{Author, Book, BookType, Bookstore, Command, Response};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    tracing::info!("Bookstore Inventory management v{}", bookstore::VERSION);

    let mut store = Bookstore::new();
    tracing::info!(
        "Strict author validation: {}",
        store.config().strict_author_validation
    );

    run(&mut store, opening_script());
    log_inventory(&store);

    run(&mut store, closing_script());
    log_inventory(&store);
}

/// Add the author and the four books (the last one carries a negative price)
fn opening_script() -> Vec<Command> {
    let tolkien = Author::new("JRR Tolkien", 12);

    vec![
        Command::AddAuthor {
            name: tolkien.name.clone(),
            number_of_books_written: tolkien.number_of_books_written,
        },
        Command::AddBook {
            book: Book::new("Lord of The Rings", BookType::EBook, 1_000, 19.99, tolkien.clone())
                .in_stock(true)
                .best_selling(true),
        },
        Command::AddBook {
            book: Book::new("The Hobbit", BookType::PhysicalCopy, 1_000, 39.99, tolkien.clone())
                .best_selling(true),
        },
        Command::AddBook {
            book: Book::new("The Hobbit: Rental", BookType::Rental, 1_000, 19.99, tolkien.clone()),
        },
        Command::AddBook {
            book: Book::new("The Hobbit: Rental", BookType::Rental, 1_000, -1.0, tolkien)
                .in_stock(true),
        },
        Command::CountAvailable,
    ]
}

/// Turn the rental into a physical copy by another author, then drop the eBook
fn closing_script() -> Vec<Command> {
    vec![
        Command::UpdateBook {
            book: Book::new(
                "The Hobbit: Rental",
                BookType::PhysicalCopy,
                1_000,
                20.19,
                Author::new("Dr Suess", 60),
            )
            .in_stock(true),
        },
        Command::DeleteBook {
            name: "Lord of The Rings".to_string(),
        },
        Command::CountAvailable,
    ]
}

fn run(store: &mut Bookstore, script: Vec<Command>) {
    for command in script {
        let target = command.target().unwrap_or("-").to_string();
        match store.execute(command) {
            Ok(Response::Done) => tracing::info!("{}: ok", target),
            Ok(Response::Counts {
                in_stock,
                out_of_stock,
            }) => {
                tracing::info!("Total books available: {}", in_stock);
                tracing::info!("Total books unavailable: {}", out_of_stock);
            }
            Err(e) => tracing::info!("{}: {}", target, e),
        }
    }
}

fn log_inventory(store: &Bookstore) {
    tracing::info!("Inventory ({} books):", store.book_count());
    for book in store.books() {
        tracing::info!("  {}", book);
    }
}
