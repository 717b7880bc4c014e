//! Request Module
//!
//! Every bookstore operation expressed as a value.
//!
//! ### Commands
//! - AddBook, UpdateBook      - Payload: full book record
//! - AddAuthor                - Payload: name + books written
//! - UpdateAuthor             - Payload: match name + replacement record
//! - DeleteBook, DeleteAuthor - Payload: name
//! - CountAvailable           - Payload: empty
//!
//! ### Responses
//! - Done:   mutation applied
//! - Counts: in-stock / out-of-stock totals

mod command;
mod response;

pub use command::{Command, CommandType};
pub use response::Response;
