//! Response definitions
//!
//! Represents the successful result of a command.

/// Result of an executed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// A mutation was applied
    Done,

    /// Stock totals
    Counts { in_stock: usize, out_of_stock: usize },
}

impl Response {
    /// Create a Counts response from an `(in_stock, out_of_stock)` pair
    pub fn counts((in_stock, out_of_stock): (usize, usize)) -> Self {
        Self::Counts {
            in_stock,
            out_of_stock,
        }
    }
}
