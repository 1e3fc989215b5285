//! # Shell Error Types
//!
//! Errors for the storefront shell. Command parsing gets its own type so
//! the REPL can print it and keep going; `AppError` is for failures that
//! end the run (startup, terminal I/O).

use std::path::PathBuf;

use tally_core::CatalogError;
use thiserror::Error;

// =============================================================================
// Command Error
// =============================================================================

/// Unparseable shell input.
///
/// Every variant's message is shown verbatim at the prompt, so they are
/// written for the shopper, not the developer.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    /// Input did not start with a known command word.
    #[error("Unknown command: {0} (type 'help' for the list)")]
    UnknownCommand(String),

    /// A command that needs a product id was not given one.
    #[error("Missing product id (usage: {usage})")]
    MissingProductId { usage: &'static str },

    /// The product id argument was not a number.
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    /// A command that needs a quantity was not given one.
    #[error("Missing quantity (usage: {usage})")]
    MissingQuantity { usage: &'static str },

    /// The quantity argument was not a number.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// The quantity argument parsed but was zero or negative, for a
    /// command that needs at least one unit.
    #[error("Quantity must be at least 1, got {0}")]
    QuantityNotPositive(i64),

    /// The quantity argument parsed but was negative, for a command
    /// where zero is meaningful.
    #[error("Quantity cannot be negative, got {0}")]
    NegativeQuantity(i64),
}

// =============================================================================
// App Error
// =============================================================================

/// Failures that end the run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog text could not be parsed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Catalog file could not be read.
    #[error("Failed to read catalog file {}: {}", .path.display(), .source)]
    CatalogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_messages_are_user_facing() {
        let err = CommandError::UnknownCommand("checkout".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown command: checkout (type 'help' for the list)"
        );

        let err = CommandError::QuantityNotPositive(0);
        assert_eq!(err.to_string(), "Quantity must be at least 1, got 0");
    }
}
