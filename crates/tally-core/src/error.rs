//! # Error Types
//!
//! Domain error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                          │
//! │  └── CatalogError     - Catalog loading failures                        │
//! │                                                                         │
//! │  storefront errors (app crate)                                          │
//! │  ├── CommandError     - Unparseable shell input                         │
//! │  └── AppError         - Startup and I/O failures                        │
//! │                                                                         │
//! │  Cart mutations have NO error type: bad ids are silent no-ops,         │
//! │  so there is nothing for them to return.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog loading errors.
///
/// The only fallible operation in the whole core: turning external text
/// into a product list. Everything downstream of a loaded catalog is
/// infallible.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog text is not a valid JSON product array.
    ///
    /// ## When This Occurs
    /// - The file behind `TALLY_CATALOG` is malformed
    /// - A product entry is missing `id`, `name`, or `price_cents`
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================
