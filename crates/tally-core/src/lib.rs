//! # tally-core: Pure Cart Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains the catalog, cart,
//! and checkout math as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront Shell (terminal)                    │   │
//! │  │    prompt ──► parse command ──► CartAction ──► render view     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │  session  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ dispatch  │  │   │
//! │  │   │ ProductId │  │   cents   │  │ CartLine  │  │  actions  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO CLOCK BEYOND TIMESTAMPS • PURE     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Product, ProductId, and the fixed Catalog
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and CartLine with snapshot pricing
//! - [`session`] - CartAction dispatch over one catalog + cart pair
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Math**: Totals are plain integer arithmetic - same lines, same total
//! 2. **No I/O**: Terminal, file system, network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **No-op Tolerance**: Cart mutations with unknown ids do nothing, never error
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Catalog, CartAction, Product, ProductId, Session};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new(ProductId::new(1), "Laptop", 99999),  // $999.99
//!     Product::new(ProductId::new(3), "Headphones", 19999), // $199.99
//! ]);
//! let mut session = Session::new(catalog);
//!
//! // Two adds of the same product merge into one line.
//! session.dispatch(CartAction::AddProduct { id: ProductId::new(1), quantity: 1 });
//! session.dispatch(CartAction::AddProduct { id: ProductId::new(1), quantity: 1 });
//! assert_eq!(session.cart().line_count(), 1);
//! assert_eq!(session.cart().total().cents(), 199998);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod session;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Cart` instead of
// `use tally_core::cart::Cart`

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Catalog, Product, ProductId};
pub use error::CatalogError;
pub use money::Money;
pub use session::{CartAction, Session};
