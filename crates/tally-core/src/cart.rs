//! # Cart Module
//!
//! The in-memory shopping cart: ordered lines, one per product, each
//! carrying a frozen product snapshot.
//!
//! ## Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                            Cart                                     │
//! │                                                                     │
//! │   lines (insertion order, one per product id)                       │
//! │   ┌───────────────────────────────────────────────────────────┐    │
//! │   │ CartLine                                                  │    │
//! │   │   product   - snapshot taken when first added             │    │
//! │   │   quantity  - bumped on repeat adds                       │    │
//! │   │   added_at  - when the line was created                   │    │
//! │   │   subtotal() = price × quantity                           │    │
//! │   └───────────────────────────────────────────────────────────┘    │
//! │   ┌───────────────────────────────────────────────────────────┐    │
//! │   │ CartLine ...                                              │    │
//! │   └───────────────────────────────────────────────────────────┘    │
//! │                                                                     │
//! │   total() = Σ subtotal                                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Model
//! Mutations never fail. Removing an absent product, or adjusting a line
//! that does not exist, leaves the cart untouched and returns nothing.
//! There is no occasion for a `Result` here.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{Product, ProductId};
use crate::money::Money;

// =============================================================================
// Cart Line
// =============================================================================

/// One line in the cart: a product snapshot plus a quantity.
///
/// ## Why Snapshot the Product?
/// The line copies the product wholesale instead of holding an id into
/// the catalog. The price a shopper saw when they added the item is the
/// price the line keeps, whatever happens to the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    /// Frozen copy of the product as it was when first added.
    pub product: Product,

    /// Units of this product in the cart. Always positive.
    pub quantity: i64,

    /// When this line was created.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line by snapshotting a catalog product.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product: product.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart for a session.
///
/// Lines keep insertion order. Adding a product already in the cart bumps
/// its existing line rather than appending a duplicate, and the bumped
/// line keeps its original position.
#[derive(Debug, Clone, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When this cart was created.
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` units of a product.
    ///
    /// ## Behavior
    /// - Product already in the cart: its line's quantity grows by
    ///   `quantity`; the line stays where it was.
    /// - New product: a snapshot line is appended at the end.
    ///
    /// Quantity must be positive. The command layer rejects anything
    /// else before it gets here.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        debug_assert!(quantity > 0, "add_item requires a positive quantity");

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine::from_product(product, quantity));
        }
    }

    /// Removes the entire line for a product, whatever its quantity.
    ///
    /// Ids with no line in the cart are ignored.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Sets the quantity of an existing line directly.
    ///
    /// A quantity of zero (or less) removes the line. Ids with no line
    /// in the cart are ignored.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empties the cart and restarts its timestamp.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total unit count across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Returns the sum of all line subtotals.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Summary numbers for a cart, computed in one pass.
///
/// ## Example
/// ```
/// use tally_core::{Cart, CartTotals, Product, ProductId};
///
/// let mut cart = Cart::new();
/// cart.add_item(&Product::new(ProductId::new(1), "Laptop", 99999), 2);
///
/// let totals = CartTotals::from(&cart);
/// assert_eq!(totals.grand_total_cents, 199998);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Distinct lines in the cart.
    pub line_count: usize,

    /// Units across all lines.
    pub total_quantity: i64,

    /// Grand total in cents.
    pub grand_total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            grand_total_cents: cart.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
