//! # Catalog Module
//!
//! Product definitions and the read-only catalog they live in.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐      ┌──────────────────────────────────┐     │
//! │  │    ProductId    │      │            Product               │     │
//! │  │  ─────────────  │      │  ──────────────────────────────  │     │
//! │  │  u32 newtype    │◄─────│  id (ProductId)                  │     │
//! │  │  "3".parse()    │      │  name (String)                   │     │
//! │  └─────────────────┘      │  price_cents (i64)               │     │
//! │                           └──────────────┬───────────────────┘     │
//! │                                          │                         │
//! │                           ┌──────────────▼───────────────────┐     │
//! │                           │            Catalog               │     │
//! │                           │  ordered Vec<Product>,           │     │
//! │                           │  lookup by id, never mutated     │     │
//! │                           └──────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! The catalog is built once at startup (demo table or JSON file) and is
//! read-only for the whole session. Products are never created, mutated,
//! or destroyed after that point. Dedup of ids and price sanity are the
//! provider's responsibility; the catalog does not enforce them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Integer product identifier.
///
/// ## Why a Newtype?
/// Raw `u32`s invite mixing quantities and ids in call sites. The newtype
/// keeps "which product" and "how many" apart at compile time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product id from its raw integer value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a product id from decimal text, as typed in shell commands.
impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(ProductId)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalog.
///
/// Pure data holder: no behavior beyond field access, and no validation
/// on construction (a negative price or a duplicate id is the catalog
/// provider's mistake to make).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Display name shown in the product list and cart.
    pub name: String,

    /// Price in cents (smallest currency unit). 999.99 is 99999.
    pub price_cents: i64,
}

impl Product {
    /// Creates a product from (id, name, price).
    pub fn new(id: ProductId, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id,
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The fixed, ordered set of purchasable products for a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from an ordered product list.
    ///
    /// Insertion order is preserved and doubles as the display order.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Parses a catalog from a JSON array of products.
    ///
    /// ## File Format
    /// ```json
    /// [
    ///   { "id": 1, "name": "Laptop", "price_cents": 99999 },
    ///   { "id": 2, "name": "Headphones", "price_cents": 19999 }
    /// ]
    /// ```
    ///
    /// Prices are integer cents, never decimals, matching the rest of
    /// the money path.
    ///
    /// ## Errors
    /// Returns [`CatalogError::Parse`] when the text is not a valid
    /// product array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Catalog::new(products))
    }

    /// Looks up a product by id.
    ///
    /// Returns `None` for unknown ids; callers treat that as a no-op
    /// per the cart's error model.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterates products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Returns the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
