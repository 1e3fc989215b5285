//! # Session Module
//!
//! The app context: one catalog, one cart, and the action dispatch that
//! connects them.
//!
//! ## Data Flow
//! ```text
//! ┌──────────────┐    CartAction     ┌───────────────────────────────┐
//! │  Shell / UI  │ ────────────────► │           Session             │
//! │  (any front) │                   │                               │
//! └──────────────┘                   │  catalog ──lookup──┐          │
//!                                    │                    ▼          │
//!                                    │  cart ◄──mutate── dispatch    │
//!                                    └───────────────────────────────┘
//! ```
//!
//! ## Why Actions Instead of Direct Calls?
//! Fronts describe *what happened* ("shopper asked for product 3") as a
//! plain value and hand it over. The session owns the rule that an add
//! must go through the catalog first. Any front that can build a
//! `CartAction` gets identical behavior, and tests drive the whole state
//! machine without a UI in sight.

use crate::cart::Cart;
use crate::catalog::{Catalog, ProductId};

// =============================================================================
// Cart Action
// =============================================================================

/// A state change requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Add `quantity` units of the product with this id.
    AddProduct { id: ProductId, quantity: i64 },

    /// Remove the product's entire line.
    RemoveProduct { id: ProductId },

    /// Set the product's line to an exact quantity (zero removes it).
    SetQuantity { id: ProductId, quantity: i64 },

    /// Empty the cart.
    ClearCart,
}

// =============================================================================
// Session
// =============================================================================

/// Owns the catalog and cart for one run of the app.
///
/// ## Example
/// ```
/// use tally_core::{Catalog, CartAction, Product, ProductId, Session};
///
/// let catalog = Catalog::new(vec![
///     Product::new(ProductId::new(1), "Laptop", 99999),
/// ]);
/// let mut session = Session::new(catalog);
///
/// session.dispatch(CartAction::AddProduct {
///     id: ProductId::new(1),
///     quantity: 2,
/// });
/// assert_eq!(session.cart().total().cents(), 199998);
/// ```
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
}

impl Session {
    /// Creates a session over a catalog, with an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        Session {
            catalog,
            cart: Cart::new(),
        }
    }

    /// Returns the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Applies an action to the cart.
    ///
    /// ## Behavior
    /// Actions naming an id the catalog (for adds) or cart (for the
    /// rest) does not know are ignored outright. Dispatch never fails
    /// and never panics.
    pub fn dispatch(&mut self, action: CartAction) {
        match action {
            CartAction::AddProduct { id, quantity } => {
                if let Some(product) = self.catalog.get(id) {
                    self.cart.add_item(product, quantity);
                }
            }
            CartAction::RemoveProduct { id } => {
                self.cart.remove_item(id);
            }
            CartAction::SetQuantity { id, quantity } => {
                self.cart.set_quantity(id, quantity);
            }
            CartAction::ClearCart => {
                self.cart.clear();
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn test_session() -> Session {
        Session::new(Catalog::new(vec![
            Product::new(ProductId::new(1), "Laptop", 99999),
            Product::new(ProductId::new(3), "Headphones", 19999),
        ]))
    }

    fn add(id: u32, quantity: i64) -> CartAction {
        CartAction::AddProduct {
            id: ProductId::new(id),
            quantity,
        }
    }

    #[test]
    fn test_dispatch_add_puts_product_in_cart() {
        let mut session = test_session();
        session.dispatch(add(1, 1));

        assert_eq!(session.cart().line_count(), 1);
        assert_eq!(session.cart().total(), Money::from_cents(99999));
    }

    #[test]
    fn test_dispatch_add_unknown_id_is_noop() {
        let mut session = test_session();
        session.dispatch(add(42, 1));

        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_dispatch_remove_unknown_id_is_noop() {
        let mut session = test_session();
        session.dispatch(add(1, 1));
        session.dispatch(CartAction::RemoveProduct {
            id: ProductId::new(42),
        });

        assert_eq!(session.cart().line_count(), 1);
    }

    #[test]
    fn test_dispatch_set_quantity() {
        let mut session = test_session();
        session.dispatch(add(3, 1));
        session.dispatch(CartAction::SetQuantity {
            id: ProductId::new(3),
            quantity: 4,
        });

        assert_eq!(session.cart().total(), Money::from_cents(79996));
    }

    #[test]
    fn test_dispatch_clear() {
        let mut session = test_session();
        session.dispatch(add(1, 2));
        session.dispatch(add(3, 1));
        session.dispatch(CartAction::ClearCart);

        assert!(session.cart().is_empty());
    }

    /// The same walk as the cart-level test, driven through actions the
    /// way a front would issue them.
    #[test]
    fn test_dispatch_full_shopping_walk() {
        let mut session = test_session();

        session.dispatch(add(1, 1));
        assert_eq!(session.cart().total(), Money::from_cents(99999));

        session.dispatch(add(1, 1));
        assert_eq!(session.cart().total(), Money::from_cents(199998));

        session.dispatch(add(3, 1));
        assert_eq!(session.cart().total(), Money::from_cents(219997));

        session.dispatch(CartAction::RemoveProduct {
            id: ProductId::new(1),
        });
        assert_eq!(session.cart().total(), Money::from_cents(19999));

        session.dispatch(CartAction::RemoveProduct {
            id: ProductId::new(1),
        });
        assert_eq!(session.cart().total(), Money::from_cents(19999));
        assert_eq!(session.cart().line_count(), 1);
    }
}
