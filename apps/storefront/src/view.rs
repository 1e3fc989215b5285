//! # View Renderer
//!
//! Renders the whole screen (header, product list, cart) to any
//! `io::Write` target after every state change.
//!
//! ## Layout
//! ```text
//! ── Tally Demo Store ──
//!
//! ╭────┬────────────┬─────────╮
//! │ Id │ Product    │   Price │        product list
//! ╰────┴────────────┴─────────╯
//!
//! ╭────┬────────────┬─────────┬─────┬──────────╮
//! │ Id │ Product    │   Price │ Qty │ Subtotal │   cart lines
//! ╰────┴────────────┴─────────┴─────┴──────────╯
//! Items: 3
//! Total: $2199.97
//! ```
//!
//! An empty cart renders a one-line message where the cart table and
//! total would be. Rendering to a `Vec<u8>` in tests and to stdout in
//! the REPL gives the same bytes, so the tests read exactly what a
//! shopper sees.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use tally_core::{CartTotals, Session};

use crate::config::StoreConfig;

/// Message shown in place of the cart table when there is nothing in it.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Renders the full view for the current session state.
pub fn render(
    mut out: impl io::Write,
    config: &StoreConfig,
    session: &Session,
) -> io::Result<()> {
    render_header(&mut out, config)?;
    render_products(&mut out, config, session)?;
    render_cart(&mut out, config, session)?;
    Ok(())
}

fn render_header(out: &mut impl io::Write, config: &StoreConfig) -> io::Result<()> {
    writeln!(out, "\n── {} ──", config.store_name)
}

fn render_products(
    out: &mut impl io::Write,
    config: &StoreConfig,
    session: &Session,
) -> io::Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["Id", "Product", "Price"]);

    for product in session.catalog().iter() {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            config.format_price(product.price()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..3), Alignment::right());

    writeln!(out, "\n{table}")
}

fn render_cart(
    out: &mut impl io::Write,
    config: &StoreConfig,
    session: &Session,
) -> io::Result<()> {
    let cart = session.cart();

    if cart.is_empty() {
        return writeln!(out, "\n{EMPTY_CART_MESSAGE}\n");
    }

    let mut builder = Builder::default();
    builder.push_record(["Id", "Product", "Price", "Qty", "Subtotal"]);

    for line in cart.lines() {
        builder.push_record([
            line.product.id.to_string(),
            line.product.name.clone(),
            config.format_price(line.product.price()),
            line.quantity.to_string(),
            config.format_price(line.subtotal()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    let totals = CartTotals::from(cart);

    writeln!(out, "\n{table}")?;
    writeln!(out, "Items: {}", totals.total_quantity)?;
    writeln!(out, "Total: {}\n", config.format_price(cart.total()))
}

// =============================================================================
// Unit Tests
// =============================================================================
