//! # Command Parser
//!
//! Turns a line of shell input into a [`Command`].
//!
//! ## Grammar
//! ```text
//! add <id> [qty]      add qty units (default 1) of product <id>
//! remove <id>         drop product <id> from the cart entirely
//! rm <id>             alias for remove
//! qty <id> <n>        set product <id> to exactly n units (0 removes)
//! clear               empty the cart
//! help                show this list
//! quit | exit | q     leave the shell
//! ```
//!
//! Command words are case-insensitive. Extra trailing words are ignored,
//! the same way the seeding tools skip arguments they do not know.
//!
//! ## Where Validation Lives
//! The parser is the gate for quantity signs: an `add` below 1 or a
//! `qty` below 0 never reaches the session. Unknown product *ids* are
//! not its business; those flow through and land as cart no-ops.

use tally_core::{CartAction, ProductId};

use crate::error::CommandError;

const USAGE_ADD: &str = "add <id> [qty]";
const USAGE_REMOVE: &str = "remove <id>";
const USAGE_QTY: &str = "qty <id> <n>";

/// Help text printed by the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  add <id> [qty]    Add qty units (default 1) of a product to the cart
  remove <id>       Remove a product's line from the cart (alias: rm)
  qty <id> <n>      Set a product's line to exactly n units (0 removes)
  clear             Empty the cart
  help              Show this list
  quit              Leave the shell (aliases: exit, q)";

// =============================================================================
// Command
// =============================================================================

/// A parsed line of shell input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A cart mutation, handed to the session as-is.
    Action(CartAction),

    /// Print the command list.
    Help,

    /// Leave the shell.
    Quit,
}

impl Command {
    /// Parses one line of input.
    ///
    /// ## Errors
    /// Returns a [`CommandError`] with a printable message when the line
    /// does not fit the grammar. The cart is untouched either way.
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let mut words = input.split_whitespace();

        let word = words
            .next()
            .ok_or_else(|| CommandError::UnknownCommand(input.trim().to_string()))?;

        match word.to_ascii_lowercase().as_str() {
            "add" => {
                let id = parse_id(words.next(), USAGE_ADD)?;
                let quantity = match words.next() {
                    Some(raw) => parse_positive_quantity(raw)?,
                    None => 1,
                };
                Ok(Command::Action(CartAction::AddProduct { id, quantity }))
            }
            "remove" | "rm" => {
                let id = parse_id(words.next(), USAGE_REMOVE)?;
                Ok(Command::Action(CartAction::RemoveProduct { id }))
            }
            "qty" => {
                let id = parse_id(words.next(), USAGE_QTY)?;
                let raw = words
                    .next()
                    .ok_or(CommandError::MissingQuantity { usage: USAGE_QTY })?;
                let quantity = parse_exact_quantity(raw)?;
                Ok(Command::Action(CartAction::SetQuantity { id, quantity }))
            }
            "clear" => Ok(Command::Action(CartAction::ClearCart)),
            "help" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

// =============================================================================
// Argument Parsing
// =============================================================================

fn parse_id(word: Option<&str>, usage: &'static str) -> Result<ProductId, CommandError> {
    let word = word.ok_or(CommandError::MissingProductId { usage })?;
    word.parse::<ProductId>()
        .map_err(|_| CommandError::InvalidProductId(word.to_string()))
}

/// Quantity for `add`: must be 1 or more.
fn parse_positive_quantity(raw: &str) -> Result<i64, CommandError> {
    let quantity: i64 = raw
        .parse()
        .map_err(|_| CommandError::InvalidQuantity(raw.to_string()))?;
    if quantity <= 0 {
        return Err(CommandError::QuantityNotPositive(quantity));
    }
    Ok(quantity)
}

/// Quantity for `qty`: zero is allowed (it removes the line).
fn parse_exact_quantity(raw: &str) -> Result<i64, CommandError> {
    let quantity: i64 = raw
        .parse()
        .map_err(|_| CommandError::InvalidQuantity(raw.to_string()))?;
    if quantity < 0 {
        return Err(CommandError::NegativeQuantity(quantity));
    }
    Ok(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn test_parse_add_defaults_to_one_unit() {
        assert_eq!(
            Command::parse("add 1").unwrap(),
            Command::Action(CartAction::AddProduct {
                id: id(1),
                quantity: 1
            })
        );
    }

    #[test]
    fn test_parse_add_with_quantity() {
        assert_eq!(
            Command::parse("add 3 5").unwrap(),
            Command::Action(CartAction::AddProduct {
                id: id(3),
                quantity: 5
            })
        );
    }

    #[test]
    fn test_parse_remove_and_alias() {
        let expected = Command::Action(CartAction::RemoveProduct { id: id(2) });
        assert_eq!(Command::parse("remove 2").unwrap(), expected);
        assert_eq!(Command::parse("rm 2").unwrap(), expected);
    }

    #[test]
    fn test_parse_qty_allows_zero() {
        assert_eq!(
            Command::parse("qty 1 0").unwrap(),
            Command::Action(CartAction::SetQuantity {
                id: id(1),
                quantity: 0
            })
        );
    }

    #[test]
    fn test_parse_clear_help_quit() {
        assert_eq!(
            Command::parse("clear").unwrap(),
            Command::Action(CartAction::ClearCart)
        );
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            Command::parse("ADD 1").unwrap(),
            Command::Action(CartAction::AddProduct {
                id: id(1),
                quantity: 1
            })
        );
        assert_eq!(Command::parse("Quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(
            Command::parse("  add   2   3  ").unwrap(),
            Command::Action(CartAction::AddProduct {
                id: id(2),
                quantity: 3
            })
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            Command::parse("checkout"),
            Err(CommandError::UnknownCommand("checkout".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_id() {
        assert_eq!(
            Command::parse("add"),
            Err(CommandError::MissingProductId { usage: USAGE_ADD })
        );
        assert_eq!(
            Command::parse("remove"),
            Err(CommandError::MissingProductId {
                usage: USAGE_REMOVE
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_id() {
        assert_eq!(
            Command::parse("add laptop"),
            Err(CommandError::InvalidProductId("laptop".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_non_positive_add_quantity() {
        assert_eq!(
            Command::parse("add 1 0"),
            Err(CommandError::QuantityNotPositive(0))
        );
        assert_eq!(
            Command::parse("add 1 -2"),
            Err(CommandError::QuantityNotPositive(-2))
        );
        assert_eq!(
            Command::parse("add 1 many"),
            Err(CommandError::InvalidQuantity("many".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_negative_qty_command() {
        assert_eq!(
            Command::parse("qty 1 -1"),
            Err(CommandError::NegativeQuantity(-1))
        );
        assert_eq!(
            Command::parse("qty 1"),
            Err(CommandError::MissingQuantity { usage: USAGE_QTY })
        );
    }
}
