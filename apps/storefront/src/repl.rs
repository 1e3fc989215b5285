//! # REPL
//!
//! The interactive loop: prompt, read a line, parse it, dispatch, redraw.
//!
//! ## Loop Shape
//! ```text
//! render full view
//!   ┌─────────────────────────────────────────────┐
//!   │ prompt "tally> "                            │
//!   │ read line ──── EOF? ──► done                │
//!   │ parse                                       │
//!   │   action ──► dispatch ──► render full view  │
//!   │   help   ──► print command list             │
//!   │   quit   ──► done                           │
//!   │   error  ──► print message, cart untouched  │
//!   └─────────────────────────────────────────────┘
//! ```
//!
//! The loop is generic over its reader and writer. The binary hands it
//! locked stdin/stdout; tests hand it byte buffers and assert on the
//! exact transcript.

use std::io::{BufRead, Write};

use tally_core::Session;
use tracing::debug;

use crate::command::{Command, HELP_TEXT};
use crate::config::StoreConfig;
use crate::error::AppError;
use crate::view;

const PROMPT: &str = "tally> ";

/// The interactive shell over one session.
pub struct Repl {
    config: StoreConfig,
    session: Session,
}

impl Repl {
    /// Creates a shell over a configured session.
    pub fn new(config: StoreConfig, session: Session) -> Self {
        Repl { config, session }
    }

    /// Runs until `quit` or end of input.
    ///
    /// Blank lines are skipped. Bad input prints its error and the loop
    /// keeps going; only I/O failures abort the run.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<(), AppError> {
        view::render(&mut out, &self.config, &self.session)?;

        let mut lines = input.lines();

        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                // EOF: piped input ran out, or the terminal closed.
                writeln!(out)?;
                break;
            };
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match Command::parse(line) {
                Ok(Command::Action(action)) => {
                    debug!(?action, "Dispatching action");
                    self.session.dispatch(action);
                    view::render(&mut out, &self.config, &self.session)?;
                }
                Ok(Command::Help) => {
                    writeln!(out, "\n{HELP_TEXT}\n")?;
                }
                Ok(Command::Quit) => {
                    writeln!(out, "Bye!")?;
                    break;
                }
                Err(err) => {
                    debug!(input = line, "Rejected input");
                    writeln!(out, "{err}")?;
                }
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::demo_catalog;
    use crate::view::EMPTY_CART_MESSAGE;

    /// Runs a whole scripted session and returns the transcript.
    fn transcript(script: &str) -> String {
        let mut repl = Repl::new(StoreConfig::default(), Session::new(demo_catalog()));
        let mut out = Vec::new();
        repl.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quit_ends_loop() {
        let output = transcript("quit\n");
        assert!(output.contains("Bye!"));
    }

    #[test]
    fn test_eof_ends_loop() {
        // No commands at all: render once, prompt, then EOF.
        let output = transcript("");
        assert!(output.contains("Laptop"));
        assert!(output.contains(EMPTY_CART_MESSAGE));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let output = transcript("\n   \nquit\n");
        assert!(output.contains("Bye!"));
    }

    #[test]
    fn test_add_twice_then_headphones() {
        let output = transcript("add 1\nadd 1\nadd 3\nquit\n");
        assert!(output.contains("Total: $999.99"));
        assert!(output.contains("Total: $1999.98"));
        assert!(output.contains("Total: $2199.97"));
    }

    #[test]
    fn test_unknown_command_keeps_loop_alive() {
        let output = transcript("checkout\nadd 1\nquit\n");
        assert!(output.contains("Unknown command: checkout"));
        assert!(output.contains("Total: $999.99"));
    }

    #[test]
    fn test_remove_of_unknown_id_prints_nothing_extra() {
        let output = transcript("add 1\nremove 99\nquit\n");
        // Still rendered, total unchanged, and no complaint anywhere.
        assert!(output.contains("Total: $999.99"));
        assert!(!output.contains("Unknown"));
        assert!(!output.contains("Invalid"));
    }

    #[test]
    fn test_bad_quantity_leaves_cart_alone() {
        let output = transcript("add 1 0\nquit\n");
        assert!(output.contains("Quantity must be at least 1, got 0"));
        assert!(!output.contains("Total:"));
    }

    #[test]
    fn test_help_prints_command_list() {
        let output = transcript("help\nquit\n");
        assert!(output.contains("add <id> [qty]"));
        assert!(output.contains("qty <id> <n>"));
    }

    #[test]
    fn test_clear_returns_to_empty_message() {
        let output = transcript("add 1 2\nclear\nquit\n");
        assert!(output.contains("Total: $1999.98"));
        // Empty message shows at startup and again after the clear.
        assert!(output.matches(EMPTY_CART_MESSAGE).count() >= 2);
    }

    #[test]
    fn test_qty_command_rewrites_line() {
        let output = transcript("add 5\nqty 5 3\nquit\n");
        assert!(output.contains("Total: $79.99"));
        assert!(output.contains("Total: $239.97"));
    }
}
