//! # Tally Storefront
//!
//! Binary entry point: wires config, catalog, session, and the REPL.
//!
//! ## Module Organization
//! ```text
//! tally-storefront/
//! ├── main.rs         ◄─── You are here (startup & wiring)
//! ├── config.rs       ◄─── Store configuration from env
//! ├── bootstrap.rs    ◄─── Catalog loading (demo table or file)
//! ├── command.rs      ◄─── Input line → Command parser
//! ├── repl.rs         ◄─── The interactive loop
//! ├── view.rs         ◄─── Full-screen renderer (tabled)
//! └── error.rs        ◄─── CommandError / AppError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! 1. Initialize logging (tracing-subscriber, RUST_LOG override)
//! 2. Read StoreConfig from TALLY_* environment variables
//! 3. Load catalog (TALLY_CATALOG file, else built-in demo)
//! 4. Build the Session and hand stdin/stdout to the REPL
//! ```

mod bootstrap;
mod command;
mod config;
mod error;
mod repl;
mod view;

use std::io;

use tally_core::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::StoreConfig;
use crate::error::AppError;
use crate::repl::Repl;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        tracing::error!("Fatal: {}", err);
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = StoreConfig::from_env();
    info!(store = %config.store_name, "Starting Tally storefront");

    let catalog = bootstrap::load_catalog(&config)?;
    let session = Session::new(catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut repl = Repl::new(config, session);
    repl.run(stdin.lock(), stdout.lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally=debug"));

    // stdout belongs to the view; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
