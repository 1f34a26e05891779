//! # NEU Vending Console Library
//!
//! Configures logging and runs the interactive console.
//!
//! ## Module Organization
//! ```text
//! neu_vending_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment configuration
//! ├── commands.rs     ◄─── Command line parsing
//! ├── session.rs      ◄─── Read / execute / print loop
//! └── error.rs        ◄─── Console error type
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod session;

use std::io;

use neu_vending_core::VendingMachine;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ConsoleConfig;
use error::{ConsoleError, ConsoleResult};
use session::Console;

/// Runs the console on stdin / stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load configuration ── NEU_VENDING_* environment variables          │
/// │  2. Initialize logging ── RUST_LOG, else the configured filter         │
/// │  3. Build the machine ─── six seeded products                          │
/// │  4. Run the loop ──────── until quit or end of input                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ConsoleResult<()> {
    let config = ConsoleConfig::from_env()?;
    init_tracing(&config)?;

    let machine = VendingMachine::new();
    info!(
        session_id = %machine.session_id(),
        products = machine.catalog().len(),
        "Machine ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(machine, config, stdout.lock());
    console.run(stdin.lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the customer-facing
/// output on stdout.
fn init_tracing(config: &ConsoleConfig) -> ConsoleResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|err| ConsoleError::Logging(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| ConsoleError::Logging(err.to_string()))
}
