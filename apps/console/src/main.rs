//! # NEU Vending Console Entry Point
//!
//! ```bash
//! cargo run -p neu-vending-console
//!
//! # Verbose logs on stderr, JSON status output
//! RUST_LOG=debug NEU_VENDING_JSON_STATUS=true cargo run -p neu-vending-console
//! ```

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    neu_vending_console::run()?;
    Ok(())
}
