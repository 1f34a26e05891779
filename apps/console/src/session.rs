//! # Console Session
//!
//! Runs the read-command / call-core / print-result loop.
//!
//! ## Purchase Walkthrough
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > select 4                                                             │
//! │  Selected Ballpen - ₱15 (Stock: 10)                                     │
//! │  > insert 20                                                            │
//! │  Total inserted: ₱20                                                    │
//! │  > buy                                                                  │
//! │  Dispensed Ballpen. Change: ₱5                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session holds no purchase logic of its own: every decision is made by
//! [`VendingMachine`]. Input and output are generic so tests can drive the
//! loop with in-memory buffers.

use std::io::{BufRead, Write};

use neu_vending_core::{CoreError, Money, VendingMachine};
use tracing::{debug, info};

use crate::commands::{Command, HELP_TEXT};
use crate::config::ConsoleConfig;
use crate::error::ConsoleResult;

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// An interactive session over one machine.
pub struct Console<W: Write> {
    machine: VendingMachine,
    config: ConsoleConfig,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(machine: VendingMachine, config: ConsoleConfig, out: W) -> Self {
        Console {
            machine,
            config,
            out,
        }
    }

    pub fn machine(&self) -> &VendingMachine {
        &self.machine
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Any money still inserted when the loop ends is returned to the
    /// customer.
    pub fn run<R: BufRead>(&mut self, input: R) -> ConsoleResult<()> {
        info!(
            session_id = %self.machine.session_id(),
            machine = %self.config.machine_name,
            "Console session started"
        );
        writeln!(self.out, "Welcome to the {}!", self.config.machine_name)?;
        self.print_catalog()?;
        writeln!(self.out, "Type 'help' for a list of commands.")?;

        self.prompt()?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();

            if !line.is_empty() && self.handle_line(line)? == Flow::Quit {
                break;
            }
            self.prompt()?;
        }

        self.farewell()?;
        info!(
            session_id = %self.machine.session_id(),
            sales = self.machine.sales_count(),
            "Console session ended"
        );
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> ConsoleResult<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(self.out, "{err}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!(command = command.name(), "Executing command");

        match command {
            Command::List => self.print_catalog()?,
            Command::Select(index) => self.select(index)?,
            Command::Insert(amount) => self.insert(Money::from_pesos(amount))?,
            Command::Status => self.print_status()?,
            Command::Buy => self.buy()?,
            Command::Cancel => self.cancel()?,
            Command::Help => writeln!(self.out, "{HELP_TEXT}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    // -------------------------------------------------------------------------
    // Command Handlers
    // -------------------------------------------------------------------------

    fn print_catalog(&mut self) -> ConsoleResult<()> {
        for (number, product) in self.machine.catalog().iter().enumerate() {
            writeln!(self.out, "  {}. {}", number + 1, product.describe())?;
        }
        Ok(())
    }

    fn select(&mut self, index: i64) -> ConsoleResult<()> {
        if !self.machine.select_product(index) {
            writeln!(
                self.out,
                "No product #{}. Choose 1-{}.",
                index.saturating_add(1),
                self.machine.catalog().len()
            )?;
            return Ok(());
        }

        if let Some(product) = self.machine.selected_product() {
            writeln!(self.out, "Selected {}", product.describe())?;
            if !product.is_in_stock() {
                writeln!(self.out, "Sorry, {} is sold out.", product.name())?;
            }
        }
        Ok(())
    }

    fn insert(&mut self, amount: Money) -> ConsoleResult<()> {
        match self.machine.insert_money(amount) {
            Ok(total) => writeln!(self.out, "Total inserted: {total}")?,
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(())
    }

    fn print_status(&mut self) -> ConsoleResult<()> {
        let status = self.machine.status();

        if self.config.json_status {
            writeln!(self.out, "{}", serde_json::to_string(&status)?)?;
            return Ok(());
        }

        writeln!(self.out, "Inserted: {}", status.money_inserted)?;
        match (&status.selected_product, status.selected_price) {
            (Some(name), Some(price)) => {
                writeln!(self.out, "Selected: {name} ({price})")?;
                if status.can_purchase {
                    writeln!(self.out, "Ready to buy. Change due: {}", status.change)?;
                } else {
                    writeln!(self.out, "Insert {} more.", Money::zero() - status.change)?;
                }
            }
            _ => writeln!(self.out, "Selected: nothing")?,
        }
        Ok(())
    }

    fn buy(&mut self) -> ConsoleResult<()> {
        match self.machine.complete_purchase() {
            Ok(receipt) => {
                writeln!(
                    self.out,
                    "Dispensed {}. Change: {}",
                    receipt.product_name, receipt.change
                )?;
            }
            Err(err @ CoreError::InsufficientFunds { .. }) => {
                let shortfall = err.shortfall().unwrap_or_default();
                writeln!(self.out, "{err}. Insert {shortfall} more.")?;
            }
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(())
    }

    fn cancel(&mut self) -> ConsoleResult<()> {
        let refund = self.machine.cancel_transaction();
        writeln!(self.out, "Transaction cancelled. Returned {refund}")?;
        Ok(())
    }

    fn prompt(&mut self) -> ConsoleResult<()> {
        write!(self.out, "{}", self.config.prompt)?;
        self.out.flush()?;
        Ok(())
    }

    fn farewell(&mut self) -> ConsoleResult<()> {
        writeln!(self.out)?;
        if self.machine.total_money_inserted().is_positive() {
            let refund = self.machine.cancel_transaction();
            writeln!(self.out, "Returning {refund}")?;
        }
        writeln!(self.out, "Goodbye!")?;
        Ok(())
    }
}
