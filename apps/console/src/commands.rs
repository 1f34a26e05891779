//! # Console Commands
//!
//! Parses one input line into a [`Command`].
//!
//! ## Command Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  list              show the catalog, numbered from 1                    │
//! │  select <n>        choose product number n                              │
//! │  insert <amount>   insert pesos                                         │
//! │  status            show money, selection and change                     │
//! │  buy               complete the purchase                                │
//! │  cancel            refund and start over                                │
//! │  help              show this list                                       │
//! │  quit | exit       leave (inserted money is returned)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product numbers shown to the customer start at 1; the machine's catalog
//! starts at 0. The conversion happens here and nowhere else.

use std::str::FromStr;
use thiserror::Error;

pub const HELP_TEXT: &str = "\
Commands:
  list              show the catalog
  select <n>        choose product number n
  insert <amount>   insert pesos
  status            show money, selection and change
  buy               complete the purchase
  cancel            refund and start over
  help              show this list
  quit              leave the machine";

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    /// Catalog index (already converted from the 1-based product number).
    Select(i64),
    /// Amount in pesos, unvalidated.
    Insert(i64),
    Status,
    Buy,
    Cancel,
    Help,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{0}' is not a whole number")]
    InvalidNumber(String),

    #[error("'{command}' takes no arguments")]
    UnexpectedArgument { command: &'static str },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let word = parts.next().unwrap_or_default().to_lowercase();
        let argument = parts.next();

        let command = match word.as_str() {
            "list" => Command::List,
            "select" => {
                let number = parse_number(argument, "select", "a product number")?;
                Command::Select(number.saturating_sub(1))
            }
            "insert" => Command::Insert(parse_number(argument, "insert", "an amount")?),
            "status" => Command::Status,
            "buy" => Command::Buy,
            "cancel" => Command::Cancel,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(word)),
        };

        let takes_argument = matches!(command, Command::Select(_) | Command::Insert(_));
        if !takes_argument && argument.is_some() {
            return Err(CommandError::UnexpectedArgument {
                command: command.name(),
            });
        }

        Ok(command)
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Select(_) => "select",
            Command::Insert(_) => "insert",
            Command::Status => "status",
            Command::Buy => "buy",
            Command::Cancel => "cancel",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn parse_number(
    argument: Option<&str>,
    command: &'static str,
    expected: &'static str,
) -> Result<i64, CommandError> {
    let raw = argument.ok_or(CommandError::MissingArgument { command, expected })?;
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}
