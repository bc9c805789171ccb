//! Session commands, one per input line.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add an item, or replace the one stored under the same id.
    #[command(allow_negative_numbers = true)]
    Add {
        /// Category number as listed by `categories`.
        category: usize,
        id: String,
        quantity: i64,
        /// Item name (may contain spaces).
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Set the quantity of an existing item.
    #[command(allow_negative_numbers = true)]
    Update { id: String, quantity: i64 },

    /// Delete an item.
    #[command(alias = "remove")]
    Delete { id: String },

    /// List one category, highest quantity first.
    View {
        /// Category number as listed by `categories`.
        category: usize,
    },

    /// Show the K items with the highest quantity.
    #[command(allow_negative_numbers = true)]
    Top { k: i64 },

    /// List every item of the active inventory.
    List,

    /// Show the recognized categories.
    Categories,

    /// Merge another inventory into the active one (higher quantity wins).
    Merge { inventory: String },

    /// Switch to an inventory, creating it if needed.
    Open { inventory: String },

    /// List the inventories of this session.
    Inventories,

    /// Leave the session.
    #[command(alias = "quit")]
    Exit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Words are split on whitespace; there is no quoting.
pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }

    Line::try_parse_from(words).map(|line| Some(line.command))
}
