use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Keep track of what is in the fridge
#[derive(Parser, Debug)]
#[command(name = "freezer")]
#[command(version)]
#[command(
    about = "Track perishable items, their fill level and best-before dates",
    long_about = None
)]
pub struct Args {
    /// Path to the SQLite database (defaults to ./freezer.db)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Path to a config file (defaults to ./freezer.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive console (default)
    Console,

    /// Create the database tables
    Init {
        /// Also stock some sample items
        #[arg(long)]
        demo: bool,
    },

    /// Manage the product catalog
    #[command(subcommand)]
    Product(ProductCommand),

    /// Stock one unopened item
    Add {
        /// Product code (8 to 15 digits)
        gtin: String,
        /// Best-before date (YYYY-MM-DD or YYYYMMDD)
        best_before: String,
    },

    /// Consume part of an item
    Consume {
        /// Product code (8 to 15 digits)
        gtin: String,
        /// Percent of one item to take (defaults to the configured amount)
        #[arg(short, long)]
        amount: Option<i64>,
    },

    /// Show the items in stock
    List {
        /// Sort key: name, fillStatus or bestBefore
        #[arg(short, long)]
        sort: Option<String>,
        /// Reverse the sort order
        #[arg(long)]
        descending: bool,
        /// Show at most N items (0 shows all)
        #[arg(short, long, default_value_t = 0)]
        limit: usize,
        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProductCommand {
    /// Register a new product
    Add {
        /// Product code (8 to 15 digits)
        gtin: String,
        /// Display name
        name: String,
        /// Days the product keeps once opened
        valid_days: u32,
        /// Packaging size, e.g. "0,5 L"
        #[arg(long)]
        size: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
