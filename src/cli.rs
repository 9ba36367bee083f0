use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::order_sink::DEFAULT_ORDER_FILE;

/// cartui - A terminal shopping cart
#[derive(Parser, Debug)]
#[command(name = "cartui")]
#[command(about = "Browse a product catalog, fill a cart and check out from the terminal")]
#[command(version)]
pub struct Cli {
    /// File that completed orders are appended to
    #[arg(long, global = true, default_value = DEFAULT_ORDER_FILE)]
    pub orders: PathBuf,

    /// JSON catalog file to use instead of the built-in product list
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive shopping TUI (default)
    Shop,
    /// Print the product catalog
    Catalog {
        /// Print the catalog as JSON instead of display labels
        #[arg(long)]
        json: bool,
    },
    /// Check out without the TUI
    Checkout {
        /// Display label of a product to buy (e.g. "iPad Pro - $1099"); repeatable
        #[arg(short, long = "item", required = true)]
        items: Vec<String>,
        /// Customer name (letters only)
        #[arg(short, long)]
        name: String,
        /// Shipping address
        #[arg(short, long)]
        address: String,
    },
    /// Write the built-in catalog to a JSON file
    ExportCatalog {
        /// Destination path
        path: PathBuf,
    },
    /// Validate a catalog file
    ValidateCatalog {
        /// Path to catalog file to validate
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
