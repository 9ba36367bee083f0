//! Runtime configuration
//!
//! Resolves the command line into the settings the rest of the program
//! needs: where orders go and which catalog to seed.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::config_file::CatalogFile;
use crate::order_sink::{DEFAULT_ORDER_FILE, FileOrderSink};

/// Log file used while the TUI owns the terminal
pub const DEFAULT_LOG_FILE: &str = "cartui.log";

/// Settings for one run of the program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Order log that checkout appends to
    pub orders_path: PathBuf,
    /// Catalog file; `None` uses the built-in products
    pub catalog_path: Option<PathBuf>,
    /// Where TUI mode writes its logs
    pub log_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            orders_path: PathBuf::from(DEFAULT_ORDER_FILE),
            catalog_path: None,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            orders_path: cli.orders.clone(),
            catalog_path: cli.catalog.clone(),
            ..Self::default()
        }
    }

    /// Seed the catalog, from file when one is configured
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => Ok(Catalog::seeded()),
        }
    }

    pub fn order_sink(&self) -> FileOrderSink {
        FileOrderSink::new(&self.orders_path)
    }
}

fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let file = CatalogFile::load_from_file(path)?;
    file.validate()?;
    tracing::info!("Loaded {} product(s) from {:?}", file.products.len(), path);
    Ok(file.into_catalog())
}
