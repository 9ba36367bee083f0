//! Order persistence
//!
//! Orders are appended to durable storage through the [`OrderSink`] trait.
//! The file sink never rewrites or truncates: each record is appended
//! followed by a blank line, and the file is created if absent.

use crate::error::Result;
use crate::order::OrderRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default order log, relative to the working directory.
pub const DEFAULT_ORDER_FILE: &str = "order.txt";

/// Durable append of order records.
pub trait OrderSink {
    fn append(&mut self, record: &OrderRecord) -> Result<()>;
}

/// Appends rendered orders to a text file.
#[derive(Debug, Clone)]
pub struct FileOrderSink {
    path: PathBuf,
}

impl FileOrderSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileOrderSink {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER_FILE)
    }
}

impl OrderSink for FileOrderSink {
    fn append(&mut self, record: &OrderRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Single write so a record is never split between two appends
        let block = format!("{}\n", record.render());
        file.write_all(block.as_bytes())?;
        file.flush()?;

        tracing::info!(
            "Appended order for {} ({} item(s), total ${}) to {:?}",
            record.customer_name,
            record.items.len(),
            record.total_cost,
            self.path
        );
        Ok(())
    }
}

/// Keeps rendered records in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderSink {
    records: Vec<String>,
}

impl MemoryOrderSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered records in append order.
    pub fn records(&self) -> &[String] {
        &self.records
    }
}

impl OrderSink for MemoryOrderSink {
    fn append(&mut self, record: &OrderRecord) -> Result<()> {
        self.records.push(record.render());
        Ok(())
    }
}
