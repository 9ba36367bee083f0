//! Error types for cartui
//!
//! Checkout validation failures are not errors: they are checkout outcomes.
//! `CartError` covers the plumbing around checkout: order storage, catalog
//! files and the terminal.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    /// Order file or terminal IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file contents are unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Raw mode or alternate screen could not be set up
    #[error("Terminal error: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, CartError>;

impl CartError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
