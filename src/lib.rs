//! cartui Library
//!
//! This library provides the core functionality for the terminal shopping
//! cart: the catalog, the cart, the checkout state machine, order
//! persistence and the TUI that drives them.

pub mod app;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod cli;
pub mod components;
pub mod config;
pub mod config_file;
pub mod error;
pub mod logging;
pub mod order;
pub mod order_sink;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use cart::Cart;
pub use catalog::{Catalog, Product};
pub use checkout::{
    CheckoutError, CheckoutFlow, CheckoutOutcome, CheckoutStage, CheckoutStep, InputPrompt,
    Prompter, run_checkout,
};
pub use config::AppConfig;
pub use config_file::CatalogFile;
pub use error::CartError;
pub use order::{CustomerName, OrderRecord};
pub use order_sink::{FileOrderSink, MemoryOrderSink, OrderSink};
