//! cartui - Main entry point
//!
//! Launches the shop TUI by default, or runs one of the headless commands.

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write, stdout};
use std::path::Path;
use tracing::{debug, error, info, warn};

use cartui::app::App;
use cartui::cart::Cart;
use cartui::checkout::{CheckoutOutcome, InputPrompt, Prompter, run_checkout};
use cartui::cli::{Cli, Commands};
use cartui::config::AppConfig;
use cartui::config_file::CatalogFile;
use cartui::error::CartError;
use cartui::logging;

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = AppConfig::from_cli(&cli);

    match cli.command {
        None | Some(Commands::Shop) => {
            logging::init_file(&config.log_path);
            info!("cartui starting up in interactive mode");
            run_tui(&config)?;
        }
        Some(Commands::Catalog { json }) => {
            logging::init_stderr();
            print_catalog(&config, json)?;
        }
        Some(Commands::Checkout {
            items,
            name,
            address,
        }) => {
            logging::init_stderr();
            let outcome = run_headless_checkout(&config, &items, &name, &address)?;
            if !outcome.is_completed() {
                std::process::exit(1);
            }
        }
        Some(Commands::ExportCatalog { path }) => {
            logging::init_stderr();
            CatalogFile::seeded().save_to_file(&path)?;
            info!("Built-in catalog written to {:?}", path);
            println!("✓ Catalog written to {}", path.display());
        }
        Some(Commands::ValidateCatalog { path }) => {
            logging::init_stderr();
            validate_catalog(&path);
        }
    }

    Ok(())
}

/// Run the shop TUI
fn run_tui(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;
    let sink = config.order_sink();
    debug!("Orders will be appended to {:?}", sink.path());

    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| CartError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    enter_alternate_screen(&mut stdout(), disable_raw_mode)?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .map_err(CartError::from)
        .and_then(|mut terminal| App::new(catalog, sink).run(&mut terminal));

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.context("Shop TUI exited with an error")
}

/// Switch `out` to the alternate screen. On failure raw mode is released
/// through `leave_raw_mode` before the error is returned.
fn enter_alternate_screen<W: Write>(
    out: &mut W,
    leave_raw_mode: impl FnOnce() -> io::Result<()>,
) -> Result<(), CartError> {
    if let Err(e) = crossterm::execute!(out, crossterm::terminal::EnterAlternateScreen) {
        let _ = leave_raw_mode();
        return Err(CartError::terminal(format!(
            "Failed to enter alternate screen: {}",
            e
        )));
    }
    Ok(())
}

/// Print catalog labels, or the catalog as JSON
fn print_catalog(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;
    if json {
        let file = CatalogFile::from_catalog(&catalog);
        println!(
            "{}",
            serde_json::to_string_pretty(&file).context("Failed to serialize catalog")?
        );
    } else {
        for label in catalog.labels() {
            println!("{}", label);
        }
    }
    Ok(())
}

/// Answers checkout prompts from command-line arguments.
///
/// The name is given once; a rejected name gets no second answer, so the
/// checkout ends as cancelled.
struct ArgumentPrompter {
    name: Option<String>,
    address: String,
}

impl Prompter for ArgumentPrompter {
    fn prompt(&mut self, prompt: InputPrompt) -> Option<String> {
        match prompt {
            InputPrompt::Name => self.name.take(),
            InputPrompt::Address => Some(self.address.clone()),
        }
    }

    fn notify(&mut self, message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Check out the given labels without the TUI
fn run_headless_checkout(
    config: &AppConfig,
    items: &[String],
    name: &str,
    address: &str,
) -> anyhow::Result<CheckoutOutcome> {
    let catalog = config.load_catalog()?;

    for item in items {
        if catalog.find_by_display_label(item).is_none() {
            warn!("No catalog product is labelled {:?}; ignoring it", item);
        }
    }

    let mut cart = Cart::new();
    cart.replace_with(&catalog, items);

    let mut sink = config.order_sink();
    let mut prompter = ArgumentPrompter {
        name: Some(name.to_string()),
        address: address.to_string(),
    };
    let outcome = run_checkout(&mut cart, &mut sink, &mut prompter)?;

    match &outcome {
        CheckoutOutcome::Completed { record, persisted } => {
            print!("{}", record.render());
            if !persisted {
                error!("Order was not saved to {:?}", config.orders_path);
            }
        }
        CheckoutOutcome::Cancelled => eprintln!("✗ Checkout cancelled"),
        CheckoutOutcome::CartEmpty | CheckoutOutcome::InvalidAddress => {}
    }

    if let Some(message) = outcome.message() {
        if outcome.is_completed() {
            println!("✓ {}", message);
        } else {
            eprintln!("✗ {}", message);
        }
    }

    Ok(outcome)
}

/// Validate a catalog file and report
fn validate_catalog(path: &Path) {
    info!("Validating catalog file: {:?}", path);
    match CatalogFile::load_from_file(path) {
        Ok(file) => match file.validate() {
            Ok(()) => {
                info!("Catalog validation successful");
                println!(
                    "✓ Catalog file is valid: {} product(s)",
                    file.products.len()
                );
            }
            Err(e) => {
                error!("Catalog validation failed: {}", e);
                eprintln!("✗ Catalog validation failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to load catalog file: {:#}", e);
            eprintln!("✗ Failed to load catalog file: {:#}", e);
            std::process::exit(1);
        }
    }
}
