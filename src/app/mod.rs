//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, BrowseState, etc.)
//! - Main module - App struct and event loop
//!
//! Key handling never touches the terminal, so the whole shop can be driven
//! with synthetic [`KeyEvent`]s.

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, BrowseState, InputDialogState, MainMenuItem, Notice};

use crate::catalog::Catalog;
use crate::checkout::{CheckoutFlow, CheckoutOutcome, CheckoutStep};
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::order_sink::OrderSink;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info};

/// Shown after the browse checklist is confirmed
pub const MSG_ADDED_TO_CART: &str = "Selected products added to cart.";
/// Shown when viewing an empty cart
pub const MSG_CART_EMPTY: &str = "Your cart is empty.";

/// Main application struct
pub struct App<S: OrderSink> {
    state: AppState,
    /// Checkout in progress, if any
    checkout: Option<CheckoutFlow>,
    sink: S,
    ui_renderer: UiRenderer,
    /// Keybinding context for key resolution and navigation hints
    keybinding_context: KeybindingContext,
}

impl<S: OrderSink> App<S> {
    /// Create a new application instance
    pub fn new(catalog: Catalog, sink: S) -> Self {
        info!("Creating new App instance with {} product(s)", catalog.len());
        Self {
            state: AppState::new(catalog),
            checkout: None,
            sink,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Whether a checkout is waiting for input
    pub fn checkout_in_progress(&self) -> bool {
        self.checkout.is_some()
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context);
            })?;

            if crossterm::event::poll(Duration::from_millis(250))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if key_event.kind == KeyEventKind::Press && self.handle_key_event(key_event) {
                        break;
                    }
                }
            }
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Handle keyboard input. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        let mode = self.state.mode();
        let action = self.keybinding_context.resolve(&mode, &key_event);

        if action == Some(KeyAction::Quit) {
            info!("Quit requested");
            self.state.quit_requested = true;
            return true;
        }

        match mode {
            AppMode::MainMenu => self.handle_main_menu(action),
            AppMode::BrowseProducts => self.handle_browse(action),
            AppMode::CheckoutInput => self.handle_checkout_input(action, key_event.code),
            AppMode::Notice => {
                if action == Some(KeyAction::Dismiss) {
                    self.state.notices.pop_front();
                }
            }
        }

        self.state.quit_requested
    }

    fn handle_main_menu(&mut self, action: Option<KeyAction>) {
        let item_count = MainMenuItem::all().len();
        match action {
            Some(KeyAction::NavigateUp) => {
                self.state.main_menu_selection = self.state.main_menu_selection.saturating_sub(1);
            }
            Some(KeyAction::NavigateDown) => {
                if self.state.main_menu_selection + 1 < item_count {
                    self.state.main_menu_selection += 1;
                }
            }
            Some(KeyAction::Select) => {
                if let Some(item) = MainMenuItem::from_index(self.state.main_menu_selection) {
                    self.activate(item);
                }
            }
            _ => {}
        }
    }

    /// Run a main menu entry
    pub fn activate(&mut self, item: MainMenuItem) {
        debug!("Main menu: {}", item);
        match item {
            MainMenuItem::BrowseProducts => self.browse_products(),
            MainMenuItem::ViewCart => self.view_cart(),
            MainMenuItem::Checkout => self.start_checkout(),
            MainMenuItem::Quit => self.state.quit_requested = true,
        }
    }

    /// Open the product checklist. Nothing is ticked, whatever the cart holds.
    pub fn browse_products(&mut self) {
        self.state.browse = Some(BrowseState::new(self.state.catalog.len()));
    }

    fn handle_browse(&mut self, action: Option<KeyAction>) {
        let Some(browse) = self.state.browse.as_mut() else {
            return;
        };
        match action {
            Some(KeyAction::NavigateUp) => browse.move_up(),
            Some(KeyAction::NavigateDown) => browse.move_down(),
            Some(KeyAction::Toggle) => browse.toggle(),
            Some(KeyAction::Confirm) => self.confirm_browse(),
            Some(KeyAction::Cancel) => {
                debug!("Browse cancelled; cart unchanged");
                self.state.browse = None;
            }
            _ => {}
        }
    }

    fn confirm_browse(&mut self) {
        let Some(browse) = self.state.browse.take() else {
            return;
        };
        let labels = browse.selected_labels(&self.state.catalog);
        self.state.cart.replace_with(&self.state.catalog, &labels);
        info!("Cart now holds {} item(s)", self.state.cart.len());

        self.state.status_message = format!(
            "Cart: {} item(s), ${}",
            self.state.cart.len(),
            self.state.cart.total()
        );
        self.state.push_notice(Notice::message(MSG_ADDED_TO_CART));
    }

    /// Show the cart contents, or the empty-cart message
    pub fn view_cart(&mut self) {
        let notice = if self.state.cart.is_empty() {
            Notice::message(MSG_CART_EMPTY)
        } else {
            let mut text = String::from("Cart Items:\n");
            for label in self.state.cart.labels() {
                text.push_str(&label);
                text.push('\n');
            }
            Notice::new("Cart", text)
        };
        self.state.push_notice(notice);
    }

    /// Begin checkout against the current cart
    pub fn start_checkout(&mut self) {
        let (flow, step) = CheckoutFlow::begin(&self.state.cart);
        self.checkout = Some(flow);
        self.apply_checkout_step(step);
    }

    fn handle_checkout_input(&mut self, action: Option<KeyAction>, code: KeyCode) {
        let Some(dialog) = self.state.input_dialog.as_mut() else {
            return;
        };
        match action {
            Some(KeyAction::Confirm) => {
                let value = std::mem::take(&mut dialog.value);
                self.submit_checkout_input(Some(value));
            }
            Some(KeyAction::Cancel) => self.submit_checkout_input(None),
            Some(KeyAction::Backspace) => {
                dialog.value.pop();
            }
            _ => {
                if let KeyCode::Char(c) = code {
                    dialog.value.push(c);
                }
            }
        }
    }

    fn submit_checkout_input(&mut self, input: Option<String>) {
        self.state.input_dialog = None;
        let Some(flow) = self.checkout.as_mut() else {
            return;
        };

        match flow.submit(input.as_deref(), &mut self.state.cart, &mut self.sink) {
            Ok(step) => self.apply_checkout_step(step),
            Err(e) => {
                tracing::error!("Checkout input ignored: {}", e);
                self.checkout = None;
            }
        }
    }

    fn apply_checkout_step(&mut self, step: CheckoutStep) {
        match step {
            CheckoutStep::Prompt { prompt, notice } => {
                if let Some(notice) = notice {
                    self.state.push_notice(Notice::new("Invalid Input", notice));
                }
                self.state.input_dialog = Some(InputDialogState::new(prompt));
            }
            CheckoutStep::Finished(outcome) => {
                self.checkout = None;
                self.state.input_dialog = None;
                self.finish_checkout(outcome);
            }
        }
    }

    fn finish_checkout(&mut self, outcome: CheckoutOutcome) {
        match &outcome {
            CheckoutOutcome::Completed { record, persisted } => {
                self.state.push_notice(Notice::new("Order Summary", record.render()));
                // Best-effort persistence: a failed write only shows up in the status line
                self.state.status_message = if *persisted {
                    format!("Order placed for {}", record.customer_name)
                } else {
                    format!("Order placed for {} (not saved)", record.customer_name)
                };
            }
            CheckoutOutcome::Cancelled => {
                self.state.status_message = "Checkout cancelled".to_string();
            }
            CheckoutOutcome::CartEmpty | CheckoutOutcome::InvalidAddress => {}
        }

        if let Some(message) = outcome.message() {
            self.state.push_notice(Notice::message(message));
        }
    }
}
