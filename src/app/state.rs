//! Application state definitions
//!
//! Contains all state-related types for the shop TUI: the main menu, the
//! browse checklist, the checkout input dialog and queued notices.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::InputPrompt;
use std::collections::VecDeque;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MainMenuItem {
    #[strum(serialize = "Browse Products")]
    BrowseProducts,
    #[strum(serialize = "View Cart")]
    ViewCart,
    #[strum(serialize = "Proceed to Checkout")]
    Checkout,
    #[strum(serialize = "Quit")]
    Quit,
}

impl MainMenuItem {
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Menu entry at `index`, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

/// Checklist shown while browsing products
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    /// One flag per catalog product, in catalog order
    pub checked: Vec<bool>,
    /// Highlighted row
    pub selected: usize,
}

impl BrowseState {
    /// Fresh checklist with nothing ticked
    pub fn new(len: usize) -> Self {
        Self {
            checked: vec![false; len],
            selected: 0,
        }
    }

    pub fn toggle(&mut self) {
        if let Some(flag) = self.checked.get_mut(self.selected) {
            *flag = !*flag;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.checked.len() {
            self.selected += 1;
        }
    }

    /// Labels of the ticked products
    pub fn selected_labels(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .list_all()
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(product, _)| product.display_label())
            .collect()
    }
}

/// Single-line text prompt used during checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDialogState {
    pub prompt: InputPrompt,
    pub value: String,
}

impl InputDialogState {
    pub fn new(prompt: InputPrompt) -> Self {
        Self {
            prompt,
            value: String::new(),
        }
    }
}

/// Message dialog; dismissed with Enter or Esc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Plain message with the default title
    pub fn message(text: impl Into<String>) -> Self {
        Self::new("Message", text)
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Products available for selection
    pub catalog: Catalog,
    /// Current selection
    pub cart: Cart,
    /// Main menu selection state
    pub main_menu_selection: usize,
    /// Browse checklist, while open
    pub browse: Option<BrowseState>,
    /// Checkout text prompt, while open
    pub input_dialog: Option<InputDialogState>,
    /// Pending messages, shown one at a time before anything else
    pub notices: VecDeque<Notice>,
    /// Status message for user feedback
    pub status_message: String,
    /// Set when the user asked to leave
    pub quit_requested: bool,
}

/// Application operating modes, derived from which dialog is on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Main menu - entry point for all functionality
    MainMenu,
    /// Product checklist
    BrowseProducts,
    /// Name or address prompt
    CheckoutInput,
    /// Message dialog
    Notice,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            main_menu_selection: 0,
            browse: None,
            input_dialog: None,
            notices: VecDeque::new(),
            status_message: "Welcome to the shop".to_string(),
            quit_requested: false,
        }
    }

    /// Mode of the top-most dialog. Notices sit above everything.
    pub fn mode(&self) -> AppMode {
        if !self.notices.is_empty() {
            AppMode::Notice
        } else if self.browse.is_some() {
            AppMode::BrowseProducts
        } else if self.input_dialog.is_some() {
            AppMode::CheckoutInput
        } else {
            AppMode::MainMenu
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}
