//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The app resolves every key press through this registry,
//! and the navigation bar renders hints from the same table.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Select,
    Toggle,
    Confirm,
    Cancel,
    Backspace,
    Dismiss,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
    /// Hidden bindings work but are not shown in the nav bar
    pub hidden: bool,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
            hidden: false,
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
            hidden: false,
        }
    }

    /// Same binding, left out of the nav bar
    fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && event.modifiers.contains(self.modifiers)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        // Ctrl+C leaves from anywhere, including text input
        self.global_bindings = vec![Keybinding::with_modifiers(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyAction::Quit,
            "Ctrl+C",
            "Quit",
        )
        .hidden()];

        self.mode_bindings.insert(
            AppMode::MainMenu,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Up").hidden(),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Down").hidden(),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Select"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::BrowseProducts,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Up").hidden(),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Down").hidden(),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Toggle"),
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "OK"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::CheckoutInput,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Confirm, "Enter", "OK"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel"),
                Keybinding::new(KeyCode::Backspace, KeyAction::Backspace, "Bksp", "Delete")
                    .hidden(),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Notice,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Dismiss, "Enter", "OK"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close"),
            ],
        );
    }

    /// Get all keybindings for a mode (including globals)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = self.global_bindings.iter().collect();
        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings
    }

    /// Find the action bound to a key press in the given mode
    pub fn resolve(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|binding| binding.matches(event))
            .map(|binding| binding.action)
    }

    /// Get navigation bar items for a mode as (key, description) pairs
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<(String, String)> {
        self.mode_bindings
            .get(mode)
            .map(|bindings| {
                bindings
                    .iter()
                    .filter(|b| !b.hidden)
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
