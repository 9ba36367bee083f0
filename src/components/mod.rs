//! Reusable TUI components

pub mod keybindings;
