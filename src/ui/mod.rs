//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Title bar, status line and navigation bar
//! - `menus` - Main menu rendering
//! - `dialogs` - Browse checklist, input prompt and message dialogs
//!
//! Rendering only reads [`AppState`]; all mutation happens in the app.

mod dialogs;
mod header;
mod menus;

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use header::HeaderRenderer;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Top-level renderer for one frame
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the main screen, then whichever dialog is on top
    pub fn render(&self, f: &mut Frame, state: &AppState, keybindings: &KeybindingContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Menu + cart summary
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        self.header.render_title(f, chunks[0], "E-commerce Shopping Cart");
        menus::render_main_menu(f, state, chunks[1]);
        header::render_status(f, chunks[2], &state.status_message);

        let mode = state.mode();
        header::render_nav_bar(f, chunks[3], &keybindings.get_nav_items(&mode));

        match mode {
            AppMode::MainMenu => {}
            AppMode::BrowseProducts => dialogs::render_browse_dialog(f, state),
            AppMode::CheckoutInput => dialogs::render_input_dialog(f, state),
            AppMode::Notice => dialogs::render_notice_dialog(f, state),
        }
    }
}

/// Centered rectangle of `width` x `height`, clamped to `area`
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
