//! Header and common widget rendering
//!
//! This module contains the title bar, the status line and the
//! navigation hint bar shared by every screen.

use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Header renderer for the title bar
pub struct HeaderRenderer {
    border: Borders,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            border: Borders::ALL,
        }
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title_widget = Paragraph::new(title)
            .block(
                Block::default()
                    .borders(self.border)
                    .border_style(Styles::border_active()),
            )
            .alignment(Alignment::Center)
            .style(Styles::title());
        f.render_widget(title_widget, area);
    }
}

/// Render the status line
pub fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Styles::text_secondary());
    f.render_widget(status, area);
}

/// Render the navigation bar from (key, description) pairs
pub fn render_nav_bar(f: &mut Frame, area: Rect, items: &[(String, String)]) {
    let mut spans = Vec::with_capacity(items.len() * 3);
    for (i, (key, description)) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::nav_hint()));
        }
        spans.push(Span::styled(key.clone(), Styles::nav_key()));
        spans.push(Span::styled(format!(" {}", description), Styles::nav_hint()));
    }

    let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(nav, area);
}
