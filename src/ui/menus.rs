//! Menu rendering
//!
//! The main menu on the left and a short cart summary on the right.

use crate::app::{AppState, MainMenuItem};
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render main menu and cart summary
pub fn render_main_menu(f: &mut Frame, state: &AppState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let items: Vec<ListItem> = MainMenuItem::all()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == state.main_menu_selection {
                Styles::selected()
            } else {
                Styles::text()
            };
            ListItem::new(format!(" {} ", item)).style(style)
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(" Menu "),
    );
    f.render_widget(menu, columns[0]);

    let summary = vec![
        Line::from(format!("Items: {}", state.cart.len())),
        Line::from(format!("Total: ${}", state.cart.total())),
    ];
    let summary = Paragraph::new(summary)
        .style(Styles::text_secondary())
        .block(Block::default().borders(Borders::ALL).title(" Cart "));
    f.render_widget(summary, columns[1]);
}
