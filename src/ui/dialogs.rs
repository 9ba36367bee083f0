//! Dialog rendering module
//!
//! This module handles rendering of all modal dialogs: the product
//! checklist, the checkout text prompt and message notices.

use super::centered_rect;
use crate::app::AppState;
use crate::theme::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

/// Render the product checklist
pub fn render_browse_dialog(f: &mut Frame, state: &AppState) {
    let Some(browse) = &state.browse else {
        return;
    };

    let height = (state.catalog.len() as u16).saturating_add(4);
    let dialog_area = centered_rect(f.area(), 60, height);
    f.render_widget(Clear, dialog_area);

    let items: Vec<ListItem> = state
        .catalog
        .list_all()
        .iter()
        .zip(&browse.checked)
        .map(|(product, checked)| {
            let mark = if *checked { "[X]" } else { "[ ]" };
            let style = if *checked {
                Styles::checked()
            } else {
                Styles::text()
            };
            ListItem::new(format!("{} {}", mark, product.display_label())).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(" Select Products ")
                .title_bottom(" Space: toggle | Enter: OK | Esc: cancel ")
                .style(Styles::panel_bg()),
        )
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default().with_selected(Some(browse.selected));
    f.render_stateful_widget(list, dialog_area, &mut list_state);
}

/// Render the checkout input prompt
pub fn render_input_dialog(f: &mut Frame, state: &AppState) {
    let Some(dialog) = &state.input_dialog else {
        return;
    };

    let dialog_area = centered_rect(f.area(), 60, 7);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .title(" Checkout ")
        .style(Styles::panel_bg());
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(inner);

    f.render_widget(
        Paragraph::new(dialog.prompt.message()).style(Styles::text()),
        chunks[0],
    );

    let input = Paragraph::new(format!("{}_", dialog.value))
        .style(Styles::input())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(input, chunks[1]);
}

/// Render the front notice
pub fn render_notice_dialog(f: &mut Frame, state: &AppState) {
    let Some(notice) = state.current_notice() else {
        return;
    };

    let lines: Vec<Line> = notice.text.lines().map(Line::from).collect();
    let height = (lines.len() as u16).saturating_add(4);
    let dialog_area = centered_rect(f.area(), 70, height);
    f.render_widget(Clear, dialog_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(format!(" {} ", notice.title))
                .title_bottom(" Enter: OK ")
                .style(Styles::panel_bg()),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, dialog_area);
}
