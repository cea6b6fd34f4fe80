//! Field rendering utilities for forms

use crate::state::{display_value, Field, PasswordVisibility};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: top border with label and error, input row, bottom border
pub const FIELD_HEIGHT: u16 = 3;

/// Everything needed to draw one input
pub struct FieldView<'a> {
    pub field: Field,
    pub value: &'a str,
    pub error: &'a str,
    pub visibility: &'a PasswordVisibility,
    pub is_active: bool,
}

/// Draw a single-line input with its label and inline error in the border
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let has_error = !view.error.is_empty();

    let border_style = if view.is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = display_value(view.value, view.field, view.visibility);
    let cursor = if view.is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::raw(text),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut title = vec![Span::raw(format!(" {}: ", view.field.label()))];
    if has_error {
        title.push(Span::styled(
            format!("{} ", view.error),
            Style::default().fg(Color::Red),
        ));
    }

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);

    if view.field.is_secret() {
        let hint = if view.visibility.is_revealed(view.field) {
            " hide "
        } else {
            " show "
        };
        block = block.title_bottom(Line::from(hint).right_aligned());
    }

    frame.render_widget(content.block(block), area);
}
