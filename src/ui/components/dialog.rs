//! Modal message dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::text::wrap_text;

const MAX_WIDTH: u16 = 60;
// 2 chars padding on each side
const PADDING: u16 = 4;

/// Visual flavour of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogKind {
    Error,
    Success,
}

impl DialogKind {
    fn title(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Success => "Success",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Success => Color::Green,
        }
    }
}

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    render_dialog(frame, DialogKind::Error, message);
}

/// Render a success notification overlay centered on the screen
pub fn render_success_dialog(frame: &mut Frame, message: &str) {
    render_dialog(frame, DialogKind::Success, message);
}

fn render_dialog(frame: &mut Frame, kind: DialogKind, message: &str) {
    let area = frame.area();
    let max_line_width = (MAX_WIDTH - PADDING) as usize;
    let wrapped = wrap_text(message, max_line_width);

    let content_width = wrapped
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(kind.title().len()) as u16;
    // +2 for borders
    let width = (content_width + PADDING + 2).min(MAX_WIDTH).min(area.width);
    // title + blank + message + blank + hint + borders
    let height = (wrapped.len() as u16 + 6).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let color = kind.color();
    let mut lines = vec![
        Line::from(Span::styled(
            kind.title(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(wrapped.into_iter().map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ]));

    let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(dialog, dialog_area);
}
