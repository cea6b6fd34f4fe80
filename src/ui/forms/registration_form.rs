//! Registration form rendering

use super::field_renderer::{draw_field, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Field, Form, RegistrationForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the registration form with its Submit button
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)]; // intro
    constraints.extend(Field::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let intro = Paragraph::new(vec![
        Line::from("Welcome to my website"),
        Line::styled(
            "Fill in every field, then submit.",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(intro, chunks[0]);

    for field in Field::ALL {
        draw_field(
            frame,
            chunks[field.index() + 1],
            FieldView {
                field,
                value: form.values.get(field),
                error: form.errors.get(field),
                visibility: &form.visibility,
                is_active: form.active_field() == field.index(),
            },
        );
    }

    let submit_area = chunks[RegistrationForm::SUBMIT_ROW + 1];
    let button_area = Rect {
        width: submit_area.width.min(16),
        ..submit_area
    };
    render_action_button(
        frame,
        button_area,
        "Submit",
        form.is_submit_row_active(),
        Color::Green,
    );
}
