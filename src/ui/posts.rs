//! Post feed view: loading placeholder, error text or the post list

use super::components::wrap_text;
use crate::app::App;
use crate::feed::{FeedState, Post};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the feed for its current state
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    match app.feed.state() {
        FeedState::Loading => draw_message(frame, area, "Loading posts...", Color::DarkGray),
        FeedState::Error(message) => {
            draw_message(frame, area, &format!("Error: {message}"), Color::Red)
        }
        FeedState::Success(posts) if posts.is_empty() => {
            draw_message(frame, area, "No posts found.", Color::DarkGray)
        }
        FeedState::Success(posts) => draw_list(frame, area, app, posts),
    }
}

fn feed_block() -> Block<'static> {
    Block::default()
        .title(" Latest Posts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn draw_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let content = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(feed_block());
    frame.render_widget(content, area);
}

// border plus the two-column item indent
const ITEM_INSET: u16 = 4;

/// Lines for one post: title, image, wrapped excerpt, link and a separator
fn post_lines<'a>(
    post: &'a Post,
    placeholder: &'a str,
    is_selected: bool,
    width: usize,
) -> Vec<Line<'a>> {
    let marker = if is_selected { "▸ " } else { "  " };
    let title_style = if is_selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(post.title_text(), title_style),
        ]),
        Line::from(vec![
            Span::raw("  Image: "),
            Span::styled(post.image_url(placeholder), Style::default().fg(Color::Blue)),
            Span::styled(format!(" ({})", post.image_alt()), dim),
        ]),
    ];
    lines.extend(
        wrap_text(&post.excerpt_text(), width)
            .into_iter()
            .map(|line| Line::from(format!("  {line}"))),
    );
    lines.extend([
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("Read More: {}", post.link),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::styled("  ────────", dim),
    ]);
    lines
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, posts: &[Post]) {
    let placeholder = app.config.placeholder_image();
    let selected = app.state.selected_index.min(posts.len().saturating_sub(1));
    let width = area.width.saturating_sub(ITEM_INSET).max(1) as usize;

    let items: Vec<ListItem> = posts
        .iter()
        .enumerate()
        .map(|(idx, post)| ListItem::new(post_lines(post, placeholder, idx == selected, width)))
        .collect();

    let list = List::new(items).block(feed_block());

    // ListState keeps the selected multi-line item scrolled into view
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
