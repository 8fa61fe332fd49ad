//! Input line
//!
//! Displays the code input with cursor and placeholder.

use std::{ops::Sub, time::Duration};

use chest_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

const PROMPT_WIDTH: u16 = 3; // border + "> "
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const RIGHT_PADDING: u16 = 1; // inside right border
const PLACEHOLDER: &str = "0000";

/// Render the input line.
pub fn render<I>(frame: &mut Frame, app: &App<I>, area: Rect)
where
    I: Copy + Ord + Send + Sync + Sub<Output = Duration>,
{
    let count = app.screen().secret().len();
    let block =
        Block::default().borders(Borders::ALL).title(format!(" Enter the code ({count} numbers) "));

    let input = app.input();
    let (text, style) = if input.buffer().is_empty() {
        (format!("> {PLACEHOLDER}"), Style::default().fg(Color::DarkGray))
    } else {
        (format!("> {}", input.buffer()), Style::default().fg(Color::White))
    };

    let paragraph = Paragraph::new(text).style(style).block(block);
    frame.render_widget(paragraph, area);

    let available_width = area.width.saturating_sub(PROMPT_WIDTH + RIGHT_PADDING);
    let cursor_offset = (input.cursor_chars() as u16).min(available_width);

    let cursor_x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);

    frame.set_cursor_position((cursor_x.min(max_x), cursor_y));
}
