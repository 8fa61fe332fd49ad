//! UI rendering.
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees. The whole frame is painted with the mode color
//! so the background itself is the verdict.

mod banner;
mod prompt;
mod status;

use std::{ops::Sub, time::Duration};

use chest_app::App;
use chest_core::ScreenMode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Block,
};

const BANNER_MIN_HEIGHT: u16 = 5;
const INPUT_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

/// Render the entire UI.
pub fn render<I>(frame: &mut Frame, app: &App<I>)
where
    I: Copy + Ord + Send + Sync + Sub<Output = Duration>,
{
    let area = frame.area();

    let backdrop = Block::default().style(Style::default().bg(mode_color(app.screen().mode())));
    frame.render_widget(backdrop, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(BANNER_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    let [banner_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    banner::render(frame, app, *banner_area);
    prompt::render(frame, app, *input_area);
    status::render(frame, app, *status_area);
}

/// Full-screen background color for a mode.
fn mode_color(mode: ScreenMode) -> Color {
    match mode {
        ScreenMode::Normal => Color::Rgb(0x0b, 0x12, 0x20),
        ScreenMode::Success => Color::Rgb(0x06, 0x4e, 0x3b),
        ScreenMode::Error => Color::Rgb(0xb9, 0x1c, 0x1c),
    }
}
