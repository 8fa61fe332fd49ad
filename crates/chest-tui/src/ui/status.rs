//! Status bar
//!
//! Displays the chest state and key hints.

use std::{ops::Sub, time::Duration};

use chest_app::App;
use chest_core::ScreenMode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render<I>(frame: &mut Frame, app: &App<I>, area: Rect)
where
    I: Copy + Ord + Send + Sync + Sub<Output = Duration>,
{
    let state = match app.screen().mode() {
        ScreenMode::Normal => Span::styled("Locked", Style::default().fg(Color::Gray)),
        ScreenMode::Success => Span::styled(
            "Unlocked",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ScreenMode::Error => Span::styled("Try again", Style::default().fg(Color::Red)),
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        state,
        Span::styled(" | Enter submits | Esc quits", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
