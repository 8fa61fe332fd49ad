//! Banner area
//!
//! Title, headline verdict, celebration frame, and detail message.

use std::{ops::Sub, time::Duration};

use chest_app::App;
use chest_core::{ErrorKind, ScreenMode};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const TITLE: &str = "🗝️ Password Chest";
const UNLOCKED_HEADLINE: &str = "✅ UNLOCKED";
const WRONG_FORMAT_HEADLINE: &str = "WRONG FORMAT";
const WRONG_PASSWORD_HEADLINE: &str = "WRONG PASSWORD";

/// Detail text color on the success screen.
const WIN_DETAIL: Color = Color::Rgb(0xd1, 0xfa, 0xe5);

/// Render the banner area.
pub fn render<I>(frame: &mut Frame, app: &App<I>, area: Rect)
where
    I: Copy + Ord + Send + Sync + Sub<Output = Duration>,
{
    let screen = app.screen();

    let mut lines: Vec<Line> = vec![
        Line::default(),
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    match screen.mode() {
        ScreenMode::Normal => {},
        ScreenMode::Success => {
            lines.push(headline(UNLOCKED_HEADLINE));
            lines.push(Line::default());
            if let Some(celebration) = screen.celebration_frame() {
                lines.push(Line::from(Span::styled(
                    celebration,
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::default());
            }
            if let Some(message) = screen.message() {
                lines.push(Line::from(Span::styled(
                    message,
                    Style::default().fg(WIN_DETAIL).add_modifier(Modifier::BOLD),
                )));
            }
        },
        ScreenMode::Error => {
            let text = match screen.error_kind() {
                Some(ErrorKind::Format) => WRONG_FORMAT_HEADLINE,
                _ => WRONG_PASSWORD_HEADLINE,
            };
            lines.push(headline(text));
            lines.push(Line::default());
            if let Some(message) = screen.message() {
                lines.push(Line::from(Span::styled(message, Style::default().fg(Color::White))));
            }
        },
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn headline(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
}
