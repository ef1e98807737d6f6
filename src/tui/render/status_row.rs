use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

/// Render the status row (bottom of screen): status message, or filter
/// summary and key hints for the current mode.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    } else if app.view == View::Tasks && app.mode == Mode::Navigate {
        let priority = app
            .criteria
            .priority
            .map_or("All".to_string(), |p| p.label().to_string());
        let status = app
            .criteria
            .status
            .map_or("All".to_string(), |s| s.label().to_string());
        spans.push(Span::styled(
            format!(" priority: {} \u{2502} status: {}", priority, status),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    if app.config.ui.show_key_hints {
        let hint = match app.mode {
            Mode::Navigate => match app.view {
                View::Overview => "1-4 views  q quit  ? help",
                View::Projects => "e edit  n new  x delete  ? help",
                View::Tasks => "p/s filter  e edit  x delete  ? help",
                View::MyTasks => "c comments  m complete  ? help",
            },
            Mode::Edit => "\u{2191}\u{2193} field  \u{2190}\u{2192} cycle  Enter edit  ^S save  Esc cancel",
            Mode::Confirm => "y confirm  n cancel",
            Mode::Comment => "Enter add  Esc close",
        };
        let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
