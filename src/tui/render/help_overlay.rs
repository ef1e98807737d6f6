use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("1-4 / Tab", "switch view"),
    ("j/k or \u{2191}\u{2193}", "move cursor"),
    ("g / G", "jump to top / bottom"),
    ("p / s", "cycle priority / status filter (Tasks)"),
    ("e", "edit selected record"),
    ("n", "new project (Projects)"),
    ("x", "delete selected record"),
    ("c", "comments (My Tasks)"),
    ("m", "mark complete (My Tasks)"),
    ("?", "this help"),
    ("q", "quit"),
];

/// Render the key reference overlay
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(52, KEYS.len() as u16 + 4, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let mut lines: Vec<Line> = vec![Line::default()];
    for (key, what) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<12}", key),
                Style::default()
                    .fg(app.theme.accent)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*what, Style::default().fg(app.theme.text).bg(bg)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  press any key to close",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}
