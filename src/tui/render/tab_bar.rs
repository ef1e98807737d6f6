use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

/// Render the tab bar: one tab per view, with a separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg_style = Style::default().bg(app.theme.background);
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{25A0}",
        Style::default().fg(app.theme.accent).bg(app.theme.background),
    ));
    spans.push(Span::styled(
        format!(" {} ", app.config.workspace.name),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    spans.push(sep.clone());

    for view in View::ALL {
        let style = if view == app.view {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(app.theme.background)
        };
        spans.push(Span::styled(format!(" {} ", view.title()), style));
        spans.push(sep.clone());
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line = "\u{2500}".repeat(area.width as usize);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        line,
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    )));
    frame.render_widget(paragraph, area);
}
