use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::{App, ConfirmAction};

use super::helpers::centered_rect;

/// Render the delete confirmation popup
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(state) = &app.confirm_state else {
        return;
    };

    let title = match state.action {
        ConfirmAction::DeleteTask { .. } => "Delete Task",
        ConfirmAction::DeleteProject { .. } => "Delete Project",
    };

    let popup = centered_rect(50, 7, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", state.message),
            Style::default().fg(app.theme.text).bg(bg),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                " y",
                Style::default()
                    .fg(app.theme.red)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" delete   ", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled(
                "n",
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" cancel", Style::default().fg(app.theme.dim).bg(bg)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}
