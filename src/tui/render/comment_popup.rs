use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::dates::format_date;

use super::helpers::centered_rect;

/// Render the comments popup for the selected task
pub fn render_comment_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(state) = &app.comment_state else {
        return;
    };
    let Some(task) = app.my_tasks.find(state.task_id) else {
        return;
    };

    let popup = centered_rect(56, 16, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    if task.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            " no comments yet",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }
    for comment in &task.comments {
        lines.push(Line::from(Span::styled(
            format!(" \u{2022} {}", comment.text),
            Style::default().fg(app.theme.text).bg(bg),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {}", format_date(comment.date)),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(popup.width.saturating_sub(2) as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    // Input line with cursor
    let before = state.input.buffer[..state.input.cursor].to_string();
    let after = state.input.buffer[state.input.cursor..].to_string();
    lines.push(Line::from(vec![
        Span::styled(" > ", Style::default().fg(app.theme.accent).bg(bg)),
        Span::styled(before, Style::default().fg(app.theme.text_bright).bg(bg)),
        Span::styled("\u{258C}", Style::default().fg(app.theme.accent).bg(bg)),
        Span::styled(after, Style::default().fg(app.theme.text_bright).bg(bg)),
    ]));
    lines.push(Line::from(Span::styled(
        " Enter add  Esc close",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .title(Span::styled(
            format!(" Comments - {} ", task.title),
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
