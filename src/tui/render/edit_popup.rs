use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, EditInput, PROJECT_FIELDS, TASK_FIELDS};

use super::helpers::centered_rect;

/// Render the edit popup over the current view
pub fn render_edit_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(56, 13, area);
    frame.render_widget(Clear, popup);

    let (title, labels, values) = if let Some(session) = &app.task_edit {
        let task = session.buffer();
        (
            "Edit Task",
            &TASK_FIELDS,
            vec![
                task.title.clone(),
                task.assigned_to.clone(),
                task.status.label().to_string(),
                task.priority.label().to_string(),
                task.due_date.format("%Y-%m-%d").to_string(),
                task.project.clone(),
            ],
        )
    } else if let Some(session) = &app.project_edit {
        let project = session.buffer();
        let title = if session.is_new() {
            "New Project"
        } else {
            "Edit Project"
        };
        (
            title,
            &PROJECT_FIELDS,
            vec![
                project.name.clone(),
                project.description.clone(),
                project.status.label().to_string(),
                format!("{}%", project.progress),
                project.start_date.format("%Y-%m-%d").to_string(),
                project.end_date.format("%Y-%m-%d").to_string(),
            ],
        )
    } else {
        return;
    };

    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    for (i, (label, value)) in labels.iter().zip(values.iter()).enumerate() {
        let selected = i == app.edit_field;
        let marker = if selected { "\u{25B8}" } else { " " };
        let label_style = if selected {
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", marker), label_style),
            Span::styled(format!("{:<12} ", label), label_style),
        ];

        match &app.edit_input {
            Some(input) if selected => {
                spans.extend(input_spans(app, input));
            }
            _ => {
                spans.push(Span::styled(
                    value.clone(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " \u{2191}\u{2193} field  \u{2190}\u{2192} cycle  Enter edit  ^S save  Esc cancel",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(app.theme.selection_border)
                .bg(bg),
        )
        .title(Span::styled(
            format!(" {} ", title),
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

/// The active field input, split at the cursor with a bar glyph
fn input_spans<'a>(app: &App, input: &EditInput) -> Vec<Span<'a>> {
    let bg = app.theme.background;
    let before = input.buffer[..input.cursor].to_string();
    let after = input.buffer[input.cursor..].to_string();
    vec![
        Span::styled(before, Style::default().fg(app.theme.text_bright).bg(bg)),
        Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.accent).bg(bg),
        ),
        Span::styled(after, Style::default().fg(app.theme.text_bright).bg(bg)),
    ]
}
