use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::dates::format_date_short;

use super::helpers::fixed_width;

const TITLE_W: usize = 26;
const WHO_W: usize = 12;
const PROJECT_W: usize = 24;
const STATUS_W: usize = 13;
const PRIORITY_W: usize = 9;

/// Render the filterable tasks table
pub fn render_tasks_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " Recent Tasks",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    // Column headers
    lines.push(Line::from(Span::styled(
        format!(
            " {}{}{}{}{}Due",
            fixed_width("Task Title", TITLE_W),
            fixed_width("Assigned To", WHO_W),
            fixed_width("Project", PROJECT_W),
            fixed_width("Status", STATUS_W),
            fixed_width("Priority", PRIORITY_W),
        ),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let visible = app.visible_tasks();
    for (i, task) in visible.iter().enumerate() {
        let selected = i == app.tasks_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };

        let title_style = if selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {}", fixed_width(&task.title, TITLE_W)), title_style),
            Span::styled(
                fixed_width(&task.assigned_to, WHO_W),
                Style::default().fg(app.theme.text).bg(row_bg),
            ),
            Span::styled(
                fixed_width(&task.project, PROJECT_W),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
            Span::styled(
                fixed_width(task.status.label(), STATUS_W),
                Style::default().fg(app.theme.status_color(task.status)).bg(row_bg),
            ),
            Span::styled(
                fixed_width(task.priority.label(), PRIORITY_W),
                Style::default()
                    .fg(app.theme.priority_color(task.priority))
                    .bg(row_bg),
            ),
            Span::styled(
                format_date_short(task.due_date),
                Style::default().fg(app.theme.text).bg(row_bg),
            ),
        ]));
    }

    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            " no tasks match the current filters",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
