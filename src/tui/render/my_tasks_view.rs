use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::dates::format_date;

use super::helpers::chip;

/// Render the employee task list with derived schedule states
pub fn render_my_tasks_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " My Tasks",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for (i, task) in app.my_tasks.tasks().iter().enumerate() {
        let selected = i == app.my_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let schedule = task.schedule_state(app.today);

        let marker = if selected { "\u{25B8}" } else { " " };
        let mut header = vec![
            Span::styled(
                format!(" {} ", marker),
                Style::default().fg(app.theme.accent).bg(row_bg),
            ),
            Span::styled(
                task.title.clone(),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", Style::default().bg(row_bg)),
        ];
        header.push(chip(schedule.label(), app.theme.schedule_color(schedule)).bg(row_bg));
        header.push(Span::styled(" ", Style::default().bg(row_bg)));
        header.push(
            chip(
                &task.priority.label().to_lowercase(),
                app.theme.priority_color(task.priority),
            )
            .bg(row_bg),
        );
        lines.push(Line::from(header));

        lines.push(Line::from(Span::styled(
            format!(
                "   Project: {} \u{2022} Due: {}",
                task.project,
                format_date(task.due_date)
            ),
            Style::default().fg(app.theme.dim).bg(row_bg),
        )));

        if !task.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("   {}", task.description),
                Style::default().fg(app.theme.text).bg(row_bg),
            )));
        }

        lines.push(Line::from(Span::styled(
            format!("   Comments ({})", task.comments.len()),
            Style::default().fg(app.theme.accent).bg(row_bg),
        )));
        lines.push(Line::default());
    }

    if app.my_tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            " no tasks assigned",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_app;
    use crate::tui::render::test_helpers::render_to_string;

    #[test]
    fn test_my_tasks_view_shows_cards() {
        let app = test_app();
        let out = render_to_string(90, 24, |frame, area| {
            render_my_tasks_view(frame, &app, area);
        });
        assert!(out.contains("My Tasks"));
        assert!(out.contains("Update user documentation"));
        assert!(out.contains("Comments (2)"));
        assert!(out.contains("Project: Mobile App"));
    }

    #[test]
    fn test_my_tasks_view_derives_schedule_states() {
        let app = test_app();
        // today is 2025-05-01; all seeded employee due dates are 2024
        let out = render_to_string(90, 24, |frame, area| {
            render_my_tasks_view(frame, &app, area);
        });
        // Task 1 is done → completed; tasks 2 and 3 are past due → overdue
        assert!(out.contains("[completed]"));
        assert!(out.contains("[overdue]"));
        assert!(!out.contains("[pending]"));
    }
}
