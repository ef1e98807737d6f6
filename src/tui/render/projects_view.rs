use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::dates::format_date;

use super::helpers::{bar, fixed_width};

const NAME_W: usize = 24;
const PROGRESS_W: usize = 16;
const DATE_W: usize = 14;
const STATUS_W: usize = 11;

/// Render the projects table
pub fn render_projects_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " Latest Projects",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    // Column headers
    lines.push(Line::from(Span::styled(
        format!(
            " {}{}{}{}{}Description",
            fixed_width("Name", NAME_W),
            fixed_width("Progress", PROGRESS_W),
            fixed_width("Start Date", DATE_W),
            fixed_width("End Date", DATE_W),
            fixed_width("Status", STATUS_W),
        ),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    for (i, project) in app.projects.projects().iter().enumerate() {
        let selected = i == app.projects_cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let text_style = Style::default().fg(app.theme.text).bg(row_bg);

        let mut spans = vec![
            Span::styled(
                format!(" {}", fixed_width(&project.name, NAME_W)),
                if selected {
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(row_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.text_bright).bg(row_bg)
                },
            ),
            Span::styled(
                fixed_width(
                    &format!("{} {:>3}%", bar(project.progress as usize, 100, 8), project.progress),
                    PROGRESS_W,
                ),
                Style::default()
                    .fg(app.theme.progress_color(project.progress))
                    .bg(row_bg),
            ),
            Span::styled(
                fixed_width(&format_date(project.start_date), DATE_W),
                text_style,
            ),
            Span::styled(
                fixed_width(&format_date(project.end_date), DATE_W),
                text_style,
            ),
            Span::styled(
                fixed_width(project.status.label(), STATUS_W),
                Style::default()
                    .fg(app.theme.project_status_color(project.status))
                    .bg(row_bg),
            ),
        ];
        spans.push(Span::styled(
            project.description.clone(),
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));

        lines.push(Line::from(spans));
    }

    if app.projects.is_empty() {
        lines.push(Line::from(Span::styled(
            " no projects",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
