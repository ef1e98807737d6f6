use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::task::{Priority, TaskStatus};
use crate::ops::stats::{OverviewStats, overview_stats};
use crate::tui::app::App;

use super::helpers::bar;

/// Render the admin dashboard overview: summary cards and task breakdowns
pub fn render_overview(frame: &mut Frame, app: &App, area: Rect) {
    let stats = overview_stats(app.projects.projects(), app.tasks.tasks());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Length(5), // card row 1
            Constraint::Length(5), // card row 2
            Constraint::Min(1),    // breakdowns
        ])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        " Welcome to Admin Dashboard",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(app.theme.background));
    frame.render_widget(heading, chunks[0]);

    render_card_row_one(frame, app, &stats, chunks[1]);
    render_card_row_two(frame, app, &stats, chunks[2]);
    render_breakdowns(frame, app, &stats, chunks[3]);
}

fn render_card_row_one(frame: &mut Frame, app: &App, stats: &OverviewStats, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    render_card(
        frame,
        app,
        cols[0],
        "Total Projects",
        stats.total_projects,
        &format!("{} active", stats.active_projects),
        app.theme.blue,
    );
    render_card(
        frame,
        app,
        cols[1],
        "Total Tasks",
        stats.total_tasks,
        &format!("{} done", stats.done_tasks),
        app.theme.orange,
    );
    render_card(
        frame,
        app,
        cols[2],
        "Team Members",
        stats.team_members,
        "across all tasks",
        app.theme.green,
    );
    render_card(
        frame,
        app,
        cols[3],
        "Completed Projects",
        stats.completed_projects,
        &format!("{}% completion rate", stats.completion_rate),
        app.theme.purple,
    );
}

fn render_card_row_two(frame: &mut Frame, app: &App, stats: &OverviewStats, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    render_card(
        frame,
        app,
        cols[0],
        "Pending Tasks",
        stats.pending_tasks,
        "tasks need attention",
        app.theme.red,
    );
    render_card(
        frame,
        app,
        cols[1],
        "Avg Progress",
        stats.avg_progress as usize,
        "mean across projects",
        app.theme.accent,
    );
}

fn render_card(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    count: usize,
    description: &str,
    color: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).bg(app.theme.background))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(color).bg(app.theme.background),
        ));

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", count),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", description),
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn render_breakdowns(frame: &mut Frame, app: &App, stats: &OverviewStats, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(area);

    let max_status = stats.by_status.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let status_lines: Vec<Line> = stats
        .by_status
        .iter()
        .map(|(status, n)| breakdown_line(app, status.label(), *n, max_status, status_color(app, *status)))
        .collect();
    render_breakdown_block(frame, app, cols[0], "Tasks by Status", status_lines);

    let max_priority = stats.by_priority.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let priority_lines: Vec<Line> = stats
        .by_priority
        .iter()
        .map(|(priority, n)| {
            breakdown_line(
                app,
                priority.label(),
                *n,
                max_priority,
                priority_color(app, *priority),
            )
        })
        .collect();
    render_breakdown_block(frame, app, cols[1], "Tasks by Priority", priority_lines);
}

fn status_color(app: &App, status: TaskStatus) -> Color {
    app.theme.status_color(status)
}

fn priority_color(app: &App, priority: Priority) -> Color {
    app.theme.priority_color(priority)
}

fn breakdown_line<'a>(
    app: &App,
    label: &str,
    count: usize,
    max: usize,
    color: Color,
) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!(" {:<12}", label),
            Style::default().fg(app.theme.text).bg(app.theme.background),
        ),
        Span::styled(
            bar(count, max, 16),
            Style::default().fg(color).bg(app.theme.background),
        ),
        Span::styled(
            format!(" {}", count),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background),
        ),
    ])
}

fn render_breakdown_block(frame: &mut Frame, app: &App, area: Rect, title: &str, lines: Vec<Line>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(app.theme.background))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(app.theme.text).bg(app.theme.background),
        ));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
