pub mod comment_popup;
pub mod confirm_popup;
pub mod edit_popup;
pub mod help_overlay;
pub mod helpers;
pub mod my_tasks_view;
pub mod overview;
pub mod projects_view;
pub mod status_row;
pub mod tab_bar;
pub mod tasks_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.view {
        View::Overview => overview::render_overview(frame, app, chunks[1]),
        View::Projects => projects_view::render_projects_view(frame, app, chunks[1]),
        View::Tasks => tasks_view::render_tasks_view(frame, app, chunks[1]),
        View::MyTasks => my_tasks_view::render_my_tasks_view(frame, app, chunks[1]),
    }

    // Popups render on top of the content area
    if app.task_edit.is_some() || app.project_edit.is_some() {
        edit_popup::render_edit_popup(frame, app, chunks[1]);
    }
    if app.confirm_state.is_some() {
        confirm_popup::render_confirm_popup(frame, app, chunks[1]);
    }
    if app.comment_state.is_some() {
        comment_popup::render_comment_popup(frame, app, chunks[1]);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_helpers::render_to_string;
    use crate::tui::app::test_app;

    #[test]
    fn test_full_frame_renders_overview_by_default() {
        let app = test_app();
        let out = render_to_string(100, 30, |frame, _area| {
            render(frame, &app);
        });
        assert!(out.contains("taskdeck"));
        assert!(out.contains("Welcome to Admin Dashboard"));
    }

    #[test]
    fn test_full_frame_renders_tasks_view() {
        let mut app = test_app();
        app.view = View::Tasks;
        let out = render_to_string(100, 30, |frame, _area| {
            render(frame, &app);
        });
        assert!(out.contains("Recent Tasks"));
        assert!(out.contains("priority: All"));
    }
}
