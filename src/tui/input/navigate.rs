use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::project::Project;
use crate::model::task::{Priority, TaskStatus};
use crate::ops::session::EditSession;
use crate::store::TaskAction;
use crate::tui::app::{App, CommentState, ConfirmAction, ConfirmState, EditInput, Mode, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // View switching
        (KeyModifiers::NONE, KeyCode::Char('1')) => app.view = View::Overview,
        (KeyModifiers::NONE, KeyCode::Char('2')) => app.view = View::Projects,
        (KeyModifiers::NONE, KeyCode::Char('3')) => app.view = View::Tasks,
        (KeyModifiers::NONE, KeyCode::Char('4')) => app.view = View::MyTasks,
        (KeyModifiers::NONE, KeyCode::Tab) => app.view = app.view.next(),

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (KeyModifiers::NONE, KeyCode::Down) => {
            move_cursor(app, 1);
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (KeyModifiers::NONE, KeyCode::Up) => {
            move_cursor(app, -1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => set_cursor(app, 0),
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => set_cursor(app, usize::MAX),

        // Tasks view filters
        (KeyModifiers::NONE, KeyCode::Char('p')) if app.view == View::Tasks => {
            app.criteria.priority = cycle_priority(app.criteria.priority);
            app.clamp_cursors();
        }
        (KeyModifiers::NONE, KeyCode::Char('s')) if app.view == View::Tasks => {
            app.criteria.status = cycle_status(app.criteria.status);
            app.clamp_cursors();
        }

        // Edit / delete / create
        (KeyModifiers::NONE, KeyCode::Char('e')) => start_edit(app),
        (KeyModifiers::NONE, KeyCode::Char('x')) => request_delete(app),
        (KeyModifiers::NONE, KeyCode::Char('n')) if app.view == View::Projects => {
            new_project(app);
        }

        // My Tasks actions
        (KeyModifiers::NONE, KeyCode::Char('c')) if app.view == View::MyTasks => {
            open_comments(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('m')) if app.view == View::MyTasks => {
            mark_complete(app);
        }

        _ => {}
    }
}

fn cycle_priority(current: Option<Priority>) -> Option<Priority> {
    match current {
        None => Some(Priority::Low),
        Some(Priority::Low) => Some(Priority::Medium),
        Some(Priority::Medium) => Some(Priority::High),
        Some(Priority::High) => None,
    }
}

fn cycle_status(current: Option<TaskStatus>) -> Option<TaskStatus> {
    match current {
        None => Some(TaskStatus::ToDo),
        Some(TaskStatus::ToDo) => Some(TaskStatus::InProgress),
        Some(TaskStatus::InProgress) => Some(TaskStatus::Done),
        Some(TaskStatus::Done) => None,
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let (cursor, len) = match app.view {
        View::Projects => (&mut app.projects_cursor, app.projects.len()),
        View::Tasks => {
            let len = app.visible_tasks().len();
            (&mut app.tasks_cursor, len)
        }
        View::MyTasks => (&mut app.my_cursor, app.my_tasks.len()),
        View::Overview => return,
    };
    if len == 0 {
        *cursor = 0;
        return;
    }
    let next = cursor.saturating_add_signed(delta);
    *cursor = next.min(len - 1);
}

fn set_cursor(app: &mut App, to: usize) {
    let (cursor, len) = match app.view {
        View::Projects => (&mut app.projects_cursor, app.projects.len()),
        View::Tasks => {
            let len = app.visible_tasks().len();
            (&mut app.tasks_cursor, len)
        }
        View::MyTasks => (&mut app.my_cursor, app.my_tasks.len()),
        View::Overview => return,
    };
    *cursor = to.min(len.saturating_sub(1));
}

/// Stage the selected record for editing
fn start_edit(app: &mut App) {
    match app.view {
        View::Tasks => {
            let Some(id) = app.selected_task_id() else {
                return;
            };
            match EditSession::stage(&app.tasks, id) {
                Ok(session) => {
                    app.task_edit = Some(session);
                    app.edit_field = 0;
                    app.edit_input = None;
                    app.mode = Mode::Edit;
                }
                Err(e) => app.set_status(e.to_string()),
            }
        }
        View::Projects => {
            let Some(id) = app.selected_project_id() else {
                return;
            };
            match EditSession::stage(&app.projects, id) {
                Ok(session) => {
                    app.project_edit = Some(session);
                    app.edit_field = 0;
                    app.edit_input = None;
                    app.mode = Mode::Edit;
                }
                Err(e) => app.set_status(e.to_string()),
            }
        }
        _ => {}
    }
}

/// Stage a delete behind a y/n confirmation
fn request_delete(app: &mut App) {
    match app.view {
        View::Tasks => {
            let Some(id) = app.selected_task_id() else {
                return;
            };
            let title = app.tasks.find(id).map(|t| t.title.clone()).unwrap_or_default();
            app.confirm_state = Some(ConfirmState {
                action: ConfirmAction::DeleteTask { id },
                message: format!(
                    "Are you sure you want to delete task \"{}\"? This action cannot be undone.",
                    title
                ),
            });
            app.mode = Mode::Confirm;
        }
        View::Projects => {
            let Some(id) = app.selected_project_id() else {
                return;
            };
            let name = app
                .projects
                .find(id)
                .map(|p| p.name.clone())
                .unwrap_or_default();
            app.confirm_state = Some(ConfirmState {
                action: ConfirmAction::DeleteProject { id },
                message: format!(
                    "Are you sure you want to delete project \"{}\"? This action cannot be undone.",
                    name
                ),
            });
            app.mode = Mode::Confirm;
        }
        _ => {}
    }
}

/// Open the New Project dialog with a blank draft
fn new_project(app: &mut App) {
    app.project_edit = Some(EditSession::draft(Project::draft(app.today)));
    app.edit_field = 0;
    app.edit_input = None;
    app.mode = Mode::Edit;
}

/// Open the comments popup for the selected task
fn open_comments(app: &mut App) {
    let Some(id) = app.selected_my_task_id() else {
        return;
    };
    app.comment_state = Some(CommentState {
        task_id: id,
        input: EditInput::default(),
    });
    app.mode = Mode::Comment;
}

/// Mark the selected task done ("Mark Complete")
fn mark_complete(app: &mut App) {
    let Some(id) = app.selected_my_task_id() else {
        return;
    };
    match app.my_tasks.apply(TaskAction::SetStatus {
        id,
        status: TaskStatus::Done,
    }) {
        Ok(_) => app.set_status("marked complete"),
        Err(e) => app.set_status(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskId;
    use crate::tui::app::test_app;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_priority_filter_cycles_through_all() {
        let mut app = test_app();
        app.view = View::Tasks;
        assert_eq!(app.criteria.priority, None);
        for expected in [
            Some(Priority::Low),
            Some(Priority::Medium),
            Some(Priority::High),
            None,
        ] {
            handle_navigate(&mut app, key(KeyCode::Char('p')));
            assert_eq!(app.criteria.priority, expected);
        }
    }

    #[test]
    fn test_filter_clamps_cursor() {
        let mut app = test_app();
        app.view = View::Tasks;
        app.tasks_cursor = 4;
        // Low priority leaves a single visible task
        handle_navigate(&mut app, key(KeyCode::Char('p')));
        assert_eq!(app.criteria.priority, Some(Priority::Low));
        assert_eq!(app.tasks_cursor, 0);
    }

    #[test]
    fn test_cursor_movement_clamps() {
        let mut app = test_app();
        app.view = View::Projects;
        for _ in 0..10 {
            handle_navigate(&mut app, key(KeyCode::Down));
        }
        assert_eq!(app.projects_cursor, 4);
        handle_navigate(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.projects_cursor, 0);
    }

    #[test]
    fn test_edit_stages_selected_task() {
        let mut app = test_app();
        app.view = View::Tasks;
        app.tasks_cursor = 1;
        handle_navigate(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.mode, Mode::Edit);
        let session = app.task_edit.as_ref().unwrap();
        assert_eq!(session.buffer().title, "Database Optimization");
    }

    #[test]
    fn test_delete_requests_confirmation() {
        let mut app = test_app();
        app.view = View::Tasks;
        handle_navigate(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.mode, Mode::Confirm);
        let confirm = app.confirm_state.as_ref().unwrap();
        assert_eq!(
            confirm.action,
            ConfirmAction::DeleteTask { id: TaskId(1) }
        );
        assert!(confirm.message.contains("Update User Interface"));
        // Nothing deleted yet
        assert_eq!(app.tasks.len(), 5);
    }

    #[test]
    fn test_mark_complete_sets_done() {
        let mut app = test_app();
        app.view = View::MyTasks;
        app.my_cursor = 2;
        handle_navigate(&mut app, key(KeyCode::Char('m')));
        assert_eq!(
            app.my_tasks.find(TaskId(3)).unwrap().status,
            TaskStatus::Done
        );
    }

    #[test]
    fn test_new_project_opens_draft() {
        let mut app = test_app();
        app.view = View::Projects;
        handle_navigate(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.mode, Mode::Edit);
        let session = app.project_edit.as_ref().unwrap();
        assert!(session.is_new());
        assert_eq!(session.buffer().start_date, app.today);
    }

    #[test]
    fn test_comments_open_for_selected_task() {
        let mut app = test_app();
        app.view = View::MyTasks;
        app.my_cursor = 0;
        handle_navigate(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.mode, Mode::Comment);
        assert_eq!(app.comment_state.as_ref().unwrap().task_id, TaskId(1));
    }
}
