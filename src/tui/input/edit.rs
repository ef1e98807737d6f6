use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, EditInput, Mode};

use super::common;

/// How a field in the edit popup is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FieldKind {
    /// Free text, edited inline
    Text,
    /// Text in YYYY-MM-DD form, parsed on commit
    Date,
    /// Value cycled with Left/Right
    Cycle,
}

/// Field kinds for the task edit popup, by field index
const TASK_FIELD_KINDS: [FieldKind; 6] = [
    FieldKind::Text,  // Title
    FieldKind::Text,  // Assigned To
    FieldKind::Cycle, // Status
    FieldKind::Cycle, // Priority
    FieldKind::Date,  // Due Date
    FieldKind::Cycle, // Project
];

/// Field kinds for the project edit popup, by field index
const PROJECT_FIELD_KINDS: [FieldKind; 6] = [
    FieldKind::Text,  // Name
    FieldKind::Text,  // Description
    FieldKind::Cycle, // Status
    FieldKind::Cycle, // Progress
    FieldKind::Date,  // Start Date
    FieldKind::Date,  // End Date
];

pub(super) fn field_kind(app: &App) -> FieldKind {
    if app.task_edit.is_some() {
        TASK_FIELD_KINDS[app.edit_field]
    } else {
        PROJECT_FIELD_KINDS[app.edit_field]
    }
}

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    // An active field input captures everything
    if app.edit_input.is_some() {
        handle_field_input(app, key);
        return;
    }

    match (key.modifiers, key.code) {
        // Cancel the whole session, discarding the buffer
        (_, KeyCode::Esc) => cancel_session(app),

        // Save the buffer back through the store
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => save_session(app),

        // Field navigation
        (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.edit_field = app.edit_field.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Down)
        | (KeyModifiers::NONE, KeyCode::Char('j'))
        | (KeyModifiers::NONE, KeyCode::Tab) => {
            app.edit_field = (app.edit_field + 1).min(5);
        }

        // Start editing a text/date field
        (KeyModifiers::NONE, KeyCode::Enter) => {
            if field_kind(app) != FieldKind::Cycle {
                begin_field_edit(app);
            }
        }

        // Cycle enum-like fields in place
        (KeyModifiers::NONE, KeyCode::Left) => {
            if field_kind(app) == FieldKind::Cycle {
                cycle_field(app, -1);
            }
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            if field_kind(app) == FieldKind::Cycle {
                cycle_field(app, 1);
            }
        }

        _ => {}
    }
}

fn handle_field_input(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.edit_input = None;
        }
        (_, KeyCode::Enter) => commit_field(app),
        (_, KeyCode::Backspace) => {
            if let Some(input) = &mut app.edit_input {
                common::backspace(input);
            }
        }
        (_, KeyCode::Left) => {
            if let Some(input) = &mut app.edit_input {
                common::cursor_left(input);
            }
        }
        (_, KeyCode::Right) => {
            if let Some(input) = &mut app.edit_input {
                common::cursor_right(input);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if let Some(input) = &mut app.edit_input {
                common::insert_char(input, c);
            }
        }
        _ => {}
    }
}

/// Current value of the selected field, as editable text
fn begin_field_edit(app: &mut App) {
    let text = if let Some(session) = &app.task_edit {
        let task = session.buffer();
        match app.edit_field {
            0 => task.title.clone(),
            1 => task.assigned_to.clone(),
            4 => task.due_date.format("%Y-%m-%d").to_string(),
            _ => return,
        }
    } else if let Some(session) = &app.project_edit {
        let project = session.buffer();
        match app.edit_field {
            0 => project.name.clone(),
            1 => project.description.clone(),
            4 => project.start_date.format("%Y-%m-%d").to_string(),
            5 => project.end_date.format("%Y-%m-%d").to_string(),
            _ => return,
        }
    } else {
        return;
    };
    app.edit_input = Some(EditInput::with_text(&text));
}

/// Write the input buffer into the staged record
fn commit_field(app: &mut App) {
    let Some(input) = &app.edit_input else { return };
    let text = input.buffer.clone();

    let kind = field_kind(app);
    if kind == FieldKind::Date {
        let date = match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                app.set_status("invalid date (expected YYYY-MM-DD)");
                return;
            }
        };
        if let Some(session) = &mut app.task_edit {
            session.buffer_mut().due_date = date;
        } else if let Some(session) = &mut app.project_edit {
            match app.edit_field {
                4 => session.buffer_mut().start_date = date,
                5 => session.buffer_mut().end_date = date,
                _ => {}
            }
        }
    } else if let Some(session) = &mut app.task_edit {
        match app.edit_field {
            0 => session.buffer_mut().title = text,
            1 => session.buffer_mut().assigned_to = text,
            _ => {}
        }
    } else if let Some(session) = &mut app.project_edit {
        match app.edit_field {
            0 => session.buffer_mut().name = text,
            1 => session.buffer_mut().description = text,
            _ => {}
        }
    }

    app.edit_input = None;
}

/// Cycle the selected enum-like field in the staged buffer
fn cycle_field(app: &mut App, dir: i8) {
    // Project names for the task "Project" picker
    let names = app.projects.names();

    if let Some(session) = &mut app.task_edit {
        let task = session.buffer_mut();
        match app.edit_field {
            2 => {
                task.status = if dir > 0 {
                    task.status.next()
                } else {
                    task.status.prev()
                };
            }
            3 => {
                task.priority = if dir > 0 {
                    task.priority.next()
                } else {
                    task.priority.prev()
                };
            }
            5 => {
                if names.is_empty() {
                    return;
                }
                let current = names.iter().position(|n| *n == task.project);
                let next = match current {
                    Some(i) if dir > 0 => (i + 1) % names.len(),
                    Some(i) => (i + names.len() - 1) % names.len(),
                    None => 0,
                };
                task.project = names[next].clone();
            }
            _ => {}
        }
    } else if let Some(session) = &mut app.project_edit {
        let project = session.buffer_mut();
        match app.edit_field {
            2 => project.status = project.status.next(),
            3 => {
                let step: i16 = if dir > 0 { 5 } else { -5 };
                project.progress = (project.progress as i16 + step).clamp(0, 100) as u8;
            }
            _ => {}
        }
    }
}

/// Save the staged buffer. On error the session stays open so the user can
/// fix the buffer or cancel.
fn save_session(app: &mut App) {
    if let Some(session) = &app.task_edit {
        match session.save(&mut app.tasks) {
            Ok(id) => {
                app.task_edit = None;
                app.mode = Mode::Navigate;
                app.set_status(format!("saved task {}", id));
                app.clamp_cursors();
            }
            Err(e) => app.set_status(e.to_string()),
        }
    } else if let Some(session) = &app.project_edit {
        let creating = session.is_new();
        match session.save(&mut app.projects) {
            Ok(id) => {
                app.project_edit = None;
                app.mode = Mode::Navigate;
                if creating {
                    app.set_status(format!("created project {}", id));
                } else {
                    app.set_status(format!("saved project {}", id));
                }
                app.clamp_cursors();
            }
            Err(e) => app.set_status(e.to_string()),
        }
    }
}

/// Discard the staged buffer unconditionally
fn cancel_session(app: &mut App) {
    app.task_edit = None;
    app.project_edit = None;
    app.edit_input = None;
    app.mode = Mode::Navigate;
    app.set_status("edit cancelled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::ProjectId;
    use crate::model::task::{TaskId, TaskStatus};
    use crate::ops::session::EditSession;
    use crate::store::TaskAction;
    use crate::tui::app::test_app;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn stage_task(app: &mut App, id: u64) {
        app.task_edit = Some(EditSession::stage(&app.tasks, TaskId(id)).unwrap());
        app.edit_field = 0;
        app.edit_input = None;
        app.mode = Mode::Edit;
    }

    #[test]
    fn test_edit_title_and_save() {
        let mut app = test_app();
        stage_task(&mut app, 1);

        handle_edit(&mut app, key(KeyCode::Enter)); // open title input
        assert!(app.edit_input.is_some());
        handle_edit(&mut app, key(KeyCode::Char(' ')));
        handle_edit(&mut app, key(KeyCode::Char('v')));
        handle_edit(&mut app, key(KeyCode::Char('2')));
        handle_edit(&mut app, key(KeyCode::Enter)); // commit field
        assert!(app.edit_input.is_none());

        handle_edit(&mut app, ctrl('s'));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.task_edit.is_none());
        assert_eq!(
            app.tasks.find(TaskId(1)).unwrap().title,
            "Update User Interface v2"
        );
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let mut app = test_app();
        stage_task(&mut app, 2);

        handle_edit(&mut app, key(KeyCode::Enter));
        for c in " changed".chars() {
            handle_edit(&mut app, key(KeyCode::Char(c)));
        }
        handle_edit(&mut app, key(KeyCode::Enter));
        handle_edit(&mut app, key(KeyCode::Esc)); // cancel session

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.task_edit.is_none());
        assert_eq!(
            app.tasks.find(TaskId(2)).unwrap().title,
            "Database Optimization"
        );
    }

    #[test]
    fn test_cycle_status_in_buffer_only() {
        let mut app = test_app();
        stage_task(&mut app, 1); // In Progress
        app.edit_field = 2;

        handle_edit(&mut app, key(KeyCode::Right));
        assert_eq!(
            app.task_edit.as_ref().unwrap().buffer().status,
            TaskStatus::Done
        );
        // Store unchanged until save
        assert_eq!(
            app.tasks.find(TaskId(1)).unwrap().status,
            TaskStatus::InProgress
        );
    }

    #[test]
    fn test_cycle_project_walks_store_names() {
        let mut app = test_app();
        stage_task(&mut app, 1); // project: Website Redesign (first)
        app.edit_field = 5;

        handle_edit(&mut app, key(KeyCode::Right));
        assert_eq!(
            app.task_edit.as_ref().unwrap().buffer().project,
            "Mobile App Development"
        );
        handle_edit(&mut app, key(KeyCode::Left));
        assert_eq!(
            app.task_edit.as_ref().unwrap().buffer().project,
            "Website Redesign"
        );
    }

    #[test]
    fn test_invalid_date_keeps_input_open() {
        let mut app = test_app();
        stage_task(&mut app, 1);
        app.edit_field = 4;
        app.edit_input = Some(EditInput::with_text("05/10/2025"));

        handle_edit(&mut app, key(KeyCode::Enter));
        assert!(app.edit_input.is_some());
        assert!(app.status_message.as_deref().unwrap().contains("invalid date"));
        assert_eq!(
            app.task_edit.as_ref().unwrap().buffer().due_date,
            app.tasks.find(TaskId(1)).unwrap().due_date
        );
    }

    #[test]
    fn test_stale_save_reports_conflict_and_keeps_session() {
        let mut app = test_app();
        stage_task(&mut app, 1);

        // A competing write bumps the revision underneath the session
        app.tasks
            .apply(TaskAction::SetStatus {
                id: TaskId(1),
                status: TaskStatus::Done,
            })
            .unwrap();

        handle_edit(&mut app, ctrl('s'));
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.task_edit.is_some());
        assert!(app.status_message.as_deref().unwrap().contains("conflict"));
    }

    #[test]
    fn test_project_progress_steps_and_clamps() {
        let mut app = test_app();
        app.project_edit =
            Some(EditSession::stage(&app.projects, ProjectId(5)).unwrap()); // 100%
        app.edit_field = 3;
        app.mode = Mode::Edit;

        handle_edit(&mut app, key(KeyCode::Right));
        assert_eq!(app.project_edit.as_ref().unwrap().buffer().progress, 100);
        handle_edit(&mut app, key(KeyCode::Left));
        assert_eq!(app.project_edit.as_ref().unwrap().buffer().progress, 95);
    }

    #[test]
    fn test_new_project_save_requires_name() {
        let mut app = test_app();
        app.project_edit = Some(EditSession::draft(crate::model::project::Project::draft(
            app.today,
        )));
        app.mode = Mode::Edit;

        handle_edit(&mut app, ctrl('s'));
        // Validation failure: still editing
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.project_edit.is_some());
        assert!(app.status_message.is_some());
        assert_eq!(app.projects.len(), 5);
    }
}
