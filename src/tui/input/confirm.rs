use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::{ProjectAction, TaskAction};
use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let state = app.confirm_state.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state {
                match state.action {
                    ConfirmAction::DeleteTask { id } => confirm_delete_task(app, id),
                    ConfirmAction::DeleteProject { id } => confirm_delete_project(app, id),
                }
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm_state = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn confirm_delete_task(app: &mut App, id: crate::model::task::TaskId) {
    match app.tasks.apply(TaskAction::Delete { id }) {
        Ok(_) => app.set_status(format!("deleted task {}", id)),
        // Already gone is fine; anything else is surfaced
        Err(e) if e.is_not_found() => {}
        Err(e) => app.set_status(e.to_string()),
    }
    app.clamp_cursors();
}

fn confirm_delete_project(app: &mut App, id: crate::model::project::ProjectId) {
    match app.projects.apply(ProjectAction::Delete { id }) {
        Ok(_) => app.set_status(format!("deleted project {}", id)),
        Err(e) if e.is_not_found() => {}
        Err(e) => app.set_status(e.to_string()),
    }
    app.clamp_cursors();
}
