use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::TaskAction;
use crate::tui::app::{App, Mode};

use super::common;

pub(super) fn handle_comment(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.comment_state = None;
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => add_comment(app),
        (_, KeyCode::Backspace) => {
            if let Some(state) = &mut app.comment_state {
                common::backspace(&mut state.input);
            }
        }
        (_, KeyCode::Left) => {
            if let Some(state) = &mut app.comment_state {
                common::cursor_left(&mut state.input);
            }
        }
        (_, KeyCode::Right) => {
            if let Some(state) = &mut app.comment_state {
                common::cursor_right(&mut state.input);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if let Some(state) = &mut app.comment_state {
                common::insert_char(&mut state.input, c);
            }
        }
        _ => {}
    }
}

/// Append the typed comment. Success clears the input and closes the
/// dialog; blank text leaves it open untouched.
fn add_comment(app: &mut App) {
    let Some(state) = &app.comment_state else {
        return;
    };
    let (id, text) = (state.task_id, state.input.buffer.clone());

    match app.my_tasks.apply(TaskAction::AddComment {
        id,
        text,
        date: app.today,
    }) {
        Ok(_) => {
            app.comment_state = None;
            app.mode = Mode::Navigate;
            app.set_status("comment added");
        }
        Err(e) if e.is_validation() => app.set_status(e.to_string()),
        Err(e) => {
            app.comment_state = None;
            app.mode = Mode::Navigate;
            app.set_status(e.to_string());
        }
    }
}
