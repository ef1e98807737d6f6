mod comment;
mod common;
mod confirm;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Status messages live until the next key press
    app.status_message = None;

    // Help overlay intercepts all input
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Edit => edit::handle_edit(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
        Mode::Comment => comment::handle_comment(app, key),
    }
}
