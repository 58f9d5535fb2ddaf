mod common;
mod confirm;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

#[allow(unused_imports)]
use common::*;
use confirm::handle_delete;
use edit::handle_entry;
use navigate::handle_matrix;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    tracing::trace!(mode = app.mode.name(), code = ?key.code, "key");
    match &app.mode {
        Mode::Matrix => handle_matrix(app, key),
        Mode::Add(_) | Mode::Edit { .. } => handle_entry(app, key),
        Mode::Delete { .. } => handle_delete(app, key),
    }
}

/// Handle a bracketed paste event. Only the add/edit wizard accepts text;
/// newlines are flattened to spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if let Some(form) = app.mode.form_mut() {
        form.input.push_str(&crate::util::unicode::single_line(text));
    }
}
