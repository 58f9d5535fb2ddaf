use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::*;

/// Delete confirmation: only y, n and Esc do anything
pub(super) fn handle_delete(app: &mut App, key: KeyEvent) {
    let task_id = match app.mode {
        Mode::Delete { task_id } => task_id,
        _ => return,
    };
    match key.code {
        KeyCode::Char('y') if is_plain(&key) => confirm_delete(app, task_id),
        KeyCode::Char('n') if is_plain(&key) => {
            app.mode = Mode::Matrix;
            app.set_status("Delete cancelled");
        }
        KeyCode::Esc => {
            app.mode = Mode::Matrix;
            app.set_status("Delete cancelled");
        }
        _ => {}
    }
}

fn confirm_delete(app: &mut App, task_id: u64) {
    app.mode = Mode::Matrix;
    if !app.repo.delete(task_id) {
        tracing::debug!(task_id, "delete target vanished");
        app.clamp_selection();
        app.clear_status();
        return;
    }
    tracing::debug!(task_id, "deleted task");
    app.clamp_selection();
    let delay = app.timing.status_clear();
    app.set_status_timed("Task deleted successfully", delay);
    app.persist();
}
