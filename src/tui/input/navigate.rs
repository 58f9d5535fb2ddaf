use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, EntryForm, Mode};

use super::*;

pub(super) fn handle_matrix(app: &mut App, key: KeyEvent) {
    if is_interrupt(&key) {
        app.quit();
        return;
    }
    if !is_plain(&key) {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Quadrant navigation
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Right | KeyCode::Char('l') => {
            app.selected_quadrant = app.selected_quadrant.horizontal_neighbor();
            app.selected_index = 0;
        }

        // Task navigation, spilling into the vertically adjacent quadrant
        KeyCode::Down | KeyCode::Char('j') => move_down(app),
        KeyCode::Up | KeyCode::Char('k') => move_up(app),

        KeyCode::Char('a') => {
            app.mode = Mode::Add(EntryForm::blank(app.selected_quadrant));
            app.clear_status();
        }
        KeyCode::Char('e') => begin_edit(app),
        KeyCode::Char('d') => begin_delete(app),
        KeyCode::Char(' ') | KeyCode::Enter => toggle_selected(app),

        KeyCode::Char('t') => {
            app.repo.toggle_context();
            app.selected_index = 0;
            app.clear_status();
            tracing::debug!(context = %app.repo.current_context(), "switched context");
        }

        KeyCode::Char('?') | KeyCode::F(1) => {
            app.show_tips = !app.show_tips;
            let message = if app.show_tips {
                "Tips enabled"
            } else {
                "Tips disabled"
            };
            let delay = app.timing.tips_clear();
            app.set_status_timed(message, delay);
        }

        _ => {}
    }
}

fn move_down(app: &mut App) {
    let len = app.selected_list().len();
    if app.selected_index + 1 < len {
        app.selected_index += 1;
    } else {
        app.selected_quadrant = app.selected_quadrant.vertical_neighbor();
        app.selected_index = 0;
    }
}

fn move_up(app: &mut App) {
    if app.selected_index > 0 {
        app.selected_index -= 1;
    } else {
        app.selected_quadrant = app.selected_quadrant.vertical_neighbor();
        app.selected_index = app.selected_list().len().saturating_sub(1);
    }
}

fn begin_edit(app: &mut App) {
    let (task_id, form) = match app.selected_task() {
        Some(task) => (task.id, EntryForm::from_task(task)),
        None => return,
    };
    app.mode = Mode::Edit { task_id, form };
    app.clear_status();
}

fn begin_delete(app: &mut App) {
    let task_id = match app.selected_task() {
        Some(task) => task.id,
        None => return,
    };
    app.mode = Mode::Delete { task_id };
    app.clear_status();
}

fn toggle_selected(app: &mut App) {
    let task_id = match app.selected_task() {
        Some(task) => task.id,
        None => return,
    };
    if !app.repo.toggle_completion(task_id) {
        tracing::debug!(task_id, "toggle target vanished");
        return;
    }
    let completed = app.repo.get(task_id).is_some_and(|t| t.completed);
    let message = if completed {
        "Task completed"
    } else {
        "Task marked as incomplete"
    };
    let delay = app.timing.status_clear();
    app.set_status_timed(message, delay);
    app.persist();
}
