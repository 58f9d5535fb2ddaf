use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, EntryForm, Field, Mode};
use crate::util::unicode::pop_grapheme;

use super::*;

/// Add and edit share the two-field wizard: title, then description
pub(super) fn handle_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel_entry(app),
        KeyCode::Enter => advance_entry(app),
        KeyCode::Backspace => {
            if let Some(form) = app.mode.form_mut() {
                pop_grapheme(&mut form.input);
            }
        }
        KeyCode::Char(c) if is_plain(&key) => {
            if let Some(form) = app.mode.form_mut() {
                form.input.push(c);
            }
        }
        _ => {}
    }
}

fn cancel_entry(app: &mut App) {
    let message = match app.mode {
        Mode::Edit { .. } => "Edit cancelled",
        _ => "Add cancelled",
    };
    app.mode = Mode::Matrix;
    app.set_status(message);
}

fn advance_entry(app: &mut App) {
    let reseed_description = matches!(app.mode, Mode::Edit { .. });
    let form = match app.mode.form_mut() {
        Some(form) => form,
        None => return,
    };

    match form.field {
        Field::Title => {
            form.title = std::mem::take(&mut form.input);
            form.field = Field::Description;
            if reseed_description {
                form.input = form.description.clone();
            }
        }
        Field::Description => {
            form.description = std::mem::take(&mut form.input);
            match std::mem::replace(&mut app.mode, Mode::Matrix) {
                Mode::Add(form) => commit_add(app, form),
                Mode::Edit { task_id, form } => commit_edit(app, task_id, form),
                other => app.mode = other,
            }
        }
    }
}

fn commit_add(app: &mut App, form: EntryForm) {
    let context = app.repo.current_context();
    let task = app
        .repo
        .add(&form.title, &form.description, form.quadrant, context);
    tracing::debug!(id = task.id, quadrant = form.quadrant.code(), %context, "added task");
    let delay = app.timing.status_clear();
    app.set_status_timed("Task added successfully", delay);
    app.persist();
}

fn commit_edit(app: &mut App, task_id: u64, form: EntryForm) {
    if !app
        .repo
        .update(task_id, &form.title, &form.description, form.quadrant)
    {
        tracing::debug!(task_id, "edited task no longer exists");
        app.clear_status();
        return;
    }
    let delay = app.timing.status_clear();
    app.set_status_timed("Task updated successfully", delay);
    app.persist();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryStorage;
    use crate::model::{Config, Context, Quadrant};
    use crate::ops::TaskRepository;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_entry(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_in_add(quadrant: Quadrant) -> (App, MemoryStorage) {
        let storage = MemoryStorage::new();
        let mut app = App::load(Box::new(storage.clone()), &Config::default()).unwrap();
        app.mode = Mode::Add(EntryForm::blank(quadrant));
        (app, storage)
    }

    fn app_editing() -> (App, MemoryStorage) {
        let mut repo = TaskRepository::new();
        repo.add("Write report", "draft", Quadrant::NotUrgentImportant, Context::Work);
        let storage = MemoryStorage::with_tasks(repo.tasks().to_vec());
        let mut app = App::load(Box::new(storage.clone()), &Config::default()).unwrap();
        let form = EntryForm::from_task(app.repo.get(1).unwrap());
        app.mode = Mode::Edit { task_id: 1, form };
        (app, storage)
    }

    #[test]
    fn typing_and_backspace_edit_buffer() {
        let (mut app, _) = app_in_add(Quadrant::UrgentImportant);
        type_text(&mut app, "Buy");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.mode.form().unwrap().input, "Bu");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.mode.form().unwrap().input, "");
    }

    #[test]
    fn shifted_characters_are_typed() {
        let (mut app, _) = app_in_add(Quadrant::UrgentImportant);
        handle_entry(&mut app, KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
        handle_entry(&mut app, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert_eq!(app.mode.form().unwrap().input, "B");
    }

    #[test]
    fn matrix_keys_are_text_in_add_mode() {
        let (mut app, _) = app_in_add(Quadrant::UrgentImportant);
        type_text(&mut app, "q t?");
        assert_eq!(app.mode.form().unwrap().input, "q t?");
        assert!(!app.should_quit);
    }

    #[test]
    fn enter_on_title_advances_to_description() {
        let (mut app, storage) = app_in_add(Quadrant::UrgentImportant);
        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        let form = app.mode.form().unwrap();
        assert_eq!(form.field, Field::Description);
        assert_eq!(form.title, "Buy milk");
        assert_eq!(form.input, "");
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn add_commit_creates_task_and_persists() {
        let (mut app, storage) = app_in_add(Quadrant::UrgentNotImportant);
        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "2%");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Matrix);
        let task = app.repo.get(1).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2%");
        assert_eq!(task.quadrant, Quadrant::UrgentNotImportant);
        assert_eq!(task.context, Context::Work);
        assert!(!task.completed);
        assert_eq!(storage.save_count(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Task added successfully"));
        assert_eq!(app.take_pending_clears().len(), 1);
    }

    #[test]
    fn add_escape_discards_with_sticky_message() {
        let (mut app, storage) = app_in_add(Quadrant::UrgentImportant);
        type_text(&mut app, "nope");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Matrix);
        assert!(app.repo.tasks().is_empty());
        assert_eq!(storage.save_count(), 0);
        assert_eq!(app.status_message.as_deref(), Some("Add cancelled"));
        assert!(app.take_pending_clears().is_empty());
    }

    #[test]
    fn edit_reseeds_description_on_second_field() {
        let (mut app, _) = app_editing();
        press(&mut app, KeyCode::Enter);
        let form = app.mode.form().unwrap();
        assert_eq!(form.field, Field::Description);
        assert_eq!(form.title, "Write report");
        assert_eq!(form.input, "draft");
    }

    #[test]
    fn edit_commit_updates_in_place() {
        let (mut app, storage) = app_editing();
        type_text(&mut app, " v2");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, " final");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Matrix);
        let task = app.repo.get(1).unwrap();
        assert_eq!(task.title, "Write report v2");
        assert_eq!(task.description, "draft final");
        assert_eq!(task.quadrant, Quadrant::NotUrgentImportant);
        assert_eq!(storage.save_count(), 1);
        assert_eq!(storage.saved()[0].title, "Write report v2");
        assert_eq!(app.status_message.as_deref(), Some("Task updated successfully"));
    }

    #[test]
    fn edit_escape_leaves_task_untouched() {
        let (mut app, storage) = app_editing();
        let before = app.repo.get(1).unwrap().clone();
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Matrix);
        assert_eq!(app.repo.get(1).unwrap(), &before);
        assert_eq!(storage.save_count(), 0);
        assert_eq!(app.status_message.as_deref(), Some("Edit cancelled"));
    }

    #[test]
    fn edit_of_vanished_task_is_noop() {
        let (mut app, storage) = app_editing();
        app.repo.delete(1);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Matrix);
        assert!(app.repo.tasks().is_empty());
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn save_failure_replaces_success_message() {
        let (mut app, storage) = app_in_add(Quadrant::UrgentImportant);
        storage.set_fail_saves(true);
        type_text(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.repo.tasks().len(), 1);
        assert!(app.status_message.as_deref().unwrap().starts_with("Save failed"));
    }
}
