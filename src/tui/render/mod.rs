pub mod confirm_view;
pub mod form_view;
pub mod matrix_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function, dispatches on the current mode
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    match &app.mode {
        Mode::Matrix => matrix_view::render_matrix_view(frame, app, area),
        Mode::Add(form) => form_view::render_form_view(frame, app, "Add New Task", form, area),
        Mode::Edit { form, .. } => form_view::render_form_view(frame, app, "Edit Task", form, area),
        Mode::Delete { task_id } => confirm_view::render_confirm_view(frame, app, *task_id, area),
    }
}
