use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the delete confirmation prompt
pub fn render_confirm_view(frame: &mut Frame, app: &App, task_id: u64, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!("Delete task with ID {}?", task_id),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(task) = app.repo.get(task_id) {
        lines.push(Line::from(Span::styled(
            format!("  {}", task.title),
            Style::default().fg(app.theme.quadrant_color(task.quadrant)).bg(bg),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press 'y' to confirm, 'n' or Esc to cancel",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
