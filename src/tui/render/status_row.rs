use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

const KEY_HINTS: &str = "\u{2190}\u{2192}/hl quadrant  \u{2191}\u{2193}/jk task  space done  a add  e edit  d delete  t context  ? tips  q quit";

/// Render the transient status message (blank when there is none)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let text = app
        .status_message
        .as_deref()
        .map(|m| truncate_to_width(m, area.width as usize))
        .unwrap_or_default();
    let line = Line::from(Span::styled(text, Style::default().fg(app.theme.status).bg(bg)));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

/// Render the dimmed key binding summary
pub fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = Line::from(Span::styled(
        truncate_to_width(KEY_HINTS, area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn hints_fit_wide_terminal() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(120, 1, |frame, area| {
            render_key_hints(frame, &app, area);
        });
        assert!(output.contains("q quit"));
    }

    #[test]
    fn hints_truncate_on_narrow_terminal() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(20, 1, |frame, area| {
            render_key_hints(frame, &app, area);
        });
        assert!(output.ends_with('\u{2026}'));
    }

    #[test]
    fn empty_status_renders_blank() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(40, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
