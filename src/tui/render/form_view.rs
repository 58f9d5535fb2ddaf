use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::app::{App, EntryForm, Field};

const CURSOR: &str = "\u{2588}"; // █

/// Render the add/edit wizard: finished fields as plain text, the active one with a cursor
pub fn render_form_view(frame: &mut Frame, app: &App, heading: &str, form: &EntryForm, area: Rect) {
    let bg = app.theme.background;
    let label_style = Style::default()
        .fg(app.theme.quadrant_color(form.quadrant))
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let cursor_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            heading.to_string(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match form.field {
        Field::Title => {
            lines.push(Line::from(vec![
                Span::styled("Title: ", label_style),
                Span::styled(form.input.clone(), text_style),
                Span::styled(CURSOR, cursor_style),
            ]));
        }
        Field::Description => {
            lines.push(Line::from(vec![
                Span::styled("Title: ", label_style),
                Span::styled(form.title.clone(), text_style),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Description: ", label_style),
                Span::styled(form.input.clone(), text_style),
                Span::styled(CURSOR, cursor_style),
            ]));
        }
    }

    lines.push(Line::from(vec![
        Span::styled("Quadrant: ", label_style),
        Span::styled(form.quadrant.label(), text_style),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to confirm, Esc to cancel",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
