use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Quadrant, Task};
use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

use super::status_row;

/// Render the title bar, the 2x2 quadrant grid, and the status/hint rows
pub fn render_matrix_view(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // spacer
            Constraint::Min(4),    // grid
            Constraint::Length(1), // status message
            Constraint::Length(1), // key hints
        ])
        .split(area);

    render_title(frame, app, chunks[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    let grid = [
        (rows[0], Quadrant::UrgentImportant, Quadrant::NotUrgentImportant),
        (rows[1], Quadrant::UrgentNotImportant, Quadrant::NotUrgentNotImportant),
    ];
    for (row, left, right) in grid {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        render_quadrant(frame, app, left, cols[0]);
        render_quadrant(frame, app, right, cols[1]);
    }

    status_row::render_status_row(frame, app, chunks[3]);
    status_row::render_key_hints(frame, app, chunks[4]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let context = app.repo.current_context();
    let title = format!(" Eisenhower Matrix - {} Context ", context.title());
    let line = Line::from(Span::styled(
        title,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.title_color(context))
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_quadrant(frame: &mut Frame, app: &App, quadrant: Quadrant, area: Rect) {
    let context = app.repo.current_context();
    let accent = app.theme.quadrant_color(quadrant);
    let is_selected_quadrant = quadrant == app.selected_quadrant;
    let border_color = if is_selected_quadrant {
        accent
    } else {
        app.theme.inactive_border(context)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type(context))
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bg = app.theme.background;
    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        quadrant.label(),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    if app.show_tips {
        lines.push(Line::from(Span::styled(
            quadrant.tip(),
            Style::default()
                .fg(accent)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let capacity = inner.height as usize;
    let tasks = app.repo.list_by_quadrant(quadrant);
    for (i, task) in tasks.iter().enumerate() {
        let is_cursor = is_selected_quadrant && i == app.selected_index;
        let mut entry = vec![task_line(app, task, is_cursor, accent, width)];
        if is_cursor && !task.description.is_empty() {
            entry.push(Line::from(Span::styled(
                format!("  {}", truncate_to_width(&task.description, width.saturating_sub(2))),
                Style::default()
                    .fg(app.theme.description)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        // Leave room for the overflow marker while more tasks follow
        let reserve = usize::from(i + 1 < tasks.len());
        if lines.len() + entry.len() + reserve > capacity {
            lines.push(Line::from(Span::styled(
                "...",
                Style::default().fg(app.theme.dim).bg(bg),
            )));
            break;
        }
        lines.extend(entry);
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn task_line(app: &App, task: &Task, is_cursor: bool, accent: Color, width: usize) -> Line<'static> {
    let prefix = if task.completed {
        "\u{2713}" // ✓
    } else if is_cursor {
        "\u{25B6}" // ▶
    } else {
        "\u{2022}" // •
    };
    let mut style = if is_cursor {
        Style::default()
            .fg(app.theme.selection_fg)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    } else if task.completed {
        Style::default().fg(app.theme.completed).bg(app.theme.background)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    };
    if task.completed {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    let text = truncate_to_width(&format!("{} {}", prefix, task.title), width);
    Line::from(Span::styled(text, style))
}
