use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::storage::MemoryStorage;
use crate::model::{Config, Context, Quadrant};
use crate::ops::TaskRepository;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over in-memory storage holding the given tasks
/// (title, description, quadrant, context), ids assigned from 1.
pub fn app_with_tasks(specs: &[(&str, &str, Quadrant, Context)]) -> App {
    let mut repo = TaskRepository::new();
    for (title, description, quadrant, context) in specs {
        repo.add(title, description, *quadrant, *context);
    }
    let storage = MemoryStorage::with_tasks(repo.tasks().to_vec());
    App::load(Box::new(storage), &Config::default()).unwrap()
}
