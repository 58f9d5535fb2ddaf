use ratatui::style::Color;
use ratatui::widgets::BorderType;

use crate::model::{Context, Quadrant, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub selection_fg: Color,
    pub completed: Color,
    pub description: Color,
    pub status: Color,
    pub title_work: Color,
    pub title_private: Color,
    pub inactive_work: Color,
    pub inactive_private: Color,
    pub urgent_important: Color,
    pub not_urgent_important: Color,
    pub urgent_not_important: Color,
    pub not_urgent_not_important: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Reset,
            text: Color::Rgb(0xFA, 0xFA, 0xFA),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x62, 0x62, 0x62),
            selection_fg: Color::Rgb(0x00, 0x00, 0x00),
            completed: Color::Rgb(0x66, 0x66, 0x66),
            description: Color::Rgb(0x88, 0x88, 0x88),
            status: Color::Rgb(0x04, 0xB5, 0x75),
            title_work: Color::Rgb(0x7D, 0x56, 0xF4),
            title_private: Color::Rgb(0x04, 0xB5, 0x75),
            inactive_work: Color::Rgb(0x3C, 0x3C, 0x3C),
            inactive_private: Color::Rgb(0x2C, 0x4A, 0x3D),
            urgent_important: Color::Rgb(0xE0, 0x7A, 0x3F),
            not_urgent_important: Color::Rgb(0x2A, 0x7F, 0x7C),
            urgent_not_important: Color::Rgb(0xD4, 0xA5, 0x74),
            not_urgent_not_important: Color::Rgb(0x8B, 0x86, 0x80),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = key.as_str(), value = value.as_str(), "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "selection_fg" => theme.selection_fg = color,
                "completed" => theme.completed = color,
                "description" => theme.description = color,
                "status" => theme.status = color,
                "title_work" => theme.title_work = color,
                "title_private" => theme.title_private = color,
                "inactive_work" => theme.inactive_work = color,
                "inactive_private" => theme.inactive_private = color,
                "urgent_important" => theme.urgent_important = color,
                "not_urgent_important" => theme.not_urgent_important = color,
                "urgent_not_important" => theme.urgent_not_important = color,
                "not_urgent_not_important" => theme.not_urgent_not_important = color,
                _ => tracing::warn!(key = key.as_str(), "unknown color slot"),
            }
        }

        theme
    }

    /// Accent color for a quadrant's border and selection
    pub fn quadrant_color(&self, quadrant: Quadrant) -> Color {
        match quadrant {
            Quadrant::UrgentImportant => self.urgent_important,
            Quadrant::NotUrgentImportant => self.not_urgent_important,
            Quadrant::UrgentNotImportant => self.urgent_not_important,
            Quadrant::NotUrgentNotImportant => self.not_urgent_not_important,
        }
    }

    /// Title bar background for a context
    pub fn title_color(&self, context: Context) -> Color {
        match context {
            Context::Work => self.title_work,
            Context::Private => self.title_private,
        }
    }

    /// Border color of unselected quadrants
    pub fn inactive_border(&self, context: Context) -> Color {
        match context {
            Context::Work => self.inactive_work,
            Context::Private => self.inactive_private,
        }
    }

    /// Work uses rounded borders, private uses double borders
    pub fn border_type(&self, context: Context) -> BorderType {
        match context {
            Context::Work => BorderType::Rounded,
            Context::Private => BorderType::Double,
        }
    }
}
