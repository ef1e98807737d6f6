use ratatui::style::Color;

use crate::model::UiConfig;
use crate::model::project::ProjectStatus;
use crate::model::task::{Priority, ScheduleState, TaskStatus};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub red: Color,
    pub orange: Color,
    pub green: Color,
    pub blue: Color,
    pub gray: Color,
    pub purple: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0xC8, 0xCC, 0xD4),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            accent: Color::Rgb(0x21, 0x96, 0xF3),
            selection_bg: Color::Rgb(0x1F, 0x29, 0x37),
            selection_border: Color::Rgb(0x21, 0x96, 0xF3),
            red: Color::Rgb(0xF4, 0x43, 0x36),
            orange: Color::Rgb(0xFF, 0x98, 0x00),
            green: Color::Rgb(0x4C, 0xAF, 0x50),
            blue: Color::Rgb(0x21, 0x96, 0xF3),
            gray: Color::Rgb(0x75, 0x75, 0x75),
            purple: Color::Rgb(0x9C, 0x27, 0xB0),
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
    /// Create a theme from workspace UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    "red" => theme.red = color,
                    "orange" => theme.orange = color,
                    "green" => theme.green = color,
                    "blue" => theme.blue = color,
                    "gray" => theme.gray = color,
                    "purple" => theme.purple = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Chip color for a task priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.red,
            Priority::Medium => self.orange,
            Priority::Low => self.green,
        }
    }

    /// Chip color for a task status
    pub fn status_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Done => self.green,
            TaskStatus::InProgress => self.blue,
            TaskStatus::ToDo => self.gray,
        }
    }

    /// Chip color for a derived schedule state
    pub fn schedule_color(&self, state: ScheduleState) -> Color {
        match state {
            ScheduleState::Completed => self.green,
            ScheduleState::Pending => self.orange,
            ScheduleState::Overdue => self.red,
        }
    }

    /// Chip color for a project status
    pub fn project_status_color(&self, status: ProjectStatus) -> Color {
        match status {
            ProjectStatus::Active => self.blue,
            ProjectStatus::Completed => self.green,
        }
    }

    /// Progress bars turn green at 100%
    pub fn progress_color(&self, progress: u8) -> Color {
        if progress >= 100 { self.green } else { self.blue }
    }
}
