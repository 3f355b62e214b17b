use std::cmp::min;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::Importance;

pub const BG_BASE: Color = Color::Rgb(14, 17, 23);
pub const BG_PANEL: Color = Color::Rgb(22, 26, 34);
pub const BG_ACCENT: Color = Color::Rgb(32, 37, 47);
pub const FG_ACCENT: Color = Color::Rgb(120, 161, 255);
pub const BG_DROP: Color = Color::Rgb(48, 56, 30);

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub fn inset_rect(area: Rect, padding: u16) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    let px = padding.min(area.width / 2);
    let py = padding.min(area.height / 2);
    Rect {
        x: area.x + px,
        y: area.y + py,
        width: area.width.saturating_sub(px * 2),
        height: area.height.saturating_sub(py * 2),
    }
}

pub fn importance_style(importance: Importance) -> Style {
    match importance {
        Importance::Low => Style::default().fg(Color::DarkGray),
        Importance::Normal => Style::default().fg(Color::Cyan),
        Importance::High => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    }
}

pub fn build_help_lines() -> Vec<(&'static str, &'static str)> {
    vec![
        ("j / k or ↓ / ↑", "Move the cursor within a column"),
        ("h / l or ← / → / Tab", "Switch between Pending and Completed"),
        ("Space", "Grab the task under the cursor by its handle"),
        ("↑ / ↓ / ← / → (dragging)", "Hover a drop spot"),
        ("Enter / Space (dragging)", "Drop onto the hovered spot"),
        ("Esc (dragging)", "Cancel the drag"),
        ("c", "Toggle completion"),
        ("a", "Add a task"),
        ("e / Enter", "Edit the task under the cursor"),
        ("x / Delete", "Delete task (with confirmation)"),
        ("?", "Toggle this help overlay"),
        ("q", "Quit"),
    ]
}

pub fn accent_title(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
    )])
}
