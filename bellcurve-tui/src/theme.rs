//! Color tokens and style helpers for the explorer UI.
//!
//! Dark terminal palette: cyan accent for focus and bars, orange for the
//! theoretical curve, pink for errors, steel blue for secondary text.

use ratatui::style::{Color, Modifier, Style};

/// Electric cyan — focus, histogram bars.
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Neon orange — the density curve and its anchor.
pub const CURVE: Color = Color::Rgb(255, 165, 0);
/// Hot pink — errors.
pub const NEGATIVE: Color = Color::Rgb(255, 64, 160);
/// Neon green — confirmations.
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
/// Neon orange-yellow — warnings.
pub const WARNING: Color = Color::Rgb(255, 200, 0);
/// Steel blue — muted/secondary text.
pub const MUTED: Color = Color::Rgb(110, 130, 160);
/// Primary text.
pub const TEXT: Color = Color::Rgb(220, 220, 220);

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn value() -> Style {
    Style::default().fg(TEXT)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn curve() -> Style {
    Style::default().fg(CURVE)
}

pub fn label() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

/// Style for a draggable anchor marker; brightened while the drag is live.
pub fn anchor(color: Color, dragging: bool) -> Style {
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if dragging {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}
