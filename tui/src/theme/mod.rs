//! Theme and Colors
//!
//! The clock grid palette. Every cell category gets one background and a
//! foreground that stays readable on it.

use ratatui::style::{Color, Modifier, Style};

use clockgrid_core::{Category, CounterKind};

// ============================================================================
// Cell Category Palette
// ============================================================================

/// Hovered label - bright yellow
pub const HOVER_BG: Color = Color::Rgb(255, 235, 59);

/// Hover accent (the orange border in the grid)
pub const HOVER_ACCENT: Color = Color::Rgb(255, 152, 0);

/// Hour and answer matches - green
pub const GREEN_BG: Color = Color::Rgb(0, 255, 0);

/// Second - red
pub const SECOND_BG: Color = Color::Rgb(255, 0, 0);

/// Minute - blue
pub const MINUTE_BG: Color = Color::Rgb(0, 0, 255);

/// Unlit cell
pub const DEFAULT_BG: Color = Color::Rgb(26, 26, 26);

/// Panel border
pub const BORDER_GRAY: Color = Color::Rgb(51, 51, 51);

// ============================================================================
// UI Colors
// ============================================================================

/// Tab titles and accents
pub const ACCENT_CYAN: Color = Color::Rgb(100, 200, 255);

/// Help/status text
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Locked answer cells
pub const LOCKED_GRAY: Color = Color::Rgb(150, 150, 150);

/// Selected clue words
pub const SELECTED_BG: Color = Color::Rgb(90, 70, 0);

/// Style for a resolved grid cell
#[must_use]
pub fn category_style(category: Category) -> Style {
    match category {
        Category::Hover => Style::default()
            .bg(HOVER_BG)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Category::Hour | Category::Match => Style::default().bg(GREEN_BG).fg(Color::Black),
        Category::Second => Style::default().bg(SECOND_BG).fg(Color::White),
        Category::Minute => Style::default().bg(MINUTE_BG).fg(Color::White),
        Category::Default => Style::default().bg(DEFAULT_BG).fg(Color::White),
        Category::Empty => Style::default(),
    }
}

/// Color of one counter row in the clue view
#[must_use]
pub fn counter_color(kind: CounterKind) -> Color {
    match kind {
        CounterKind::Letters => Color::Rgb(255, 120, 120),
        CounterKind::WordInLine => Color::Rgb(120, 200, 255),
        CounterKind::WordInClue => Color::Rgb(130, 220, 130),
        CounterKind::SpaceBefore => Color::Rgb(255, 200, 100),
        CounterKind::SpaceInLine => Color::Rgb(200, 150, 255),
        CounterKind::SpaceInClue => Color::Rgb(255, 150, 200),
    }
}
