//! Highlight Resolution
//!
//! Several signals compete for a cell's colour: the current time, a hovered
//! answer, and membership in the answer sheet. [`resolve`] picks exactly one
//! [`Category`] per cell with a fixed precedence:
//!
//! | # | Condition                              | Category |
//! |---|----------------------------------------|----------|
//! | 0 | cell has no label                      | `Empty`  |
//! | 1 | label == hovered                       | `Hover`  |
//! | 2 | row == 0 and label == hour             | `Hour`   |
//! | 3 | row > 0 and label == second            | `Second` |
//! | 4 | row > 0 and label == minute            | `Minute` |
//! | 5 | label is an answer member              | `Match`  |
//! | 6 | otherwise                              | `Default`|
//!
//! The hour marks only live in the first row and the minute/second marks
//! only below it, so the row gates keep e.g. `"05"` past the hour from
//! lighting up the hour mark `05`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::clock::ClockReading;
use crate::grid::{Cell, Grid};
use crate::sequence::Label;

/// Resolved visual state of a cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Label matches the hovered answer
    Hover,
    /// Current hour (first row only)
    Hour,
    /// Current minute (below the first row)
    Minute,
    /// Current second (below the first row)
    Second,
    /// Label appears in the answer sheet
    Match,
    /// No signal applies
    #[default]
    Default,
    /// Padding cell
    Empty,
}

/// The signals a cell is resolved against
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightContext {
    /// Label currently hovered, if any
    pub hovered: Option<Label>,
    /// Current hour label (12-hour dial)
    pub hour: Option<Label>,
    /// Current minute label
    pub minute: Option<Label>,
    /// Current second label
    pub second: Option<Label>,
    /// Normalized labels present in the answer sheet
    pub answer_members: BTreeSet<Label>,
}

impl HighlightContext {
    /// Empty context: every labeled cell resolves to `Default`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time signals from a clock reading
    #[must_use]
    pub fn with_clock(mut self, reading: ClockReading) -> Self {
        self.hour = Some(reading.hour);
        self.minute = Some(reading.minute);
        self.second = Some(reading.second);
        self
    }

    /// Set the hovered label
    #[must_use]
    pub fn with_hovered(mut self, hovered: Option<Label>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Set the answer membership set
    #[must_use]
    pub fn with_answer_members(mut self, members: BTreeSet<Label>) -> Self {
        self.answer_members = members;
        self
    }
}

/// Pick the category for one cell
#[must_use]
pub fn resolve(cell: &Cell, context: &HighlightContext) -> Category {
    let Some(label) = cell.label else {
        return Category::Empty;
    };
    let is = |signal: Option<Label>| signal == Some(label);

    if is(context.hovered) {
        Category::Hover
    } else if cell.row == 0 && is(context.hour) {
        Category::Hour
    } else if cell.row > 0 && is(context.second) {
        Category::Second
    } else if cell.row > 0 && is(context.minute) {
        Category::Minute
    } else if context.answer_members.contains(&label) {
        Category::Match
    } else {
        Category::Default
    }
}

/// Resolve every cell of `grid`, returning the highlighted copy
#[must_use]
pub fn highlight(mut grid: Grid, context: &HighlightContext) -> Grid {
    for cell in grid.cells_mut() {
        cell.category = resolve(cell, context);
    }
    grid
}
