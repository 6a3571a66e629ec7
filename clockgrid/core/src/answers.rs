//! Answer Sheet
//!
//! A 6 × 5 sheet of short answers. A few cells come prefilled and locked;
//! the rest hold whatever the user types, upper-cased and cut to two
//! characters. The clock grids only ever see the sheet through its
//! normalized [`membership`](AnswerGrid::membership) set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::navigation::{next_cell, Bounds, CellPos, Direction};
use crate::sequence::{contains_label, Label};

/// Sheet height
pub const ANSWER_ROWS: usize = 6;

/// Sheet width
pub const ANSWER_COLS: usize = 5;

/// Longest value a cell stores
pub const MAX_ANSWER_LEN: usize = 2;

/// A locked cell with its fixed value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefilledCell {
    /// Row on the sheet
    pub row: usize,
    /// Column on the sheet
    pub col: usize,
    /// Fixed value
    pub value: String,
}

impl PrefilledCell {
    /// Create a prefilled cell
    pub fn new(row: usize, col: usize, value: impl Into<String>) -> Self {
        Self {
            row,
            col,
            value: value.into(),
        }
    }

    /// Sheet position of this cell
    #[must_use]
    pub fn pos(&self) -> CellPos {
        CellPos::new(self.row, self.col)
    }
}

/// The puzzle's given answers: 16, 33, 39 and 45 on a diagonal
#[must_use]
pub fn default_prefilled() -> Vec<PrefilledCell> {
    vec![
        PrefilledCell::new(0, 0, "16"),
        PrefilledCell::new(1, 3, "33"),
        PrefilledCell::new(2, 2, "39"),
        PrefilledCell::new(3, 1, "45"),
    ]
}

/// Result of writing to a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Value stored; `advance_to` is set when the cell became full
    Updated {
        /// Where the cursor should move next, if anywhere
        advance_to: Option<CellPos>,
    },
    /// The cell is prefilled and cannot change
    Locked,
    /// The position is outside the sheet
    OutOfBounds,
}

/// Trim, upper-case and left-pad a raw answer to two characters
///
/// Returns `None` for blank input. The result is not necessarily a clock
/// label: `"b3"` normalizes to `"B3"`.
#[must_use]
pub fn normalize_answer(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let upper: String = trimmed.to_uppercase().chars().take(MAX_ANSWER_LEN).collect();
    Some(format!("{upper:0>width$}", width = MAX_ANSWER_LEN))
}

/// The editable answer sheet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerGrid {
    cells: Vec<String>,
    locked: BTreeSet<CellPos>,
}

impl Default for AnswerGrid {
    fn default() -> Self {
        Self::with_prefilled(&default_prefilled())
    }
}

impl AnswerGrid {
    /// Sheet with the default prefilled answers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheet with no cells filled or locked
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: vec![String::new(); ANSWER_ROWS * ANSWER_COLS],
            locked: BTreeSet::new(),
        }
    }

    /// Sheet with the given cells filled and locked
    ///
    /// Cells outside the sheet are skipped.
    #[must_use]
    pub fn with_prefilled(prefilled: &[PrefilledCell]) -> Self {
        let mut grid = Self::empty();
        for cell in prefilled {
            let pos = cell.pos();
            let Some(idx) = Self::index(pos) else {
                tracing::warn!(
                    row = cell.row,
                    col = cell.col,
                    "Prefilled cell outside answer sheet, skipping"
                );
                continue;
            };
            grid.cells[idx] = clamp_value(&cell.value);
            grid.locked.insert(pos);
        }
        grid
    }

    /// Sheet extent
    #[must_use]
    pub fn bounds() -> Bounds {
        Bounds {
            rows: ANSWER_ROWS,
            cols: ANSWER_COLS,
        }
    }

    fn index(pos: CellPos) -> Option<usize> {
        Self::bounds()
            .contains(pos)
            .then_some(pos.row * ANSWER_COLS + pos.col)
    }

    /// Stored value at `pos`
    #[must_use]
    pub fn get(&self, pos: CellPos) -> Option<&str> {
        Self::index(pos).map(|idx| self.cells[idx].as_str())
    }

    /// Whether `pos` is a prefilled, read-only cell
    #[must_use]
    pub fn is_locked(&self, pos: CellPos) -> bool {
        self.locked.contains(&pos)
    }

    /// Rows of stored values
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(ANSWER_COLS)
    }

    /// Store `raw` at `pos`, upper-cased and cut to two characters
    pub fn set_cell(&mut self, pos: CellPos, raw: &str) -> EditOutcome {
        let Some(idx) = Self::index(pos) else {
            return EditOutcome::OutOfBounds;
        };
        if self.is_locked(pos) {
            return EditOutcome::Locked;
        }

        let value = clamp_value(raw);
        let full_and_changed =
            value.chars().count() == MAX_ANSWER_LEN && value != self.cells[idx];
        self.cells[idx] = value;

        EditOutcome::Updated {
            advance_to: full_and_changed.then(|| next_cell(pos, Direction::Right, Self::bounds())),
        }
    }

    /// Backspace at `pos`, returning where the cursor ends up
    ///
    /// A filled cell loses its last character. An empty cell clears the
    /// previous cell instead and moves there, unless that cell is locked.
    /// Locked cells ignore the key.
    pub fn backspace(&mut self, pos: CellPos) -> CellPos {
        let Some(idx) = Self::index(pos) else {
            return pos;
        };
        if self.is_locked(pos) {
            return pos;
        }

        if self.cells[idx].pop().is_some() {
            return pos;
        }

        let previous = next_cell(pos, Direction::Left, Self::bounds());
        if self.is_locked(previous) {
            return pos;
        }
        if let Some(prev_idx) = Self::index(previous) {
            self.cells[prev_idx].clear();
        }
        previous
    }

    /// Normalized answers that name a clock label
    ///
    /// `"5"` counts as `05`; values like `"B3"` match nothing.
    #[must_use]
    pub fn membership(&self) -> BTreeSet<Label> {
        self.cells
            .iter()
            .filter_map(|raw| normalize_answer(raw))
            .filter(|norm| contains_label(norm))
            .filter_map(|norm| Label::parse(&norm))
            .collect()
    }

    /// Label a cell points at, used as the hover signal
    #[must_use]
    pub fn hover_label(&self, pos: CellPos) -> Option<Label> {
        self.get(pos)
            .and_then(normalize_answer)
            .filter(|norm| contains_label(norm))
            .and_then(|norm| Label::parse(&norm))
    }
}

fn clamp_value(raw: &str) -> String {
    raw.to_uppercase().chars().take(MAX_ANSWER_LEN).collect()
}
