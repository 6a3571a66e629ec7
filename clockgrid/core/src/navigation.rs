//! Cell Navigation
//!
//! Cursor movement over a bounded grid with wraparound. Moving right past
//! the last column continues on the next row (and back to the top after the
//! last row); left mirrors that. Up and down wrap within the column.

use serde::{Deserialize, Serialize};

/// A position on a grid, 0-indexed
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CellPos {
    /// Row
    pub row: usize,
    /// Column
    pub col: usize,
}

impl CellPos {
    /// Create a position
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Grid extent for navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Row count
    pub rows: usize,
    /// Column count
    pub cols: usize,
}

impl Bounds {
    /// Whether `pos` lies inside these bounds
    #[must_use]
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}

/// Direction of a cursor move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards lower row numbers
    Up,
    /// Towards higher row numbers
    Down,
    /// Towards lower column numbers
    Left,
    /// Towards higher column numbers
    Right,
}

/// The cell reached by moving one step from `current`
///
/// Degenerate bounds (no rows or columns) leave the position unchanged.
#[must_use]
pub fn next_cell(current: CellPos, direction: Direction, bounds: Bounds) -> CellPos {
    let Bounds { rows, cols } = bounds;
    if rows == 0 || cols == 0 {
        return current;
    }
    let CellPos { row, col } = CellPos::new(current.row % rows, current.col % cols);

    match direction {
        Direction::Right if col + 1 == cols => CellPos::new((row + 1) % rows, 0),
        Direction::Right => CellPos::new(row, col + 1),
        Direction::Left if col == 0 => CellPos::new((row + rows - 1) % rows, cols - 1),
        Direction::Left => CellPos::new(row, col - 1),
        Direction::Down => CellPos::new((row + 1) % rows, col),
        Direction::Up => CellPos::new((row + rows - 1) % rows, col),
    }
}
