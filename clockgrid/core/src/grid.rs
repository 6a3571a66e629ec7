//! Grid Reflow
//!
//! Lays the canonical sequence into a rows × cols grid in row-major order.
//!
//! # Dimension Pairing
//!
//! Rows and columns are never changed independently. [`GridDimensions`] is a
//! value type whose only mutators replace both fields at once:
//!
//! ```text
//! set_cols(n)  ->  cols = clamp(n, 1, 72),  rows = ceil(72 / cols)
//! set_rows(n)  ->  rows = clamp(n, 1, 72),  cols = ceil(72 / rows)
//! ```
//!
//! so `rows * cols >= 72` holds for every value a reader can observe.

use serde::{Deserialize, Serialize};

use crate::highlight::Category;
use crate::sequence::{Label, LabeledItem, SEQUENCE_LEN};

/// Smallest allowed row or column count
pub const MIN_DIMENSION: usize = 1;

/// Largest allowed row or column count
pub const MAX_DIMENSION: usize = SEQUENCE_LEN;

/// A paired rows/cols value that always fits the whole sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    rows: usize,
    cols: usize,
}

impl GridDimensions {
    /// The original clock-face layout: 6 rows of 12
    pub const ORIGINAL: Self = Self { rows: 6, cols: 12 };

    /// Dimensions for a requested column count
    #[must_use]
    pub fn from_cols(cols: usize) -> Self {
        let cols = cols.clamp(MIN_DIMENSION, MAX_DIMENSION);
        Self {
            rows: SEQUENCE_LEN.div_ceil(cols),
            cols,
        }
    }

    /// Dimensions for a requested row count
    #[must_use]
    pub fn from_rows(rows: usize) -> Self {
        let rows = rows.clamp(MIN_DIMENSION, MAX_DIMENSION);
        Self {
            rows,
            cols: SEQUENCE_LEN.div_ceil(rows),
        }
    }

    /// Change the column count and recompute rows; returns `(rows, cols)`
    pub fn set_cols(&mut self, new_cols: usize) -> (usize, usize) {
        *self = Self::from_cols(new_cols);
        (self.rows, self.cols)
    }

    /// Change the row count and recompute columns; returns `(rows, cols)`
    pub fn set_rows(&mut self, new_rows: usize) -> (usize, usize) {
        *self = Self::from_rows(new_rows);
        (self.rows, self.cols)
    }

    /// Restore the original 12 × 6 layout
    pub fn reset(&mut self) {
        *self = Self::ORIGINAL;
    }

    /// Current row count
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Current column count
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells in the grid
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::ORIGINAL
    }
}

/// How a cell's text is rendered
///
/// The modes are mutually exclusive; a surface shows exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellDisplayMode {
    /// The two-digit label
    #[default]
    Label,
    /// `(col, row)`, 1-indexed
    Coordinates,
    /// `(col, row)`, 0-indexed
    CoordinatesZeroIndexed,
    /// `row + col`, 1-indexed
    CoordinateSum,
    /// `row + col`, 0-indexed
    CoordinateSumZeroIndexed,
}

impl CellDisplayMode {
    /// All modes in cycling order
    pub const ALL: [Self; 5] = [
        Self::Label,
        Self::Coordinates,
        Self::CoordinatesZeroIndexed,
        Self::CoordinateSum,
        Self::CoordinateSumZeroIndexed,
    ];

    /// The mode after this one, wrapping back to `Label`
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Short human-readable name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Label => "numbers",
            Self::Coordinates => "coordinates (1-indexed)",
            Self::CoordinatesZeroIndexed => "coordinates (0-indexed)",
            Self::CoordinateSum => "coordinate sum (1-indexed)",
            Self::CoordinateSumZeroIndexed => "coordinate sum (0-indexed)",
        }
    }
}

/// One grid position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Label placed here, `None` for padding
    pub label: Option<Label>,
    /// 0-indexed row
    pub row: usize,
    /// 0-indexed column
    pub col: usize,
    /// Resolved highlight category
    pub category: Category,
}

impl Cell {
    /// Whether this is a padding cell past the end of the sequence
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
    }

    /// `(row + 1) + (col + 1)`
    #[must_use]
    pub fn coordinate_sum(&self) -> usize {
        self.row + self.col + 2
    }

    /// `row + col`
    #[must_use]
    pub fn coordinate_sum_zero_indexed(&self) -> usize {
        self.row + self.col
    }

    /// Text to show for this cell under `mode`; empty cells show nothing
    #[must_use]
    pub fn display_text(&self, mode: CellDisplayMode) -> String {
        let Some(label) = self.label else {
            return String::new();
        };
        match mode {
            CellDisplayMode::Label => label.to_string(),
            CellDisplayMode::Coordinates => format!("({}, {})", self.col + 1, self.row + 1),
            CellDisplayMode::CoordinatesZeroIndexed => format!("({}, {})", self.col, self.row),
            CellDisplayMode::CoordinateSum => self.coordinate_sum().to_string(),
            CellDisplayMode::CoordinateSumZeroIndexed => {
                self.coordinate_sum_zero_indexed().to_string()
            }
        }
    }
}

/// A laid-out grid, stored row-major
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Lay `sequence` out using paired dimensions
    #[must_use]
    pub fn from_dimensions(sequence: &[LabeledItem], dims: GridDimensions) -> Self {
        reflow(sequence, dims.rows(), dims.cols())
    }

    /// Row count
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells in row-major order
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Cells of one row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.cells.get(start..start + self.cols)
    }

    /// Iterate rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps chunks() happy for a degenerate 0-column grid.
        self.cells.chunks(self.cols.max(1))
    }

    /// Cell at a position
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if col >= self.cols {
            return None;
        }
        self.row(row).and_then(|r| r.get(col))
    }

    /// Number of cells holding a label
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/// Place `sequence` into `rows * cols` cells in row-major order
///
/// Cells past the end of the sequence are empty. Capacity is not checked
/// here; a grid too small for the sequence simply drops the tail, which the
/// [`GridDimensions`] constructors rule out.
#[must_use]
pub fn reflow(sequence: &[LabeledItem], rows: usize, cols: usize) -> Grid {
    let cells = (0..rows * cols)
        .map(|idx| {
            let label = sequence.get(idx).map(|item| item.label);
            Cell {
                label,
                row: idx / cols,
                col: idx % cols,
                category: if label.is_some() {
                    Category::Default
                } else {
                    Category::Empty
                },
            }
        })
        .collect();

    Grid { rows, cols, cells }
}
