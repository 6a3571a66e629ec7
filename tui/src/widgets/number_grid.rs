//! NumberGrid Widget
//!
//! Draws a categorized [`Grid`] as colored, fixed-width cells.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthStr;

use clockgrid_core::{CellDisplayMode, Grid};

use crate::theme::category_style;

/// Columns between two cells
const GAP: u16 = 1;

/// A grid of clock labels, one colored block per cell
pub struct NumberGrid<'a> {
    grid: &'a Grid,
    mode: CellDisplayMode,
    block: Option<Block<'a>>,
}

impl<'a> NumberGrid<'a> {
    /// Render `grid` showing labels
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            mode: CellDisplayMode::Label,
            block: None,
        }
    }

    /// What each cell shows
    pub fn mode(mut self, mode: CellDisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Wrap the grid in a block
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Width of one cell: the widest text plus a space on each side
    pub fn cell_width(&self) -> u16 {
        let widest = self
            .grid
            .cells()
            .iter()
            .map(|cell| cell.display_text(self.mode).width())
            .max()
            .unwrap_or(0)
            .max(2);
        widest as u16 + 2
    }

    /// Space the cells need, without the block
    pub fn content_size(&self) -> (u16, u16) {
        let cols = self.grid.cols() as u16;
        let width = cols * self.cell_width() + cols.saturating_sub(1) * GAP;
        (width, self.grid.rows() as u16)
    }
}

impl Widget for NumberGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };

        let cell_width = self.cell_width();
        for (r, row) in self.grid.iter_rows().enumerate() {
            let y = inner.y + r as u16;
            if y >= inner.bottom() {
                break;
            }
            for (c, cell) in row.iter().enumerate() {
                let x = inner.x + c as u16 * (cell_width + GAP);
                if x + cell_width > inner.right() {
                    break;
                }
                let text = cell.display_text(self.mode);
                let padded = format!("{text:^width$}", width = cell_width as usize);
                buf.set_string(x, y, &padded, category_style(cell.category));
            }
        }
    }
}
