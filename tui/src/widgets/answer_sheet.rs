//! AnswerSheet Widget
//!
//! The 6 × 5 answer cells with the cursor and locked cells marked.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use clockgrid_core::answers::{ANSWER_COLS, ANSWER_ROWS};
use clockgrid_core::{AnswerGrid, CellPos};

use crate::theme::{DEFAULT_BG, DIM_GRAY, HOVER_ACCENT, LOCKED_GRAY};

/// Columns per cell, including padding
pub const CELL_WIDTH: u16 = 4;

/// Columns between cells
const GAP: u16 = 1;

/// Rows per cell; the second row separates sheet rows
const CELL_HEIGHT: u16 = 2;

/// The editable answer sheet
pub struct AnswerSheet<'a> {
    answers: &'a AnswerGrid,
    cursor: Option<CellPos>,
}

impl<'a> AnswerSheet<'a> {
    /// Render the sheet without a cursor
    pub fn new(answers: &'a AnswerGrid) -> Self {
        Self {
            answers,
            cursor: None,
        }
    }

    /// Cell drawn as focused
    pub fn cursor(mut self, cursor: CellPos) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Space the sheet needs
    pub fn content_size() -> (u16, u16) {
        let cols = ANSWER_COLS as u16;
        (
            cols * CELL_WIDTH + (cols - 1) * GAP,
            ANSWER_ROWS as u16 * CELL_HEIGHT - 1,
        )
    }

    fn cell_style(&self, pos: CellPos) -> Style {
        let base = if self.answers.is_locked(pos) {
            Style::default().bg(DEFAULT_BG).fg(LOCKED_GRAY)
        } else {
            Style::default().bg(DEFAULT_BG).fg(Color::White)
        };
        if self.cursor == Some(pos) {
            base.bg(HOVER_ACCENT)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            base
        }
    }
}

impl Widget for AnswerSheet<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (r, row) in self.answers.iter_rows().enumerate() {
            let y = area.y + r as u16 * CELL_HEIGHT;
            if y >= area.bottom() {
                break;
            }
            for (c, value) in row.iter().enumerate() {
                let x = area.x + c as u16 * (CELL_WIDTH + GAP);
                if x + CELL_WIDTH > area.right() {
                    break;
                }
                let pos = CellPos::new(r, c);
                let text = if value.is_empty() { "··" } else { value.as_str() };
                let padded = format!("{text:^width$}", width = CELL_WIDTH as usize);
                let style = if value.is_empty() && self.cursor != Some(pos) {
                    self.cell_style(pos).fg(DIM_GRAY)
                } else {
                    self.cell_style(pos)
                };
                buf.set_string(x, y, &padded, style);
            }
        }
    }
}
