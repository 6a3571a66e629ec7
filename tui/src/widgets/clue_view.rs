//! ClueView Widget
//!
//! A borderless, scrollable rendering of the tokenized clue. Each word sits
//! in its own slot; enabled counters are printed on a row above the words,
//! one color per counter.

use std::collections::BTreeSet;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthStr;

use clockgrid_core::clue::Line as ClueLine;
use clockgrid_core::{CounterKind, HighlightSet, Word};

use crate::theme::{counter_color, SELECTED_BG};

/// State for a scrollable clue view
#[derive(Debug, Default)]
pub struct ClueViewState {
    /// Scroll offset (rows from top)
    pub scroll_offset: usize,
    /// Total rendered rows
    pub total_rows: usize,
    /// Cursor word and its row as of the last render
    followed: Option<(usize, usize)>,
}

impl ClueViewState {
    /// Scroll by delta (positive = down)
    pub fn scroll(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }
}

/// Rows produced by laying out the clue
#[derive(Debug)]
pub struct ClueLayout {
    /// Rendered rows, top to bottom
    pub rows: Vec<Line<'static>>,
    /// Row holding the cursor word, if it is visible
    pub cursor_row: Option<usize>,
}

/// The clue with counters, selection and cursor
pub struct ClueView<'a> {
    lines: &'a [ClueLine],
    counters: &'a BTreeSet<CounterKind>,
    selection: &'a HighlightSet,
    cursor: usize,
}

impl<'a> ClueView<'a> {
    /// Create a view with the cursor on no word
    pub fn new(
        lines: &'a [ClueLine],
        counters: &'a BTreeSet<CounterKind>,
        selection: &'a HighlightSet,
    ) -> Self {
        Self {
            lines,
            counters,
            selection,
            cursor: 0,
        }
    }

    /// Clue-wide number of the word under the cursor
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Lay the clue out into rows no wider than `width`
    pub fn layout(&self, width: usize) -> ClueLayout {
        let mut layout = ClueLayout {
            rows: Vec::new(),
            cursor_row: None,
        };

        for line in self.lines {
            match line {
                ClueLine::Blank => layout.rows.push(Line::default()),
                ClueLine::Words(words) => self.layout_words(words, width, &mut layout),
            }
        }
        layout
    }

    fn layout_words(&self, words: &[Word], width: usize, layout: &mut ClueLayout) {
        let mut counter_row: Vec<Span<'static>> = Vec::new();
        let mut word_row: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        let mut holds_cursor = false;

        for word in words {
            let numbers: Vec<(CounterKind, String)> = self
                .counters
                .iter()
                .map(|kind| (*kind, word.counter(*kind).to_string()))
                .collect();
            let numbers_width = numbers.iter().map(|(_, n)| n.len()).sum::<usize>()
                + numbers.len().saturating_sub(1);
            let slot = word.text.width().max(numbers_width);

            if used > 0 && used + slot > width {
                self.flush(&mut counter_row, &mut word_row, holds_cursor, layout);
                used = 0;
                holds_cursor = false;
            }

            for (i, (kind, number)) in numbers.into_iter().enumerate() {
                if i > 0 {
                    counter_row.push(Span::raw(" "));
                }
                counter_row.push(Span::styled(
                    number,
                    Style::default().fg(counter_color(kind)),
                ));
            }
            counter_row.push(Span::raw(" ".repeat(slot - numbers_width + 1)));

            word_row.push(Span::styled(word.text.clone(), self.word_style(word)));
            word_row.push(Span::raw(" ".repeat(slot - word.text.width() + 1)));

            holds_cursor |= word.number_global == self.cursor;
            used += slot + 1;
        }

        self.flush(&mut counter_row, &mut word_row, holds_cursor, layout);
    }

    fn flush(
        &self,
        counter_row: &mut Vec<Span<'static>>,
        word_row: &mut Vec<Span<'static>>,
        holds_cursor: bool,
        layout: &mut ClueLayout,
    ) {
        if !self.counters.is_empty() {
            layout.rows.push(Line::from(std::mem::take(counter_row)));
        }
        counter_row.clear();
        if holds_cursor {
            layout.cursor_row = Some(layout.rows.len());
        }
        layout.rows.push(Line::from(std::mem::take(word_row)));
    }

    fn word_style(&self, word: &Word) -> Style {
        let mut style = Style::default();
        if self.selection.contains(word.number_global) {
            style = style.bg(SELECTED_BG).add_modifier(Modifier::BOLD);
        }
        if word.number_global == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl StatefulWidget for ClueView<'_> {
    type State = ClueViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let height = area.height as usize;
        let layout = self.layout(area.width as usize);
        state.total_rows = layout.rows.len();

        // Follow the cursor only when it has moved; manual scrolling sticks
        let followed = layout.cursor_row.map(|row| (self.cursor, row));
        if followed != state.followed {
            if let Some((_, row)) = followed {
                if row < state.scroll_offset {
                    state.scroll_offset = row.saturating_sub(1);
                } else if row >= state.scroll_offset + height {
                    state.scroll_offset = row + 1 - height;
                }
            }
            state.followed = followed;
        }

        // Clamp scroll
        let max_scroll = state.total_rows.saturating_sub(height);
        state.scroll_offset = state.scroll_offset.min(max_scroll);

        for (i, row) in layout
            .rows
            .iter()
            .skip(state.scroll_offset)
            .take(height)
            .enumerate()
        {
            let y = area.y + i as u16;
            buf.set_line(area.x, y, row, area.width);
        }
    }
}
