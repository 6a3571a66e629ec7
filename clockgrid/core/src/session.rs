//! Puzzle Session
//!
//! Holds the plain-value inputs a surface has observed so far and rebuilds
//! every view from them on demand. Surfaces never mutate the inputs
//! directly; they report what happened as a [`SessionEvent`] and the
//! session applies it in one step.
//!
//! # Event Flow
//!
//! ```text
//! Terminal input / clock tick -> SessionEvent -> PuzzleSession::apply
//!                                                      │
//!                          clock_grid() / flexer_grid() / answer_clock_grid() / clue_lines()
//! ```
//!
//! The views are pure functions of the stored inputs; nothing is cached,
//! so there is no stale result to invalidate when an input changes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::answers::{AnswerGrid, EditOutcome, MAX_ANSWER_LEN};
use crate::clock::ClockReading;
use crate::clue::{find_word, tokenize, word_count, CounterKind, Line};
use crate::config::{ClockgridConfig, ConfigError};
use crate::grid::{CellDisplayMode, Grid, GridDimensions};
use crate::highlight::{highlight, HighlightContext};
use crate::navigation::{next_cell, CellPos, Direction};
use crate::selection::HighlightSet;
use crate::sequence::{canonical, Label};

/// Everything a surface can report to the session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    // ============================================
    // Grid Layout
    // ============================================
    /// User picked a column count
    SetCols(usize),

    /// User picked a row count
    SetRows(usize),

    /// Back to the original 12 × 6 layout
    ResetDimensions,

    // ============================================
    // Clock
    // ============================================
    /// The surface sampled the time
    ClockTick(ClockReading),

    // ============================================
    // Answer Sheet
    // ============================================
    /// Pointer is over a label (or left it)
    Hover(Option<Label>),

    /// Move the answer cursor one step
    MoveAnswerCursor(Direction),

    /// Put the answer cursor on a cell
    FocusAnswer(CellPos),

    /// A character typed into the focused answer cell
    TypeAnswer(char),

    /// Backspace in the focused answer cell
    EraseAnswer,

    /// Switch how the answer clock grid labels its cells
    SetDisplayMode(CellDisplayMode),

    // ============================================
    // Clue
    // ============================================
    /// Show or hide one per-word counter
    ToggleCounter(CounterKind),

    /// Move the word cursor one step
    MoveWordCursor(Direction),

    /// Toggle selection of a word by its clue-wide number
    ToggleWord(usize),

    /// Toggle selection of the word under the cursor
    ToggleWordAtCursor,

    /// Drop every selected word
    ClearSelection,
}

/// Inputs observed from a surface, plus the derived views
#[derive(Clone, Debug)]
pub struct PuzzleSession {
    dimensions: GridDimensions,
    clock: Option<ClockReading>,
    hovered: Option<Label>,
    answers: AnswerGrid,
    answer_cursor: CellPos,
    display_mode: CellDisplayMode,
    clue: Vec<Line>,
    word_total: usize,
    word_cursor: usize,
    visible_counters: BTreeSet<CounterKind>,
    selection: HighlightSet,
}

impl PuzzleSession {
    /// Start a session with the given layout, answer sheet and clue
    #[must_use]
    pub fn new(dimensions: GridDimensions, answers: AnswerGrid, clue_text: &str) -> Self {
        let clue = tokenize(clue_text);
        let word_total = word_count(&clue);
        let answer_cursor = CellPos::default();
        Self {
            dimensions,
            clock: None,
            hovered: answers.hover_label(answer_cursor),
            answers,
            answer_cursor,
            display_mode: CellDisplayMode::Label,
            clue,
            word_total,
            word_cursor: usize::from(word_total > 0),
            visible_counters: BTreeSet::new(),
            selection: HighlightSet::reset(),
        }
    }

    /// Start a session from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured clue file cannot be read.
    pub fn from_config(config: &ClockgridConfig) -> Result<Self, ConfigError> {
        let clue_text = config.clue_text()?;
        Ok(Self::new(
            config.dimensions,
            AnswerGrid::with_prefilled(&config.prefilled),
            &clue_text,
        ))
    }

    /// Apply one event
    pub fn apply(&mut self, event: SessionEvent) {
        tracing::debug!(?event, "Applying session event");

        match event {
            SessionEvent::SetCols(cols) => {
                let (rows, cols) = self.dimensions.set_cols(cols);
                tracing::debug!(rows, cols, "Grid reflowed");
            }
            SessionEvent::SetRows(rows) => {
                let (rows, cols) = self.dimensions.set_rows(rows);
                tracing::debug!(rows, cols, "Grid reflowed");
            }
            SessionEvent::ResetDimensions => self.dimensions.reset(),
            SessionEvent::ClockTick(reading) => self.clock = Some(reading),
            SessionEvent::Hover(label) => self.hovered = label,
            SessionEvent::MoveAnswerCursor(direction) => {
                let target = next_cell(self.answer_cursor, direction, AnswerGrid::bounds());
                self.focus_answer(target);
            }
            SessionEvent::FocusAnswer(pos) => {
                if AnswerGrid::bounds().contains(pos) {
                    self.focus_answer(pos);
                }
            }
            SessionEvent::TypeAnswer(ch) => self.type_answer(ch),
            SessionEvent::EraseAnswer => {
                let target = self.answers.backspace(self.answer_cursor);
                self.focus_answer(target);
            }
            SessionEvent::SetDisplayMode(mode) => self.display_mode = mode,
            SessionEvent::ToggleCounter(kind) => {
                if !self.visible_counters.remove(&kind) {
                    self.visible_counters.insert(kind);
                }
            }
            SessionEvent::MoveWordCursor(direction) => self.move_word_cursor(direction),
            SessionEvent::ToggleWord(key) => {
                if find_word(&self.clue, key).is_some() {
                    self.selection = self.selection.toggle(key);
                }
            }
            SessionEvent::ToggleWordAtCursor => {
                if self.word_cursor > 0 {
                    self.selection = self.selection.toggle(self.word_cursor);
                }
            }
            SessionEvent::ClearSelection => self.selection = HighlightSet::reset(),
        }
    }

    /// Focusing a cell doubles as hovering it
    fn focus_answer(&mut self, pos: CellPos) {
        self.answer_cursor = pos;
        self.hovered = self.answers.hover_label(pos);
    }

    fn type_answer(&mut self, ch: char) {
        let pos = self.answer_cursor;
        let current = self.answers.get(pos).unwrap_or_default();
        // A full cell behaves like a selected input: typing replaces it.
        let value = if current.chars().count() >= MAX_ANSWER_LEN {
            ch.to_string()
        } else {
            format!("{current}{ch}")
        };

        match self.answers.set_cell(pos, &value) {
            EditOutcome::Updated {
                advance_to: Some(next),
            } => {
                self.hovered = self.answers.hover_label(pos);
                self.focus_answer(next);
            }
            EditOutcome::Updated { advance_to: None } => {
                self.hovered = self.answers.hover_label(pos);
            }
            EditOutcome::Locked => tracing::debug!(?pos, "Ignoring edit of locked answer cell"),
            EditOutcome::OutOfBounds => tracing::warn!(?pos, "Answer cursor outside sheet"),
        }
    }

    fn move_word_cursor(&mut self, direction: Direction) {
        if self.word_total == 0 {
            return;
        }
        let total = self.word_total;
        let current = self.word_cursor.clamp(1, total);

        self.word_cursor = match direction {
            Direction::Right => current % total + 1,
            Direction::Left => (current + total - 2) % total + 1,
            Direction::Up | Direction::Down => self.vertical_word_target(current, direction),
        };
    }

    /// Same position in the previous/next line that has words, wrapping
    fn vertical_word_target(&self, current: usize, direction: Direction) -> usize {
        let word_lines: Vec<&Line> = self.clue.iter().filter(|l| !l.is_blank()).collect();
        let Some(line_idx) = word_lines
            .iter()
            .position(|l| l.words().iter().any(|w| w.number_global == current))
        else {
            return current;
        };
        let column = word_lines[line_idx]
            .words()
            .iter()
            .find(|w| w.number_global == current)
            .map_or(1, |w| w.number_in_line);

        let count = word_lines.len();
        let target_idx = if direction == Direction::Down {
            (line_idx + 1) % count
        } else {
            (line_idx + count - 1) % count
        };
        let target = word_lines[target_idx].words();
        target
            .get(column.min(target.len()) - 1)
            .map_or(current, |w| w.number_global)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The clock: original layout lit by the current time
    #[must_use]
    pub fn clock_grid(&self) -> Grid {
        let mut context = HighlightContext::new();
        if let Some(reading) = self.clock {
            context = context.with_clock(reading);
        }
        highlight(Grid::from_dimensions(canonical(), GridDimensions::ORIGINAL), &context)
    }

    /// The resizable grid, marking answers from the sheet
    #[must_use]
    pub fn flexer_grid(&self) -> Grid {
        let context = HighlightContext::new().with_answer_members(self.answers.membership());
        highlight(Grid::from_dimensions(canonical(), self.dimensions), &context)
    }

    /// The grid beside the answer sheet: hover and answer matches
    #[must_use]
    pub fn answer_clock_grid(&self) -> Grid {
        let context = HighlightContext::new()
            .with_hovered(self.hovered)
            .with_answer_members(self.answers.membership());
        highlight(Grid::from_dimensions(canonical(), GridDimensions::ORIGINAL), &context)
    }

    /// Tokenized clue
    #[must_use]
    pub fn clue_lines(&self) -> &[Line] {
        &self.clue
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current flexer dimensions
    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Last clock reading, if any tick arrived yet
    #[must_use]
    pub fn clock(&self) -> Option<ClockReading> {
        self.clock
    }

    /// Hovered label
    #[must_use]
    pub fn hovered(&self) -> Option<Label> {
        self.hovered
    }

    /// The answer sheet
    #[must_use]
    pub fn answers(&self) -> &AnswerGrid {
        &self.answers
    }

    /// Focused answer cell
    #[must_use]
    pub fn answer_cursor(&self) -> CellPos {
        self.answer_cursor
    }

    /// How the answer clock grid labels its cells
    #[must_use]
    pub fn display_mode(&self) -> CellDisplayMode {
        self.display_mode
    }

    /// Counters currently shown in the clue view
    #[must_use]
    pub fn visible_counters(&self) -> &BTreeSet<CounterKind> {
        &self.visible_counters
    }

    /// Clue-wide number of the word under the cursor, 0 for an empty clue
    #[must_use]
    pub fn word_cursor(&self) -> usize {
        self.word_cursor
    }

    /// Selected words
    #[must_use]
    pub fn selection(&self) -> &HighlightSet {
        &self.selection
    }
}

impl Default for PuzzleSession {
    fn default() -> Self {
        Self::new(
            GridDimensions::ORIGINAL,
            AnswerGrid::new(),
            crate::clue::CLUE_TEXT,
        )
    }
}
