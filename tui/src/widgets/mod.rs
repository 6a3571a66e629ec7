//! Widgets
//!
//! Borderless building blocks the app lays out per tab.

pub mod answer_sheet;
pub mod clue_view;
pub mod number_grid;

pub use answer_sheet::AnswerSheet;
pub use clue_view::{ClueView, ClueViewState};
pub use number_grid::NumberGrid;
