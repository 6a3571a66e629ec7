//! JSON Dump
//!
//! Prints a computed view instead of starting the terminal UI. Useful for
//! scripting and for environments without a TTY.

use clap::ValueEnum;
use serde_json::json;

use clockgrid_core::PuzzleSession;

/// Which view to print
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DumpView {
    /// The clock grid lit by the current time
    Clock,
    /// The resizable grid with answer matches
    Grid,
    /// The answer sheet and its clock grid
    Answers,
    /// The tokenized clue
    Clue,
}

/// Serialize one view of `session` as pretty JSON
pub fn render_dump(session: &PuzzleSession, view: DumpView) -> serde_json::Result<String> {
    let value = match view {
        DumpView::Clock => json!({
            "reading": session.clock(),
            "grid": session.clock_grid(),
        }),
        DumpView::Grid => json!({
            "rows": session.dimensions().rows(),
            "cols": session.dimensions().cols(),
            "grid": session.flexer_grid(),
        }),
        DumpView::Answers => json!({
            "sheet": session.answers().iter_rows().collect::<Vec<_>>(),
            "grid": session.answer_clock_grid(),
        }),
        DumpView::Clue => json!({
            "lines": session.clue_lines(),
        }),
    };
    serde_json::to_string_pretty(&value)
}
