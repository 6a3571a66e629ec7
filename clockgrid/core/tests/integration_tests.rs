//! Integration tests for the clockgrid core
//!
//! These tests drive the public API the way a surface does: load config,
//! build a session, feed it events and read the views back.
//! Tests cover:
//! - Reflow across every column count
//! - Highlight precedence through the session views
//! - Clue tokenizing of the built-in text
//! - TOML configuration reaching the session

use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use clockgrid_core::answers::normalize_answer;
use clockgrid_core::clue::CLUE_TEXT;
use clockgrid_core::sequence::SEQUENCE_LEN;
use clockgrid_core::{
    canonical, highlight, load_config_from_path, tokenize, AnswerGrid, Category, CellPos,
    ClockReading, ConfigOverrides, ConfigSource, CounterKind, Direction, GridDimensions,
    HighlightContext, HighlightSet, Label, PuzzleSession, SessionEvent,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Clean up environment variables used by config loading
fn clear_config_env_vars() {
    std::env::remove_var("CLOCKGRID_COLS");
    std::env::remove_var("CLOCKGRID_ROWS");
    std::env::remove_var("CLOCKGRID_TICK_MS");
    std::env::remove_var("CLOCKGRID_CLUE_PATH");
}

fn label(text: &str) -> Label {
    Label::parse(text).unwrap()
}

// =============================================================================
// Test 1: Reflow
// =============================================================================

/// Every column count keeps all 72 labels, in canonical order, row-major.
#[test]
fn test_every_column_count_keeps_sequence() {
    let mut session = PuzzleSession::default();

    for cols in 1..=SEQUENCE_LEN {
        session.apply(SessionEvent::SetCols(cols));
        let grid = session.flexer_grid();

        assert_eq!(grid.cols(), cols);
        assert_eq!(grid.rows(), SEQUENCE_LEN.div_ceil(cols));
        assert!(grid.rows() * grid.cols() >= SEQUENCE_LEN);

        let labels: Vec<Label> = grid.cells().iter().filter_map(|c| c.label).collect();
        let expected: Vec<Label> = canonical().iter().map(|item| item.label).collect();
        assert_eq!(labels, expected, "cols = {cols}");

        // Padding only after the last label.
        let first_empty = grid.cells().iter().position(|c| c.is_empty());
        assert_eq!(first_empty.unwrap_or(SEQUENCE_LEN), SEQUENCE_LEN);
    }
}

/// Out-of-range requests clamp instead of failing.
#[test]
fn test_dimension_requests_clamp() {
    let mut session = PuzzleSession::default();

    session.apply(SessionEvent::SetCols(0));
    assert_eq!(session.dimensions(), GridDimensions::from_cols(1));
    assert_eq!(session.flexer_grid().rows(), 72);

    session.apply(SessionEvent::SetRows(500));
    assert_eq!(session.dimensions().rows(), 72);
    assert_eq!(session.dimensions().cols(), 1);
}

// =============================================================================
// Test 2: Highlighting
// =============================================================================

/// Hover beats answer membership on the same label.
#[test]
fn test_hover_beats_match() {
    let mut session = PuzzleSession::default();
    session.apply(SessionEvent::Hover(Some(label("16"))));

    let grid = session.answer_clock_grid();
    let cell = grid
        .cells()
        .iter()
        .find(|c| c.label == Some(label("16")))
        .unwrap();
    assert_eq!(cell.category, Category::Hover);
}

/// Hour only lights row 0; minute and second only light the rows below.
#[test]
fn test_row_gating_at_coinciding_labels() {
    let time = NaiveTime::from_hms_opt(17, 5, 5).unwrap();
    let reading = ClockReading::from_time(&time);
    assert_eq!(reading.hour, label("05"));

    let mut session = PuzzleSession::default();
    session.apply(SessionEvent::ClockTick(reading));
    let grid = session.clock_grid();

    let fives: Vec<(usize, Category)> = grid
        .cells()
        .iter()
        .filter(|c| c.label == Some(label("05")))
        .map(|c| (c.row, c.category))
        .collect();
    // Second outranks minute below row 0.
    assert_eq!(fives, vec![(0, Category::Hour), (1, Category::Second)]);
}

/// Every cell gets exactly one category and padding is always empty.
#[test]
fn test_highlight_is_total() {
    let context = HighlightContext::new()
        .with_hovered(Some(label("03")))
        .with_clock(ClockReading {
            hour: label("03"),
            minute: label("03"),
            second: label("04"),
        })
        .with_answer_members(AnswerGrid::new().membership());

    for cols in [5, 7, 11, 12, 72] {
        let grid = highlight(
            clockgrid_core::Grid::from_dimensions(canonical(), GridDimensions::from_cols(cols)),
            &context,
        );
        for cell in grid.cells() {
            if cell.is_empty() {
                assert_eq!(cell.category, Category::Empty);
            } else {
                assert_ne!(cell.category, Category::Empty);
            }
        }
    }
}

/// Short answers pad to match; letters match nothing.
#[test]
fn test_answer_normalization_drives_matches() {
    assert_eq!(normalize_answer("5").as_deref(), Some("05"));
    assert_eq!(normalize_answer("b3").as_deref(), Some("B3"));

    let mut session = PuzzleSession::new(GridDimensions::ORIGINAL, AnswerGrid::empty(), CLUE_TEXT);
    session.apply(SessionEvent::FocusAnswer(CellPos::new(2, 0)));
    session.apply(SessionEvent::TypeAnswer('5'));
    session.apply(SessionEvent::MoveAnswerCursor(Direction::Down));
    session.apply(SessionEvent::TypeAnswer('b'));
    session.apply(SessionEvent::TypeAnswer('3'));

    assert_eq!(session.answers().get(CellPos::new(3, 0)), Some("B3"));
    let flexer = session.flexer_grid();
    let matched: Vec<&str> = flexer
        .cells()
        .iter()
        .filter(|c| c.category == Category::Match)
        .filter_map(|c| c.label.as_ref().map(Label::as_str))
        .collect();
    // "05" occurs in both regions.
    assert_eq!(matched, vec!["05", "05"]);
}

// =============================================================================
// Test 3: Clue
// =============================================================================

/// The built-in clue yields six word lines; the first is numbered 1..9.
#[test]
fn test_builtin_clue_first_line() {
    let lines = tokenize(CLUE_TEXT);
    let word_lines: Vec<_> = lines.iter().filter(|l| !l.is_blank()).collect();
    assert_eq!(word_lines.len(), 6);

    let first = word_lines[0].words();
    let texts: Vec<&str> = first.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["The", "time", "and", "the", "tide", "wait", "for", "no", "man"]
    );
    let numbers: Vec<usize> = first.iter().map(|w| w.number_global).collect();
    assert_eq!(numbers, (1..=9).collect::<Vec<_>>());
}

/// Line-scope counters reset per line; text-scope counters never do.
#[test]
fn test_counter_scopes() {
    let lines = tokenize(CLUE_TEXT);
    let mut last_global = 0;
    let mut last_number = 0;

    for line in lines.iter().filter(|l| !l.is_blank()) {
        let words = line.words();
        assert_eq!(words[0].space_before_line_cumulative, 0);
        assert_eq!(words[0].space_before_local, 0);
        assert_eq!(words[0].number_in_line, 1);

        for word in words {
            assert!(word.space_before_global_cumulative >= last_global);
            assert_eq!(word.number_global, last_number + 1);
            last_global = word.space_before_global_cumulative;
            last_number = word.number_global;
        }
    }
    assert!(last_global > 0);
}

/// Visible counters and selection live in the session, not in the tokens.
#[test]
fn test_clue_interaction_flow() {
    let mut session = PuzzleSession::default();
    let before = session.clue_lines().to_vec();

    session.apply(SessionEvent::ToggleCounter(CounterKind::WordInClue));
    session.apply(SessionEvent::MoveWordCursor(Direction::Down));
    session.apply(SessionEvent::ToggleWordAtCursor);

    assert_eq!(session.clue_lines(), before.as_slice());
    assert!(session.visible_counters().contains(&CounterKind::WordInClue));
    // First word of the second word line.
    assert_eq!(session.selection(), &HighlightSet::reset().toggle(10));
}

// =============================================================================
// Test 4: Config Reaches the Session
// =============================================================================

/// TOML values flow into a session built from config.
#[test]
fn test_config_builds_session() {
    let _guard = env_guard();
    clear_config_env_vars();

    let mut clue = NamedTempFile::new().unwrap();
    clue.write_all(b"one  two\n\nthree").unwrap();

    let toml_content = format!(
        r#"
[grid]
cols = 9

[clue]
path = "{}"

[[answers.prefilled]]
row = 5
col = 4
value = "07"
"#,
        clue.path().display()
    );
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(toml_content.as_bytes()).unwrap();

    let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
    assert_eq!(config.source(), ConfigSource::File);

    let session = PuzzleSession::from_config(&config).unwrap();
    assert_eq!(session.dimensions().cols(), 9);
    assert_eq!(session.dimensions().rows(), 8);
    assert_eq!(session.clue_lines().len(), 3);
    assert!(session.answers().is_locked(CellPos::new(5, 4)));
    assert!(!session.answers().is_locked(CellPos::new(0, 0)));
    assert_eq!(
        session.answers().membership().into_iter().collect::<Vec<_>>(),
        vec![label("07")]
    );
}

/// Test config override priority: CLI > Env > File > Default
#[test]
fn test_config_override_priority() {
    let _guard = env_guard();
    clear_config_env_vars();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[grid]\nrows = 4\n\n[clock]\ntick_ms = 250\n")
        .unwrap();

    std::env::set_var("CLOCKGRID_TICK_MS", "500");
    let mut config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
    clear_config_env_vars();

    assert_eq!(config.dimensions.rows(), 4);
    assert_eq!(config.tick.as_millis(), 500);
    assert_eq!(config.source(), ConfigSource::Env);

    ConfigOverrides::new()
        .with_cols(24)
        .with_tick_ms(100)
        .apply(&mut config)
        .unwrap();
    assert_eq!(config.dimensions.cols(), 24);
    assert_eq!(config.dimensions.rows(), 3);
    assert_eq!(config.tick.as_millis(), 100);
    assert_eq!(config.source(), ConfigSource::Cli);
}

/// A missing clue file surfaces as an error when the session is built.
#[test]
fn test_missing_clue_file_is_an_error() {
    let _guard = env_guard();
    clear_config_env_vars();

    let mut config = load_config_from_path(None).unwrap();
    config.clue_path = Some("/nonexistent/clockgrid/clue.txt".into());
    assert!(PuzzleSession::from_config(&config).is_err());
}
