//! App Tests
//!
//! Drive the App with key events and render it into a `TestBackend`, with
//! no real terminal involved.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use clockgrid_core::{CellPos, CellDisplayMode, CounterKind, PuzzleSession};
use clockgrid_tui::{App, Tab};

fn app() -> App {
    App::new(PuzzleSession::default(), Duration::from_secs(1))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    screen(terminal.backend().buffer())
}

fn screen(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_escape_quits() {
    let mut app = app();
    assert!(app.is_running());
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_running());
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.is_running());
}

#[test]
fn test_tab_keys_cycle_views() {
    let mut app = app();
    assert_eq!(app.tab(), Tab::Clock);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab(), Tab::Flexer);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.tab(), Tab::Clue);
}

// =============================================================================
// Clock
// =============================================================================

#[test]
fn test_clock_before_first_tick() {
    let mut app = app();
    let rows = render(&mut app, 80, 12);
    assert!(contains(&rows, "Clock --:--:--"));
    assert!(contains(&rows, " 01 "));
    assert!(contains(&rows, " 59 "));
}

// =============================================================================
// Grid Flexer
// =============================================================================

#[test]
fn test_flexer_keys_reflow() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.session().dimensions().cols(), 11);
    assert_eq!(app.session().dimensions().rows(), 7);

    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.session().dimensions().rows(), 8);
    assert_eq!(app.session().dimensions().cols(), 9);

    let rows = render(&mut app, 80, 14);
    assert!(contains(&rows, "Grid Flexer 9 cols × 8 rows"));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.session().dimensions().cols(), 12);
}

#[test]
fn test_flexer_cannot_go_below_one_column() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    for _ in 0..20 {
        press(&mut app, KeyCode::Left);
    }
    assert_eq!(app.session().dimensions().cols(), 1);
    assert_eq!(app.session().dimensions().rows(), 72);
}

// =============================================================================
// Answers
// =============================================================================

#[test]
fn test_answer_typing_and_display_mode() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab(), Tab::Answers);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('8'));
    assert_eq!(app.session().answers().get(CellPos::new(0, 1)), Some("28"));
    assert_eq!(app.session().answer_cursor(), CellPos::new(0, 2));

    // Punctuation is not an answer character.
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.session().answers().get(CellPos::new(0, 2)), Some(""));

    press(&mut app, KeyCode::F(2));
    assert_eq!(app.session().display_mode(), CellDisplayMode::Coordinates);

    let rows = render(&mut app, 120, 16);
    assert!(contains(&rows, "Clock Grid · coordinates (1-indexed)"));
    assert!(contains(&rows, " 28 "));
}

#[test]
fn test_backspace_walks_back() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Backspace);
    // (1,0) is empty, so the key clears and lands on (0,4).
    assert_eq!(app.session().answer_cursor(), CellPos::new(0, 4));
}

// =============================================================================
// Clue
// =============================================================================

#[test]
fn test_clue_counters_and_selection() {
    let mut app = app();
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.tab(), Tab::Clue);

    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(
        app.session().visible_counters().iter().copied().collect::<Vec<_>>(),
        vec![CounterKind::Letters]
    );

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.session().selection().contains(2));

    let rows = render(&mut app, 100, 30);
    assert!(contains(&rows, "1 [x] Word character count"));
    assert!(contains(&rows, "2 [ ] Word count (per line)"));
    assert!(contains(&rows, "Clue · 1 selected"));
    assert!(contains(&rows, "The time and the tide"));

    press(&mut app, KeyCode::Char('x'));
    assert!(app.session().selection().is_empty());
}
