//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, clock tick)
//! - PuzzleSession for every rule of the puzzle
//! - Per-tab rendering of the session's views
//!
//! The App never computes a highlight or a counter itself. It converts
//! terminal input into [`SessionEvent`]s and draws whatever the session
//! hands back.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::{Frame, Terminal};
use tokio::time::MissedTickBehavior;

use clockgrid_core::{
    ClockReading, ClockgridConfig, CounterKind, Direction, PuzzleSession, SessionEvent,
};

use crate::theme::{counter_color, ACCENT_CYAN, BORDER_GRAY, DIM_GRAY};
use crate::widgets::{AnswerSheet, ClueView, ClueViewState, NumberGrid};

/// Rows moved by PageUp/PageDown in the clue view
const CLUE_PAGE: isize = 5;

/// The four views, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    /// Clock grid lit by the current time
    Clock,
    /// Resizable grid
    Flexer,
    /// Answer sheet beside its clock grid
    Answers,
    /// Tokenized clue
    Clue,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Self; 4] = [Self::Clock, Self::Flexer, Self::Answers, Self::Clue];

    /// Label shown in the tab bar
    pub fn title(self) -> &'static str {
        match self {
            Self::Clock => "Clock",
            Self::Flexer => "Grid Flexer",
            Self::Answers => "Answers",
            Self::Clue => "Clue",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The tab to the right, wrapping
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn help(self) -> &'static str {
        match self {
            Self::Clock => "Tab switch view · Esc quit",
            Self::Flexer => "←/→ or -/+ columns · ↑/↓ or [/] rows · r reset · Tab switch · Esc quit",
            Self::Answers => {
                "arrows move · type to fill · Backspace erase · F2 display mode · Tab switch · Esc quit"
            }
            Self::Clue => {
                "arrows move · Space select · x clear · 1-6 counters · PgUp/PgDn scroll · Esc quit"
            }
        }
    }
}

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// Puzzle inputs and views
    session: PuzzleSession,
    /// Visible tab
    tab: Tab,
    /// Clock sampling interval
    tick: Duration,
    /// Clue scroll position
    clue_state: ClueViewState,
}

impl App {
    /// Create an App around an existing session
    pub fn new(session: PuzzleSession, tick: Duration) -> Self {
        Self {
            running: true,
            session,
            tab: Tab::Clock,
            tick,
            clue_state: ClueViewState::default(),
        }
    }

    /// Create an App from loaded configuration
    pub fn from_config(config: &ClockgridConfig) -> anyhow::Result<Self> {
        let session = PuzzleSession::from_config(config)?;
        Ok(Self::new(session, config.tick))
    }

    /// Is the app still running?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Visible tab
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// The underlying session
    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // Create async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();

        // The first tick fires immediately, so the clock is lit on the first frame
        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while self.running {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => match maybe_event {
                    // Only handle Press events (not Release or Repeat)
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => tracing::warn!(error = %e, "Terminal event error"),
                    None => {
                        tracing::info!("Terminal event stream closed");
                        self.running = false;
                    }
                },

                _ = ticker.tick() => {
                    self.session.apply(SessionEvent::ClockTick(ClockReading::now()));
                }
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            // Tab switching
            KeyCode::Tab => self.switch_tab(self.tab.next()),
            KeyCode::BackTab => self.switch_tab(self.tab.previous()),

            _ => match self.tab {
                Tab::Clock => {}
                Tab::Flexer => self.handle_flexer_key(key),
                Tab::Answers => self.handle_answers_key(key),
                Tab::Clue => self.handle_clue_key(key),
            },
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        tracing::debug!(from = ?self.tab, to = ?tab, "Switching tab");
        self.tab = tab;
    }

    fn handle_flexer_key(&mut self, key: KeyEvent) {
        let dims = self.session.dimensions();
        let event = match key.code {
            KeyCode::Right | KeyCode::Char('+' | '=') => SessionEvent::SetCols(dims.cols() + 1),
            KeyCode::Left | KeyCode::Char('-') => {
                SessionEvent::SetCols(dims.cols().saturating_sub(1))
            }
            KeyCode::Down | KeyCode::Char(']') => SessionEvent::SetRows(dims.rows() + 1),
            KeyCode::Up | KeyCode::Char('[') => {
                SessionEvent::SetRows(dims.rows().saturating_sub(1))
            }
            KeyCode::Char('r') => SessionEvent::ResetDimensions,
            _ => return,
        };
        self.session.apply(event);
    }

    fn handle_answers_key(&mut self, key: KeyEvent) {
        let event = match key.code {
            KeyCode::Up => SessionEvent::MoveAnswerCursor(Direction::Up),
            KeyCode::Down => SessionEvent::MoveAnswerCursor(Direction::Down),
            KeyCode::Left => SessionEvent::MoveAnswerCursor(Direction::Left),
            KeyCode::Right | KeyCode::Enter => SessionEvent::MoveAnswerCursor(Direction::Right),
            KeyCode::Backspace => SessionEvent::EraseAnswer,
            KeyCode::F(2) => SessionEvent::SetDisplayMode(self.session.display_mode().next()),
            KeyCode::Char(c) if c.is_ascii_alphanumeric() => SessionEvent::TypeAnswer(c),
            _ => return,
        };
        self.session.apply(event);
    }

    fn handle_clue_key(&mut self, key: KeyEvent) {
        let event = match key.code {
            KeyCode::Up => SessionEvent::MoveWordCursor(Direction::Up),
            KeyCode::Down => SessionEvent::MoveWordCursor(Direction::Down),
            KeyCode::Left => SessionEvent::MoveWordCursor(Direction::Left),
            KeyCode::Right => SessionEvent::MoveWordCursor(Direction::Right),
            KeyCode::Char(' ') | KeyCode::Enter => SessionEvent::ToggleWordAtCursor,
            KeyCode::Char('x') => SessionEvent::ClearSelection,
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                SessionEvent::ToggleCounter(CounterKind::ALL[idx])
            }
            KeyCode::PageUp => {
                self.clue_state.scroll(-CLUE_PAGE);
                return;
            }
            KeyCode::PageDown => {
                self.clue_state.scroll(CLUE_PAGE);
                return;
            }
            _ => return,
        };
        self.session.apply(event);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Draw the whole screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let [tabs_area, body, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
            .select(self.tab.index())
            .style(Style::default().fg(DIM_GRAY))
            .highlight_style(
                Style::default()
                    .fg(ACCENT_CYAN)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, tabs_area);

        match self.tab {
            Tab::Clock => self.draw_clock(frame, body),
            Tab::Flexer => self.draw_flexer(frame, body),
            Tab::Answers => self.draw_answers(frame, body),
            Tab::Clue => self.draw_clue(frame, body),
        }

        frame.render_widget(
            Paragraph::new(self.tab.help()).style(Style::default().fg(DIM_GRAY)),
            help_area,
        );
    }

    fn panel(title: String) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_GRAY))
            .title(Span::styled(title, Style::default().fg(ACCENT_CYAN)))
    }

    fn draw_clock(&self, frame: &mut Frame, area: Rect) {
        let time = self.session.clock().map_or_else(
            || "--:--:--".to_string(),
            |r| format!("{}:{}:{}", r.hour, r.minute, r.second),
        );
        let block = Self::panel(format!("Clock {time}"));
        let grid = self.session.clock_grid();
        frame.render_widget(NumberGrid::new(&grid).block(block), area);
    }

    fn draw_flexer(&self, frame: &mut Frame, area: Rect) {
        let dims = self.session.dimensions();
        let block = Self::panel(format!(
            "Grid Flexer {} cols × {} rows",
            dims.cols(),
            dims.rows()
        ));
        let grid = self.session.flexer_grid();
        frame.render_widget(NumberGrid::new(&grid).block(block), area);
    }

    fn draw_answers(&self, frame: &mut Frame, area: Rect) {
        let (sheet_width, _) = AnswerSheet::content_size();
        let [sheet_area, grid_area] =
            Layout::horizontal([Constraint::Length(sheet_width + 2), Constraint::Min(0)])
                .areas(area);

        let sheet_block = Self::panel("Answers".to_string());
        let sheet_inner = sheet_block.inner(sheet_area);
        frame.render_widget(sheet_block, sheet_area);
        frame.render_widget(
            AnswerSheet::new(self.session.answers()).cursor(self.session.answer_cursor()),
            sheet_inner,
        );

        let mode = self.session.display_mode();
        let grid = self.session.answer_clock_grid();
        let block = Self::panel(format!("Clock Grid · {}", mode.name()));
        frame.render_widget(NumberGrid::new(&grid).mode(mode).block(block), grid_area);
    }

    fn draw_clue(&mut self, frame: &mut Frame, area: Rect) {
        let legend_height = CounterKind::ALL.len() as u16;
        let [legend_area, clue_area] =
            Layout::vertical([Constraint::Length(legend_height), Constraint::Min(0)])
                .areas(area);

        let visible = self.session.visible_counters();
        let legend: Vec<Line> = CounterKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let mark = if visible.contains(kind) { "[x]" } else { "[ ]" };
                Line::from(vec![
                    Span::raw(format!("{} {mark} ", i + 1)),
                    Span::styled(kind.description(), Style::default().fg(counter_color(*kind))),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(legend), legend_area);

        let block = Self::panel(format!(
            "Clue · {} selected",
            self.session.selection().len()
        ));
        let inner = block.inner(clue_area);
        frame.render_widget(block, clue_area);

        let view = ClueView::new(self.session.clue_lines(), visible, self.session.selection())
            .cursor(self.session.word_cursor());
        frame.render_stateful_widget(view, inner, &mut self.clue_state);
    }
}
