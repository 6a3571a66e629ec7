//! Clockgrid Core - Headless Clock Grid and Clue Engine
//!
//! This crate holds every rule of the clockgrid puzzle, completely
//! independent of any UI framework. It lays the 72 clock labels out on a
//! grid, decides how each cell is highlighted, and tokenizes the clue text
//! into words with cumulative counters. The terminal surface only renders
//! what this crate computes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        UI Surfaces                               │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │       TUI       │  │   JSON dump     │  │    Headless     │  │
//! │  │    (ratatui)    │  │    (--dump)     │  │    (tests)      │  │
//! │  └────────┬────────┘  └────────┬────────┘  └────────┬────────┘  │
//! │           └────────────────────┴────────────────────┘           │
//! │                    SessionEvent (up)                             │
//! │                    Grid / Line views (down)                      │
//! └───────────────────────────┼──────────────────────────────────────┘
//!                             │
//! ┌───────────────────────────┼──────────────────────────────────────┐
//! │                    CLOCKGRID CORE                                │
//! │  ┌────────────────────────┴────────────────────────────────────┐ │
//! │  │                    PuzzleSession                             │ │
//! │  │  ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐ │ │
//! │  │  │ Sequence │  │   Grid   │  │Highlight │  │  Clue Tokens │ │ │
//! │  │  │  + Clock │  │  Reflow  │  │ Resolver │  │ + Selection  │ │ │
//! │  │  └──────────┘  └──────────┘  └──────────┘  └──────────────┘ │ │
//! │  └─────────────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`PuzzleSession`]: Observed inputs plus the derived views
//! - [`SessionEvent`]: Events sent from UI surfaces to the session
//! - [`Grid`]: A laid-out, categorized grid of clock labels
//! - [`Line`] / [`Word`]: The tokenized clue
//! - [`ClockgridConfig`]: Layered configuration (CLI > env > file > defaults)
//!
//! # Quick Start
//!
//! ```
//! use clockgrid_core::{ClockReading, PuzzleSession, SessionEvent};
//!
//! let mut session = PuzzleSession::default();
//! session.apply(SessionEvent::SetCols(8));
//! session.apply(SessionEvent::ClockTick(ClockReading::now()));
//!
//! let flexer = session.flexer_grid();
//! assert_eq!(flexer.cols(), 8);
//! assert_eq!(flexer.rows(), 9);
//! ```
//!
//! # Module Overview
//!
//! - [`sequence`]: The 72 canonical labels
//! - [`grid`]: Dimensions, reflow and cell display modes
//! - [`highlight`]: Per-cell category resolution
//! - [`clock`]: Time-of-day readings
//! - [`answers`]: The 6 × 5 answer sheet
//! - [`navigation`]: Cursor movement with wraparound
//! - [`clue`]: Clue tokenizer and counters
//! - [`selection`]: Word highlight set
//! - [`session`]: Event reducer and views
//! - [`config`]: Configuration loading
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, tokio, or any
//! other UI or runtime framework. It's pure logic that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod answers;
pub mod clock;
pub mod clue;
pub mod config;
pub mod grid;
pub mod highlight;
pub mod navigation;
pub mod selection;
pub mod sequence;
pub mod session;

// Re-exports for convenience
pub use answers::{AnswerGrid, EditOutcome, PrefilledCell};
pub use clock::ClockReading;
pub use clue::{tokenize, CounterKind, Line, Word};
pub use grid::{reflow, Cell, CellDisplayMode, Grid, GridDimensions};
pub use highlight::{highlight, resolve, Category, HighlightContext};
pub use navigation::{next_cell, Bounds, CellPos, Direction};
pub use selection::HighlightSet;
pub use sequence::{canonical, generate, Label, LabeledItem};
pub use session::{PuzzleSession, SessionEvent};

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, ClockgridConfig, ClockgridToml,
    ConfigError, ConfigOverrides, ConfigSource,
};
