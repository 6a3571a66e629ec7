//! Clockgrid TUI - Terminal interface for clockgrid
//!
//! This crate provides a full-screen terminal UI over the headless
//! `clockgrid-core` engine: the live clock grid, the resizable grid
//! flexer, the answer sheet and the annotated clue.
//!
//! # Architecture
//!
//! - **App**: Event loop translating keys and clock ticks into session events
//! - **Widgets**: Number grid, answer sheet and scrollable clue view
//! - **Theme**: Cell category palette
//! - **Dump**: JSON output of any view, no terminal required

pub mod app;
pub mod dump;
pub mod theme;
pub mod widgets;

pub use app::{App, Tab};
pub use dump::{render_dump, DumpView};
