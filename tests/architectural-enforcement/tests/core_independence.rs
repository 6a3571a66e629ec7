//! Integration Test: Headless Core
//!
//! **Policy**: `clockgrid/core` MUST NOT depend on any UI framework or async
//! runtime. Surfaces render the core's outputs; the core never draws, polls
//! a terminal, or schedules work.
//!
//! **Policy**: Only `clock.rs` may sample the wall clock. Everything else
//! receives the time as a plain value.

use std::fs;

use architectural_enforcement::{production_lines, rust_files, violation, workspace_root};

/// Crates a headless core must never pull in
const FORBIDDEN_CRATES: &[&str] = &["ratatui", "crossterm", "tokio", "futures"];

#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("clockgrid/core/Cargo.toml"))
        .expect("core manifest should be readable");

    let offending: Vec<&str> = FORBIDDEN_CRATES
        .iter()
        .copied()
        .filter(|name| {
            manifest
                .lines()
                .any(|line| line.trim_start().starts_with(&format!("{name} =")))
        })
        .collect();

    assert!(
        offending.is_empty(),
        "clockgrid-core must stay headless, found: {offending:?}"
    );
}

#[test]
fn test_core_sources_have_no_ui_imports() {
    let mut violations = Vec::new();

    for path in rust_files("clockgrid/core/src") {
        for (line_number, code) in production_lines(&path) {
            for name in FORBIDDEN_CRATES {
                if code.contains(&format!("{name}::")) {
                    violations.push(violation(&path, line_number, "UI/runtime crate", &code));
                }
            }
        }
    }

    if !violations.is_empty() {
        for v in &violations {
            eprintln!("  ❌ {v}");
        }
        panic!(
            "\nFound {} UI/runtime reference(s) in clockgrid-core.",
            violations.len()
        );
    }
}

#[test]
fn test_only_clock_module_samples_time() {
    let mut violations = Vec::new();

    for path in rust_files("clockgrid/core/src") {
        if path.file_name().and_then(|n| n.to_str()) == Some("clock.rs") {
            continue;
        }
        for (line_number, code) in production_lines(&path) {
            if code.contains("Local::now")
                || code.contains("Utc::now")
                || code.contains("SystemTime::now")
                || code.contains("Instant::now")
            {
                violations.push(violation(&path, line_number, "Wall clock read", &code));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "time must be passed in as a ClockReading:\n{}",
        violations.join("\n")
    );
}
