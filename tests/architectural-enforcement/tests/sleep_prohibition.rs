//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods. The TUI waits on
//! terminal events and a `tokio::time::interval`; the core never waits at all.

use architectural_enforcement::{production_lines, rust_files, violation};

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let mut violations = Vec::new();

    for dir in ["clockgrid/core/src", "tui/src"] {
        for path in rust_files(dir) {
            for (line_number, code) in production_lines(&path) {
                if code.contains("thread::sleep") || code.contains("time::sleep") {
                    violations.push(violation(&path, line_number, "Sleep call", &code));
                }
            }
        }
    }

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Sleep calls found in production code!\n");
        for v in &violations {
            eprintln!("  ❌ {v}");
        }
        eprintln!("\n✅ Use tokio::time::interval() for periodic work.");

        panic!(
            "\nFound {} sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}
