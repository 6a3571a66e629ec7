//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The core stays headless (no UI or runtime crates)
//! - No sleep() calls in production code
//! - Only the clock module samples the time
//!
//! These tests are designed to catch violations early in the development cycle.
//! The helpers below scan source text; they are line-based and skip comments
//! and everything from the first `#[cfg(test)]` onward.

use std::fs;
use std::path::{Path, PathBuf};

/// The workspace root, two levels above this package
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// Every `.rs` file under `dir` (relative to the workspace root)
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let root = workspace_root().join(dir);
    assert!(root.exists(), "missing source directory: {}", root.display());

    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Production lines of a file as `(line_number, code)`
///
/// Line comments and doc comments are dropped; scanning stops at the test
/// module.
pub fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    code_lines(&content)
}

/// Same as [`production_lines`] for in-memory source
pub fn code_lines(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .filter_map(|(idx, line)| {
            let code = line.split("//").next().unwrap_or(line).trim();
            (!code.is_empty()).then(|| (idx + 1, code.to_string()))
        })
        .collect()
}

/// Format a violation for the failure report
pub fn violation(path: &Path, line_number: usize, what: &str, code: &str) -> String {
    let root = workspace_root();
    let shown = path.strip_prefix(&root).unwrap_or(path);
    format!("{}:{} - {}: {}", shown.display(), line_number, what, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_lines_drop_comments() {
        let src = "use a; // trailing\n/// doc\n\nlet x = 1;\n";
        assert_eq!(
            code_lines(src),
            vec![(1, "use a;".to_string()), (4, "let x = 1;".to_string())]
        );
    }

    #[test]
    fn test_code_lines_stop_at_test_module() {
        let src = "fn a() {}\n#[cfg(test)]\nmod tests {\n    fn b() { sleep(); }\n}\n";
        assert_eq!(code_lines(src), vec![(1, "fn a() {}".to_string())]);
    }

    #[test]
    fn test_workspace_root_has_manifest() {
        assert!(workspace_root().join("Cargo.toml").exists());
    }
}
