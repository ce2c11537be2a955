//! Architecture enforcement tests.
//!
//! libgit2 is reached through exactly one module, and the lower layers never
//! depend on the upper ones. These tests read the source tree and fail on
//! violations so they are caught in CI.
//!
//! # Test Categories
//!
//! 1. **Single Doorway** - Only `src/native/` may use `git2` or `libgit2_sys`
//! 2. **Layering** - `core` and `catalog` never reach into `registry` or `native`
//! 3. **No Panics** - Library code outside tests does not unwrap
//! 4. **Formatting** - Code lines fit in 100 columns

use std::fs;
use std::path::{Path, PathBuf};

/// Modules allowed to talk to libgit2.
const DOORWAY: &str = "src/native";

/// Lower layers and the modules they must not import.
const LAYERS: &[(&str, &[&str])] = &[
    ("src/core", &["crate::registry", "crate::native", "crate::catalog"]),
    ("src/catalog", &["crate::registry", "crate::native"]),
    ("src/native", &["crate::registry"]),
];

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// All `.rs` files under `dir`, recursively.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).expect("Failed to read directory") {
            let path = entry.expect("Failed to read entry").path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

/// The part of a file before its test module.
fn non_test_code(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(pos) => &content[..pos],
        None => content,
    }
}

/// True if `text` refers to the crate `krate` as a path root.
///
/// `Libgit2::detect` does not count as a use of `git2`.
fn uses_crate(text: &str, krate: &str) -> bool {
    text.match_indices(krate).any(|(i, _)| {
        let before = text[..i].chars().next_back();
        let after = &text[i + krate.len()..];
        let starts_ident = !before.is_some_and(|c| c.is_alphanumeric() || c == '_');
        starts_ident
            && (after.starts_with("::") || after.starts_with(';') || after.starts_with(" as "))
    })
}

/// Lines that are code rather than comments.
fn code_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim_start().starts_with("//"))
        .map(|(i, l)| (i + 1, l))
}

// =============================================================================
// Single Doorway
// =============================================================================

/// Verify that only the native module uses git2 or libgit2-sys.
#[test]
fn only_native_touches_libgit2() {
    let root = root();
    let doorway = root.join(DOORWAY);
    let mut violations = Vec::new();

    for path in rust_files(&root.join("src")) {
        if path.starts_with(&doorway) {
            continue;
        }
        let content = fs::read_to_string(&path).unwrap();
        for (line, text) in code_lines(&content) {
            if uses_crate(text, "git2") || uses_crate(text, "libgit2_sys") {
                violations.push(format!("{}:{}: {}", path.display(), line, text.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "libgit2 used outside {}:\n  {}",
        DOORWAY,
        violations.join("\n  ")
    );
}

/// The doorway really is where libgit2 is used.
#[test]
fn native_uses_libgit2() {
    let content = fs::read_to_string(root().join(DOORWAY).join("libgit2.rs")).unwrap();
    assert!(content.lines().any(|l| uses_crate(l, "libgit2_sys")));
    assert!(content.lines().any(|l| uses_crate(l, "git2")));
}

#[test]
fn crate_use_detection() {
    assert!(uses_crate("use git2::Version;", "git2"));
    assert!(uses_crate("use libgit2_sys as raw;", "libgit2_sys"));
    assert!(!uses_crate("Registry::load(Libgit2::detect(), &c)", "git2"));
    assert!(!uses_crate("let libgit2 = 1;", "git2"));
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn lower_layers_do_not_import_upper_layers() {
    let root = root();
    let mut violations = Vec::new();

    for (dir, forbidden) in LAYERS {
        for path in rust_files(&root.join(dir)) {
            let content = fs::read_to_string(&path).unwrap();
            for (line, text) in code_lines(non_test_code(&content)) {
                for module in *forbidden {
                    if text.contains(module) {
                        violations.push(format!(
                            "{}:{}: imports {}",
                            path.display(),
                            line,
                            module
                        ));
                    }
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Layering violations found:\n  {}",
        violations.join("\n  ")
    );
}

// =============================================================================
// No Panics
// =============================================================================

/// Library code propagates errors instead of unwrapping.
#[test]
fn library_code_does_not_unwrap() {
    let mut violations = Vec::new();

    for path in rust_files(&root().join("src")) {
        let content = fs::read_to_string(&path).unwrap();
        for (line, text) in code_lines(non_test_code(&content)) {
            if text.contains(".unwrap()") || text.contains(".expect(") {
                violations.push(format!("{}:{}: {}", path.display(), line, text.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "unwrap/expect in library code:\n  {}",
        violations.join("\n  ")
    );
}

// =============================================================================
// Formatting
// =============================================================================

/// Code lines stay within rustfmt's width. Long string literals are exempt.
#[test]
fn code_fits_in_100_columns() {
    let root = root();
    let mut violations = Vec::new();

    for dir in ["src", "tests"] {
        for path in rust_files(&root.join(dir)) {
            let content = fs::read_to_string(&path).unwrap();
            for (line, text) in code_lines(&content) {
                if text.chars().count() > 100 && !text.trim_start().starts_with('"') {
                    violations.push(format!("{}:{}", path.display(), line));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Lines over 100 columns:\n  {}",
        violations.join("\n  ")
    );
}
