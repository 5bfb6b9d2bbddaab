//! File discovery
//!
//! Walks the given root paths and keeps the files matched by the
//! include set. Include patterns are shell globs compiled into one
//! anchored regex, fnmatch-style: `*` and `?` are wildcards, `[...]`
//! classes pass through, everything else matches literally. During a
//! directory walk the pattern is applied to the file's base name; a
//! root that is itself a file is matched against its full path.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A compiled set of include globs.
pub struct IncludeSet {
    pattern: Regex,
}

impl IncludeSet {
    /// Compile `globs` into a single anchored alternation, falling back
    /// to `default_glob` when none were given.
    pub fn compile(globs: &[String], default_glob: &str) -> Result<Self> {
        let globs: Vec<&str> = if globs.is_empty() {
            vec![default_glob]
        } else {
            globs.iter().map(String::as_str).collect()
        };

        let alternation = globs
            .iter()
            .map(|glob| format!("(?:{})", translate_glob(glob)))
            .collect::<Vec<_>>()
            .join("|");
        let anchored = format!("\\A(?:{alternation})\\z");
        debug!("Compiled include set: {}", anchored);

        let pattern = Regex::new(&anchored)
            .with_context(|| format!("invalid include pattern in {globs:?}"))?;
        Ok(IncludeSet { pattern })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}

/// Translate one shell glob into an unanchored regex fragment.
fn translate_glob(glob: &str) -> String {
    let mut out = String::new();
    let mut chars = glob.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => {
                // A leading `!` negates; a `]` right after the opener
                // (or after the `!`) is literal, not a terminator.
                let mut raw = String::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == ']' && !(raw.is_empty() || raw == "!") {
                        closed = true;
                        break;
                    }
                    raw.push(inner);
                }
                if closed {
                    out.push('[');
                    let body = if let Some(rest) = raw.strip_prefix('!') {
                        out.push('^');
                        rest
                    } else {
                        raw.as_str()
                    };
                    for inner in body.chars() {
                        match inner {
                            '\\' => out.push_str("\\\\"),
                            ']' => out.push_str("\\]"),
                            _ => out.push(inner),
                        }
                    }
                    out.push(']');
                } else {
                    // Unterminated class matches its characters
                    // literally, the consumed `[` included.
                    out.push_str(&regex::escape("["));
                    out.push_str(&regex::escape(&raw));
                }
            }
            other => out.push_str(&regex::escape(&other.to_string())),
        }
    }

    out
}

/// Collect the files under `roots` matched by `includes`: relative
/// where possible, sorted, deduplicated.
pub fn collect_files(roots: &[PathBuf], includes: &IncludeSet) -> Vec<PathBuf> {
    let mut found = BTreeSet::new();

    for root in roots {
        if !root.is_dir() {
            // File roots (and dangling paths, which surface as read
            // errors later) are matched on the full path.
            if includes.matches(&root.to_string_lossy()) {
                found.insert(relativize(root));
            }
            continue;
        }

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if includes.matches(&name) {
                found.insert(relativize(entry.path()));
            }
        }
    }

    debug!("Discovered {} files", found.len());
    found.into_iter().collect()
}

fn relativize(path: &Path) -> PathBuf {
    let path = path.strip_prefix(".").unwrap_or(path);
    if !path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => relative_to(path, &cwd),
        Err(_) => path.to_path_buf(),
    }
}

/// `path` expressed relative to `base`, stepping up with `..` where
/// the two diverge. Both paths must be absolute and free of `..`
/// components, which holds for canonical roots against the working
/// directory.
fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let mut remaining = path.components().peekable();
    let mut ancestors = base.components().peekable();

    while let (Some(next), Some(anchor)) = (remaining.peek(), ancestors.peek()) {
        if next != anchor {
            break;
        }
        remaining.next();
        ancestors.next();
    }

    let mut out = PathBuf::new();
    for _ in ancestors {
        out.push("..");
    }
    for component in remaining {
        out.push(component);
    }
    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
