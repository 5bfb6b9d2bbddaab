//! Error types for per-file analysis
//!
//! Only two things can fail for a file: reading it, and parsing it.
//! Annotation-shape mismatches are deliberately not errors; extraction
//! steps return `None` for those instead (the convention is advisory
//! and half-written annotations are normal while authoring).

use std::io;
use thiserror::Error;

/// A failure that aborts analysis of a single file.
///
/// One file failing must never corrupt or suppress the records of
/// sibling files; whether the overall run keeps going is the caller's
/// policy, not the analyzer's.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}:{line}:{column}: invalid Python syntax near `{snippet}`")]
    Parse {
        path: String,
        /// 1-based line of the first malformed region.
        line: usize,
        /// 1-based byte column of the first malformed region.
        column: usize,
        snippet: String,
    },
}
