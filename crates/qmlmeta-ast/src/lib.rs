//! AST-based QML metatype extraction from Python sources
//!
//! This crate statically analyzes Python files that follow the
//! PySide QML annotation convention:
//! 1. Parse each file with ast-grep's Python grammar, no interpreter
//!    involved (see `parse`)
//! 2. Walk the full tree for class definitions, nested ones included
//!    (see `scan`)
//! 3. Recognize `QmlElement`/`QmlUncreatable`/`Property`/`Signal`
//!    markers and derive class, property and signal records (see
//!    `markers` and `extractor`)
//! 4. Assemble one `FileRecord` per input file for the downstream
//!    registration-code generator
//!
//! Partially-applied annotations are expected during incremental
//! authoring, so every shape mismatch is a silent non-match. The only
//! per-file failures are unreadable input and malformed Python.

pub mod errors;
pub mod extractor;
pub mod markers;
pub mod parse;
pub mod scan;
pub mod typemap;

pub use errors::AnalyzerError;
pub use parse::SourceUnit;

use qmlmeta_schema::FileRecord;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Analyze already-loaded source text.
///
/// The `path` argument is an identifier only; it is echoed into the
/// record's `inputFile` field and into error messages, never resolved.
pub fn analyze_source(path: &str, text: &str) -> Result<FileRecord, AnalyzerError> {
    let unit = SourceUnit::parse(path, text)?;
    Ok(analyze_unit(&unit))
}

/// Analyze a parsed source unit into its file record.
///
/// Infallible: a unit that parsed but contains no annotated classes
/// still yields a record with an empty `classes` list.
pub fn analyze_unit(unit: &SourceUnit) -> FileRecord {
    let classes: Vec<_> = scan::ClassScan::new(unit.root())
        .filter_map(|class_node| extractor::extract_class(&class_node))
        .collect();

    debug!(
        "Extracted {} annotated classes from {}",
        classes.len(),
        unit.path()
    );

    FileRecord {
        classes,
        input_file: unit.path().to_string(),
    }
}

/// Read and analyze one file from disk.
pub fn analyze_file(path: &Path) -> Result<FileRecord, AnalyzerError> {
    let identifier = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
        path: identifier.clone(),
        source,
    })?;
    analyze_source(&identifier, &text)
}
