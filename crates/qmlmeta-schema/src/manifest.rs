//! Files-manifest update helpers
//!
//! Merges a discovered file list into the `files` field of a JSON
//! manifest document. Writes go through a `.new` staging file followed
//! by a rename, so a crash mid-write never leaves a truncated target.

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::json::dump_json;

/// Load an existing manifest document, or an empty object if `path`
/// does not exist yet.
pub fn load_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        debug!("No existing manifest at {:?}, starting empty", path);
        return Ok(Value::Object(Map::new()));
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    let document = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse manifest {}", path.display()))?;
    Ok(document)
}

/// Replace the `files` field of `document` with `files`, keeping every
/// other key intact.
pub fn merge_files(document: Value, files: &[String]) -> Result<Value> {
    let mut map = match document {
        Value::Object(map) => map,
        other => bail!("manifest root must be a JSON object, got {}", type_name(&other)),
    };
    map.insert(
        "files".to_string(),
        Value::Array(files.iter().map(|f| Value::String(f.clone())).collect()),
    );
    Ok(Value::Object(map))
}

/// Write `document` to `target` atomically via a `.new` staging file.
pub fn write_atomic(document: &Value, target: &Path) -> Result<()> {
    let staged = PathBuf::from(format!("{}.new", target.display()));
    debug!("Staging manifest write at {:?}", staged);

    let mut file = fs::File::create(&staged)
        .with_context(|| format!("failed to create {}", staged.display()))?;
    dump_json(document, &mut file)?;
    fs::rename(&staged, target)
        .with_context(|| format!("failed to move {} into place", staged.display()))?;

    info!("Manifest written to {:?}", target);
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
