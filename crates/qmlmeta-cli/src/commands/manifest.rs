//! `qmlmeta manifest` - merge the discovered file list into a JSON
//! manifest's `files` field
//!
//! With `-o` the target document is read back, updated and replaced
//! atomically; without it the merged document goes to stdout.

use anyhow::Result;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::info;

use qmlmeta_schema::json::dump_json;
use qmlmeta_schema::manifest;

use crate::discovery::{collect_files, IncludeSet};

const DEFAULT_INCLUDE: &str = "*";

pub fn handle_manifest(
    paths: &[PathBuf],
    include: &[String],
    output: Option<&Path>,
) -> Result<()> {
    let includes = IncludeSet::compile(include, DEFAULT_INCLUDE)?;
    let files: Vec<String> = collect_files(paths, &includes)
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    info!("Merging {} files into manifest", files.len());

    match output {
        Some(target) => {
            let existing = manifest::load_document(target)?;
            let merged = manifest::merge_files(existing, &files)?;
            manifest::write_atomic(&merged, target)?;
        }
        None => {
            let merged = manifest::merge_files(Value::Object(Map::new()), &files)?;
            let mut lock = std::io::stdout().lock();
            dump_json(&merged, &mut lock)?;
        }
    }
    Ok(())
}
