//! `qmlmeta dump` - analyze Python sources and emit metatype records
//!
//! One JSON record per discovered file, empty `classes` included, so
//! downstream tooling can tell scanned-but-empty files apart from
//! files that were never scanned. A file that fails to parse is
//! reported and skipped; records already written stay valid.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use qmlmeta_ast::analyze_file;
use qmlmeta_schema::json::dump_json;

use crate::discovery::{collect_files, IncludeSet};

const DEFAULT_INCLUDE: &str = "*.py";
const RECORD_SUFFIX: &str = ".json";

pub fn handle_dump(
    paths: &[PathBuf],
    include: &[String],
    output_directory: Option<&Path>,
    fail_fast: bool,
) -> Result<()> {
    let includes = IncludeSet::compile(include, DEFAULT_INCLUDE)?;
    let files = collect_files(paths, &includes);
    info!("Analyzing {} files", files.len());

    if let Some(directory) = output_directory {
        fs::create_dir_all(directory)
            .with_context(|| format!("failed to create {}", directory.display()))?;
    }

    let stdout = std::io::stdout();
    let mut failed = 0usize;

    for file in &files {
        let record = match analyze_file(file) {
            Ok(record) => record,
            Err(err) => {
                error!("{err}");
                if fail_fast {
                    return Err(err.into());
                }
                failed += 1;
                continue;
            }
        };

        match output_directory {
            Some(directory) => {
                let target = artifact_path(directory, file);
                let mut out = fs::File::create(&target)
                    .with_context(|| format!("failed to create {}", target.display()))?;
                dump_json(&record, &mut out)?;
            }
            None => {
                let mut lock = stdout.lock();
                dump_json(&record, &mut lock)?;
                lock.flush()?;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} files failed to analyze", files.len());
    }
    Ok(())
}

/// Artifact name: input base name plus the record suffix.
// TODO: disambiguate same-named inputs from different directories
fn artifact_path(directory: &Path, input: &Path) -> PathBuf {
    let base = input.file_name().unwrap_or(input.as_os_str());
    let mut name = base.to_os_string();
    name.push(RECORD_SUFFIX);
    directory.join(name)
}

#[cfg(test)]
mod tests {
    use crate::commands::dump::*;

    #[test]
    fn test_artifact_path_appends_suffix() {
        let target = artifact_path(Path::new("out"), Path::new("pkg/widget.py"));
        assert_eq!(target, Path::new("out/widget.py.json"));
    }
}
