//! `qmlmeta qrc` - emit a Qt resource listing for the discovered files

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use qmlmeta_schema::qrc::render_qrc;

use crate::discovery::{collect_files, IncludeSet};

const DEFAULT_INCLUDE: &str = "*";

pub fn handle_qrc(paths: &[PathBuf], include: &[String]) -> Result<()> {
    let includes = IncludeSet::compile(include, DEFAULT_INCLUDE)?;
    let files = collect_files(paths, &includes);
    info!("Listing {} files", files.len());

    let names: Vec<String> = files
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    let document = render_qrc(&names);

    std::io::stdout().lock().write_all(document.as_bytes())?;
    Ok(())
}
