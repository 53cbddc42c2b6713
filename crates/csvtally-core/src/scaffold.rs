/// Template scaffolding: creates a folder holding every pattern file with
/// only the header row, ready to be filled with exported data.
use crate::error::{Result, TallyError};
use crate::model::{Pattern, Schema};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Folder name used by `init` when none is given.
pub const DEFAULT_TEMPLATE_DIR: &str = "AAA";

/// Write a header-only file for each pattern into `dir`, creating it if
/// needed. Existing files are overwritten. Returns the written paths.
pub fn create_templates(dir: &Path, schema: &Schema) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| TallyError::io(dir, e))?;

    let mut written = Vec::with_capacity(Pattern::ALL.len());
    for pattern in Pattern::ALL {
        let path = dir.join(pattern.file_name());
        let mut writer = csv::Writer::from_path(&path).map_err(|e| TallyError::csv(&path, e))?;
        writer
            .write_record(schema.columns())
            .map_err(|e| TallyError::csv(&path, e))?;
        writer.flush().map_err(|e| TallyError::io(&path, e))?;
        written.push(path);
    }

    info!(
        "Created directory '{}' with {} CSV files",
        dir.display(),
        written.len()
    );
    Ok(written)
}
