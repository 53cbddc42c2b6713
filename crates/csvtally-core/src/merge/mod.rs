/// Merge module: the merger.
///
/// Streams every collected source into one intermediate CSV whose header is
/// exactly the schema's column list. Each source is read and projected in
/// full before any of its rows are written, so a file that fails half-way
/// contributes nothing and only one source is held in memory at a time.
///
/// Per-file failures (unreadable, undecodable, malformed) are logged and
/// skipped. A source whose header lacks the key column aborts the merge,
/// as does failure to write the intermediate itself.
pub mod projection;

pub use projection::Projection;

use crate::error::{Result, TallyError};
use crate::model::Schema;
use csv::StringRecord;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Counters for one merge pass.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Files handed to the merger.
    pub files_attempted: usize,
    /// Files whose rows were written.
    pub files_merged: usize,
    /// Files skipped because they had no header row.
    pub files_empty: usize,
    /// Files skipped because they could not be read or parsed.
    pub files_failed: usize,
    /// Data rows written, header excluded.
    pub rows_written: u64,
}

impl MergeReport {
    pub fn files_skipped(&self) -> usize {
        self.files_empty + self.files_failed
    }
}

/// Merge `files`, in the given order, into the CSV at `output`.
///
/// The header row is always written, so an empty `files` list yields a
/// header-only dataset.
pub fn merge_files(files: &[PathBuf], schema: &Schema, output: &Path) -> Result<MergeReport> {
    let mut writer = csv::Writer::from_path(output).map_err(|e| TallyError::csv(output, e))?;
    writer
        .write_record(schema.columns())
        .map_err(|e| TallyError::csv(output, e))?;

    let mut report = MergeReport {
        files_attempted: files.len(),
        ..Default::default()
    };

    for path in files {
        match read_projected(path, schema) {
            Ok(SourceRows::Rows(rows)) => {
                for row in &rows {
                    writer
                        .write_record(row)
                        .map_err(|e| TallyError::csv(output, e))?;
                }
                report.files_merged += 1;
                report.rows_written += rows.len() as u64;
                debug!("Appended {} row(s) from {}", rows.len(), path.display());
            }
            Ok(SourceRows::Empty) => {
                report.files_empty += 1;
                warn!("Skipping empty file: {}", path.display());
            }
            Ok(SourceRows::MissingKey) => {
                return Err(TallyError::SourceMissingKey {
                    key: schema.key().to_string(),
                    path: path.clone(),
                });
            }
            Err(err) => {
                report.files_failed += 1;
                warn!("Skipping unreadable file '{}': {}", path.display(), err);
            }
        }
    }

    writer.flush().map_err(|e| TallyError::io(output, e))?;

    info!(
        "Merged {} of {} file(s), {} total rows",
        report.files_merged, report.files_attempted, report.rows_written
    );
    Ok(report)
}

/// What one source contributed.
enum SourceRows {
    Rows(Vec<StringRecord>),
    /// No header row at all.
    Empty,
    /// A header without the key column.
    MissingKey,
}

/// Read one source and project every row.
fn read_projected(path: &Path, schema: &Schema) -> std::result::Result<SourceRows, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let header = reader.headers()?.clone();
    if header.is_empty() {
        return Ok(SourceRows::Empty);
    }
    if !Projection::header_contains(&header, schema.key()) {
        return Ok(SourceRows::MissingKey);
    }

    let projection = Projection::new(&header, schema.columns());
    let missing = projection.missing(schema.columns());
    if !missing.is_empty() {
        debug!("{} lacks column(s) {:?}", path.display(), missing);
    }

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let mut projected = StringRecord::with_capacity(record.as_slice().len(), schema.columns().len());
        projection.project_into(&record, &mut projected);
        rows.push(projected);
    }
    Ok(SourceRows::Rows(rows))
}
