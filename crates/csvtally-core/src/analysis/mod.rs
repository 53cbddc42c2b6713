/// Analysis modules: deduplication and ranking of a merged dataset.

pub mod dedupe;
pub mod rank;

pub use dedupe::Aggregator;
pub use rank::rank_by_count;

use crate::error::{Result, TallyError};
use crate::model::COUNT_COLUMN;
use csv::StringRecord;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Counters for one dedupe/rank pass.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RankReport {
    /// Data rows read from the merged dataset.
    pub rows_read: u64,
    /// Distinct key values, i.e. rows written.
    pub unique_keys: usize,
}

/// Collapse rows of `input` sharing a `key` value, count them, sort by count
/// descending (ties keep first-seen order) and write the result to `output`.
///
/// The output header is the input header followed by `count`.
///
/// Fails with [`TallyError::MissingKeyColumn`] before touching `output` when
/// the input header has no `key` column.
pub fn dedupe_and_rank(input: &Path, output: &Path, key: &str) -> Result<RankReport> {
    let mut reader = csv::Reader::from_path(input).map_err(|e| TallyError::csv(input, e))?;
    let header = reader
        .headers()
        .map_err(|e| TallyError::csv(input, e))?
        .clone();

    let key_index = header
        .iter()
        .position(|h| h == key)
        .ok_or_else(|| TallyError::MissingKeyColumn {
            key: key.to_string(),
            path: input.to_path_buf(),
        })?;

    let mut aggregator = Aggregator::new(key_index);
    let mut record = StringRecord::new();
    while reader
        .read_record(&mut record)
        .map_err(|e| TallyError::csv(input, e))?
    {
        aggregator.push(&record);
    }

    if aggregator.is_empty() {
        debug!("{} has no data rows", input.display());
    }

    let report = RankReport {
        rows_read: aggregator.rows_seen(),
        unique_keys: aggregator.len(),
    };
    info!(
        "Processed {} rows; {} unique {} values",
        report.rows_read, report.unique_keys, key
    );

    let mut entries = aggregator.into_entries();
    rank_by_count(&mut entries);

    let mut writer = csv::Writer::from_path(output).map_err(|e| TallyError::csv(output, e))?;
    let mut out_header = header;
    out_header.push_field(COUNT_COLUMN);
    writer
        .write_record(&out_header)
        .map_err(|e| TallyError::csv(output, e))?;
    for entry in &entries {
        writer
            .write_record(entry.to_record())
            .map_err(|e| TallyError::csv(output, e))?;
    }
    writer.flush().map_err(|e| TallyError::io(output, e))?;

    Ok(report)
}
