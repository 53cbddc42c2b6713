/// Run summary: per-pattern counters collected by the pipeline, printable
/// as a table or serialisable as JSON.
use crate::analysis::RankReport;
use crate::merge::MergeReport;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct PatternReport {
    pub pattern: String,
    pub files_found: usize,
    pub walk_errors: u64,
    pub merge: MergeReport,
    pub rank: RankReport,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub patterns: Vec<PatternReport>,
}

impl RunReport {
    /// Source files skipped across all patterns.
    pub fn files_skipped(&self) -> usize {
        self.patterns.iter().map(|p| p.merge.files_skipped()).sum()
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    let s = count.to_string();
    if s.len() <= 3 {
        return s;
    }
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<30} {:>6} {:>7} {:>10} {:>8}",
            "Pattern", "Files", "Skipped", "Rows", "Unique"
        )?;
        for p in &self.patterns {
            writeln!(
                f,
                "{:<30} {:>6} {:>7} {:>10} {:>8}",
                p.pattern,
                p.files_found,
                p.merge.files_skipped(),
                format_count(p.merge.rows_written),
                format_count(p.rank.unique_keys as u64),
            )?;
        }
        write!(f, "Final CSVs are in: {}", self.output_dir.display())
    }
}
