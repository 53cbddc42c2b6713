/// Pipeline module: runs collect → merge → dedupe/rank → copy for each of
/// the five patterns.
///
/// Patterns share nothing but the configuration. Intermediates live in a
/// scratch [`TempDir`] that is removed when the pipeline is dropped,
/// whichever way the run ends. The ranked file is built in scratch and
/// only copied to the output folder once it is complete, so a fatal error
/// never overwrites an existing output.
pub mod config;
pub mod report;

pub use config::{PipelineConfig, DEFAULT_OUTPUT_DIR, FILTERED_OUTPUT_DIR};
pub use report::{PatternReport, RunReport};

use crate::analysis::dedupe_and_rank;
use crate::error::{Result, TallyError};
use crate::merge::merge_files;
use crate::model::Pattern;
use crate::scanner::collect_matches;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tempfile::TempDir;
use tracing::{error, info, warn};

/// Merged intermediate, rewritten for every pattern.
const MERGED_FILE: &str = "temp_output.csv";
/// Deduplicated and ranked intermediate, rewritten for every pattern.
const RANKED_FILE: &str = "final_output.csv";

/// A prepared run: resolved directories plus the scratch space.
pub struct Pipeline {
    config: PipelineConfig,
    root: PathBuf,
    output_dir: PathBuf,
    /// Subtrees the collector must not enter: the output folder when it
    /// lies inside the root.
    excluded: Vec<PathBuf>,
    scratch: TempDir,
}

impl Pipeline {
    /// Resolve the root and output folder and create the scratch directory.
    ///
    /// Both directories are canonicalised so the collector can reliably
    /// exclude the output folder from its walk. An output folder equal to
    /// the root or above it is rejected.
    pub fn prepare(config: PipelineConfig) -> Result<Self> {
        if !config.root.is_dir() {
            return Err(TallyError::NotADirectory {
                path: config.root.clone(),
            });
        }
        let root = fs::canonicalize(&config.root).map_err(|e| TallyError::io(&config.root, e))?;

        let output_dir = config.output_dir_under(&root);
        fs::create_dir_all(&output_dir).map_err(|e| TallyError::io(&output_dir, e))?;
        let output_dir = fs::canonicalize(&output_dir).map_err(|e| TallyError::io(&output_dir, e))?;

        if root.starts_with(&output_dir) {
            return Err(TallyError::OutputContainsRoot {
                output: output_dir,
                root,
            });
        }
        let excluded = if output_dir.starts_with(&root) {
            vec![output_dir.clone()]
        } else {
            Vec::new()
        };

        let scratch = tempfile::Builder::new()
            .prefix("csvtally-")
            .tempdir()
            .map_err(|e| TallyError::io(std::env::temp_dir(), e))?;

        info!("Root folder: {}", root.display());
        info!("Output folder: {}", output_dir.display());

        Ok(Self {
            config,
            root,
            output_dir,
            excluded,
            scratch,
        })
    }

    /// Process every pattern in order. The first fatal error aborts the run;
    /// outputs of patterns already finished are kept.
    pub fn run(self) -> Result<RunReport> {
        let start = Instant::now();
        let mut patterns = Vec::with_capacity(Pattern::ALL.len());

        for pattern in Pattern::ALL {
            match self.run_pattern(pattern) {
                Ok(report) => patterns.push(report),
                Err(err) => {
                    error!("Aborting at '{}': {}", pattern, err);
                    return Err(err);
                }
            }
        }

        info!("All patterns processed in {:?}", start.elapsed());
        Ok(RunReport {
            root: self.root.clone(),
            output_dir: self.output_dir.clone(),
            patterns,
        })
    }

    /// Collect, merge, rank and publish one pattern.
    pub fn run_pattern(&self, pattern: Pattern) -> Result<PatternReport> {
        info!("Processing '{}'", pattern);

        let collected = collect_matches(
            &self.root,
            pattern.file_name(),
            self.config.filter.as_ref(),
            &self.excluded,
        );
        if collected.files.is_empty() {
            warn!("No files found for pattern '{}'", pattern);
        }

        let merged = self.scratch.path().join(MERGED_FILE);
        let merge = merge_files(&collected.files, &self.config.schema, &merged)?;

        let ranked = self.scratch.path().join(RANKED_FILE);
        let rank = dedupe_and_rank(&merged, &ranked, self.config.schema.key())?;

        let dest = self
            .output_dir
            .join(pattern.output_file_name(self.config.naming));
        fs::copy(&ranked, &dest).map_err(|e| TallyError::io(&dest, e))?;
        info!("Copied final result → {}", dest.display());

        Ok(PatternReport {
            pattern: pattern.file_name().to_string(),
            files_found: collected.files.len(),
            walk_errors: collected.walk_errors,
            merge,
            rank,
            output: dest,
        })
    }
}

/// Prepare and run the whole pipeline.
pub fn run(config: PipelineConfig) -> Result<RunReport> {
    Pipeline::prepare(config)?.run()
}
