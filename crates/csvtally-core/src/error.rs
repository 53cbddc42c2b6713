/// Error types for the csvtally pipeline.
///
/// Only conditions that abort a run are represented here. Per-file read
/// failures during merging are logged and counted instead of returned.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TallyError>;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The merged intermediate has no key column, so deduplication would be
    /// meaningless. Non-recoverable.
    #[error("'{key}' column missing in '{}'", path.display())]
    MissingKeyColumn { key: String, path: PathBuf },

    /// A source file's header has no key column. Merging it would collapse
    /// all of its rows under an empty key. Non-recoverable.
    #[error("'{key}' column missing in source '{}'", path.display())]
    SourceMissingKey { key: String, path: PathBuf },

    #[error("folder filter '{source_desc}' contains no folder names")]
    EmptyFilter { source_desc: String },

    #[error("folder filter entry '{name}' is not a single folder name")]
    InvalidFilterName { name: String },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Writing into the root or one of its ancestors would hide every source
    /// from the collector.
    #[error("output folder '{}' contains the scanned root '{}'", output.display(), root.display())]
    OutputContainsRoot { output: PathBuf, root: PathBuf },
}

impl TallyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// True when a source or the merged intermediate lacks the key column.
    pub fn is_missing_key(&self) -> bool {
        matches!(
            self,
            Self::MissingKeyColumn { .. } | Self::SourceMissingKey { .. }
        )
    }
}
