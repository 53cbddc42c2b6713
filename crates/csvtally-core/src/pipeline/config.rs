/// Pipeline configuration.
///
/// Built by the CLI from its arguments; every field has a default so a
/// caller only sets what it needs to override.
use crate::model::{OutputNaming, Schema};
use crate::scanner::FolderFilter;
use std::path::{Path, PathBuf};

/// Output folder used when no filter is given.
pub const DEFAULT_OUTPUT_DIR: &str = "master_folder";

/// Output folder used when a folder filter is given.
pub const FILTERED_OUTPUT_DIR: &str = "filtered_folder";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory the collector walks. Threaded explicitly; the process
    /// working directory is never changed.
    pub root: PathBuf,
    pub filter: Option<FolderFilter>,
    /// Explicit destination. When `None`, see [`PipelineConfig::output_dir_under`].
    pub output_dir: Option<PathBuf>,
    pub naming: OutputNaming,
    pub schema: Schema,
}

impl PipelineConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            filter: None,
            output_dir: None,
            naming: OutputNaming::default(),
            schema: Schema::default(),
        }
    }

    pub fn with_filter(mut self, filter: Option<FolderFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_naming(mut self, naming: OutputNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Destination folder given the resolved root: the explicit directory if
    /// set, otherwise `master_folder` or `filtered_folder` inside `root`.
    pub fn output_dir_under(&self, root: &Path) -> PathBuf {
        match (&self.output_dir, &self.filter) {
            (Some(dir), _) => dir.clone(),
            (None, Some(_)) => root.join(FILTERED_OUTPUT_DIR),
            (None, None) => root.join(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PipelineConfig::new("data");
        assert_eq!(c.naming, OutputNaming::Final);
        assert_eq!(c.schema, Schema::default());
        assert!(c.filter.is_none());
    }

    #[test]
    fn output_dir_depends_on_filter() {
        let root = Path::new("/data");
        let plain = PipelineConfig::new(root);
        assert_eq!(plain.output_dir_under(root), root.join("master_folder"));

        let filtered =
            PipelineConfig::new(root).with_filter(Some(FolderFilter::parse_inline("Alpha").unwrap()));
        assert_eq!(filtered.output_dir_under(root), root.join("filtered_folder"));
    }

    #[test]
    fn explicit_output_dir_wins() {
        let root = Path::new("/data");
        let c = PipelineConfig::new(root)
            .with_filter(Some(FolderFilter::parse_inline("Alpha").unwrap()))
            .with_output_dir(Some(PathBuf::from("/reports")));
        assert_eq!(c.output_dir_under(root), PathBuf::from("/reports"));
    }
}
