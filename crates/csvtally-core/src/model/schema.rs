/// Output schema: the fixed, ordered column list every merged dataset is
/// projected onto, plus the key column used for deduplication.

/// Canonical column order of the exported problem lists.
pub const DEFAULT_COLUMNS: [&str; 6] = [
    "Difficulty",
    "Title",
    "Frequency",
    "Acceptance Rate",
    "Link",
    "Topics",
];

/// Column that identifies a row for deduplication.
pub const DEFAULT_KEY: &str = "Title";

/// Column appended by the ranker holding the occurrence count.
pub const COUNT_COLUMN: &str = "count";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    key: String,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            key: DEFAULT_KEY.to_string(),
        }
    }
}

impl Schema {
    /// Build a schema from an explicit column list and key.
    ///
    /// The key is not required to be one of `columns`: a schema without its
    /// key is allowed to exist, and is rejected later by the ranker when the
    /// merged data turns out to lack the column.
    pub fn new<I, S>(columns: I, key: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            key: key.into(),
        }
    }

    /// Replace the key column, keeping the column list.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Position of the key in the column list, if present.
    pub fn key_index(&self) -> Option<usize> {
        self.columns.iter().position(|c| *c == self.key)
    }
}
