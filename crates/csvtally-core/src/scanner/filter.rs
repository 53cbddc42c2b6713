/// Folder filter: the optional allow-set restricting which top-level
/// folders the collector walks.
///
/// The command-line argument is either a path to a text file (one folder
/// name per non-blank line) or an inline comma-separated list. Which one
/// is decided by whether the argument names an existing file.
use crate::error::{Result, TallyError};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderFilter {
    names: BTreeSet<String>,
}

impl FolderFilter {
    /// Resolve a raw filter argument.
    pub fn from_arg(arg: &str) -> Result<Self> {
        let path = Path::new(arg);
        if path.is_file() {
            debug!("Reading folder filter from file {}", path.display());
            Self::from_file(path)
        } else {
            Self::parse_inline(arg)
        }
    }

    /// Parse `"Alpha, Beta,Gamma"`. Entries are trimmed; empty ones dropped.
    pub fn parse_inline(list: &str) -> Result<Self> {
        Self::collect(list.split(','), list)
    }

    /// Read one folder name per line, skipping blank lines.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| TallyError::io(path, e))?;
        Self::collect(text.lines(), &path.display().to_string())
    }

    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        let desc = names
            .iter()
            .map(|n| n.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        Self::collect(names.iter().map(|n| n.as_ref()), &desc)
    }

    fn collect<'a>(parts: impl Iterator<Item = &'a str>, source_desc: &str) -> Result<Self> {
        let mut names = BTreeSet::new();
        for name in parts.map(str::trim).filter(|s| !s.is_empty()) {
            if !is_plain_folder_name(name) {
                return Err(TallyError::InvalidFilterName {
                    name: name.to_string(),
                });
            }
            names.insert(name.to_string());
        }
        if names.is_empty() {
            return Err(TallyError::EmptyFilter {
                source_desc: source_desc.to_string(),
            });
        }
        Ok(Self { names })
    }

    /// Folder names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// A filter entry must name one direct child of the root: no separators,
/// no `.`/`..`, no root or drive prefix.
fn is_plain_folder_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
