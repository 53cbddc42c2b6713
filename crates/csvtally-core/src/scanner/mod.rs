/// Scanner module: the collector.
///
/// Finds every file whose name equals a pattern's literal filename, by
/// recursive traversal from an explicit root. When a [`FolderFilter`] is
/// supplied only the subtrees of the named top-level folders are walked.
///
/// Results are always returned in sorted path order so that merge order,
/// and therefore the ranked output, is reproducible across runs.
pub mod filter;

pub use filter::FolderFilter;

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of one collection pass.
#[derive(Debug, Default, Clone)]
pub struct Collected {
    /// Matching files in sorted order, without duplicates.
    pub files: Vec<PathBuf>,
    /// Directory entries that could not be read during the walk.
    pub walk_errors: u64,
}

/// Collect all files named `file_name` below `root`.
///
/// Files inside hidden directories (name starting with `.`) below the walked
/// folder are skipped. Paths under any entry of `exclude` are never
/// returned. Exclusions are
/// compared with `Path::starts_with`, so they must be spelled in the same
/// form as `root` (both canonical, or both relative to the same base).
///
/// An empty result is not an error.
pub fn collect_matches(
    root: &Path,
    file_name: &str,
    filter: Option<&FolderFilter>,
    exclude: &[PathBuf],
) -> Collected {
    let mut collected = Collected::default();

    match filter {
        Some(filter) => {
            for name in filter.names() {
                let dir = root.join(name);
                if !dir.is_dir() {
                    warn!("Filter folder '{}' not found under {}", name, root.display());
                    continue;
                }
                walk_into(&dir, file_name, exclude, &mut collected);
            }
        }
        None => walk_into(root, file_name, exclude, &mut collected),
    }

    collected.files.sort();
    collected.files.dedup();
    debug!(
        "Collected {} file(s) named '{}' ({} walk errors)",
        collected.files.len(),
        file_name,
        collected.walk_errors
    );
    collected
}

/// Walk one subtree sequentially, appending matches to `out`.
fn walk_into(dir: &Path, file_name: &str, exclude: &[PathBuf], out: &mut Collected) {
    let walker = jwalk::WalkDir::new(dir)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                out.walk_errors += 1;
                let err_path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!("Cannot read '{}': {}", err_path, err);
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.file_name() != file_name {
            continue;
        }

        let path = entry.path();
        if in_hidden_dir(&path, dir) {
            debug!("Skipping hidden match {}", path.display());
            continue;
        }
        if exclude.iter().any(|ex| path.starts_with(ex)) {
            debug!("Skipping excluded match {}", path.display());
            continue;
        }
        out.files.push(path);
    }
}

/// True when a directory between `base` and `path` has a dot-name.
fn in_hidden_dir(path: &Path, base: &Path) -> bool {
    let Ok(rel) = path.strip_prefix(base) else {
        return false;
    };
    rel.parent()
        .map(|dirs| {
            dirs.components()
                .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "Title\n").unwrap();
    }

    const NAME: &str = "5. All.csv";

    #[test]
    fn finds_nested_matches_in_sorted_order() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("Zeta").join(NAME));
        touch(&root.join("Alpha").join("deep").join(NAME));
        touch(&root.join("Alpha").join(NAME));
        touch(&root.join("Alpha").join("other.csv"));

        let found = collect_matches(root, NAME, None, &[]);
        assert_eq!(
            found.files,
            vec![
                root.join("Alpha").join(NAME),
                root.join("Alpha").join("deep").join(NAME),
                root.join("Zeta").join(NAME),
            ]
        );
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a").join("unrelated.csv"));
        let found = collect_matches(tmp.path(), NAME, None, &[]);
        assert!(found.files.is_empty());
        assert_eq!(found.walk_errors, 0);
    }

    /// A directory that happens to carry the pattern's name is not a match.
    #[test]
    fn directories_named_like_pattern_are_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(NAME)).unwrap();
        let found = collect_matches(tmp.path(), NAME, None, &[]);
        assert!(found.files.is_empty());
    }

    #[test]
    fn filter_restricts_to_named_folders() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("Alpha").join(NAME));
        touch(&root.join("Beta").join(NAME));
        touch(&root.join("Gamma").join("x").join(NAME));

        let filter = FolderFilter::from_names(["Gamma", "Alpha"]).unwrap();
        let found = collect_matches(root, NAME, Some(&filter), &[]);
        assert_eq!(
            found.files,
            vec![
                root.join("Alpha").join(NAME),
                root.join("Gamma").join("x").join(NAME),
            ]
        );
    }

    #[test]
    fn missing_filter_folder_is_skipped() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("Alpha").join(NAME));
        let filter = FolderFilter::from_names(["Alpha", "Nope"]).unwrap();
        let found = collect_matches(tmp.path(), NAME, Some(&filter), &[]);
        assert_eq!(found.files.len(), 1);
    }

    #[test]
    fn hidden_directories_are_skipped() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join(".cache").join(NAME));
        touch(&root.join("Alpha").join(".git").join("x").join(NAME));
        touch(&root.join("Alpha").join(NAME));

        let found = collect_matches(root, NAME, None, &[]);
        assert_eq!(found.files, vec![root.join("Alpha").join(NAME)]);
    }

    /// A hidden folder named explicitly in the filter is walked.
    #[test]
    fn filtered_hidden_folder_is_walked() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join(".staging").join(NAME));
        let filter = FolderFilter::from_names([".staging"]).unwrap();
        let found = collect_matches(tmp.path(), NAME, Some(&filter), &[]);
        assert_eq!(found.files.len(), 1);
    }

    #[test]
    fn excluded_subtree_is_not_returned() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("Alpha").join(NAME));
        touch(&root.join("master_folder").join(NAME));

        let found = collect_matches(root, NAME, None, &[root.join("master_folder")]);
        assert_eq!(found.files, vec![root.join("Alpha").join(NAME)]);
    }
}
