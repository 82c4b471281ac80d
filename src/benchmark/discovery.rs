//! Dataset discovery

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::models::Dataset;

/// List the dataset files directly inside `dir` whose extension is
/// `extension`.
///
/// Hidden files (names starting with `.`) are skipped. The order is
/// whatever the directory listing yields; it is not sorted. A directory
/// that cannot be read counts as empty.
pub fn discover(dir: &Path, extension: &str) -> Vec<Dataset> {
    let mut datasets = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Failed to list dataset directory");
                continue;
            }
        };

        if !entry.file_type().is_file() || is_hidden(&entry) {
            continue;
        }

        let matches = entry
            .path()
            .extension()
            .is_some_and(|ext| ext == extension);
        if matches {
            datasets.push(Dataset::new(entry.into_path()));
        }
    }

    tracing::debug!(dir = %dir.display(), count = datasets.len(), "Discovered datasets");
    datasets
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
