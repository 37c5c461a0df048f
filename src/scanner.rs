use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{CompressionError, Result};
use clap::ValueEnum;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Order in which candidates are processed and numbered in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScanOrder {
    /// Sorted by file name, stable across runs
    #[default]
    Name,
    /// Whatever order the directory listing returns
    Listing,
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Collects the regular files directly inside `source` that carry a
/// recognized image extension.
///
/// # Arguments
/// * `source` - Folder to scan; subfolders are not descended into
/// * `order` - Ordering of the returned paths
///
/// # Returns
/// * `Ok(paths)` - Canonical paths of the candidates, possibly empty
/// * `Err(CompressionError::SourceNotDirectory)` - If `source` is missing or not a folder
pub fn collect_image_files(source: &Path, order: ScanOrder) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        return Err(CompressionError::SourceNotDirectory(source.to_path_buf()));
    }
    let canonical_source = source.canonicalize()?;

    let mut walker = WalkDir::new(&canonical_source).min_depth(1).max_depth(1);
    if order == ScanOrder::Name {
        walker = walker.sort_by_file_name();
    }

    let mut image_files = Vec::new();
    for entry in walker {
        let entry = entry?;
        // Symlinks are not followed; a dangling link must not abort the scan.
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            image_files.push(entry.into_path());
        } else {
            debug!("Skipping {:?}", entry.path());
        }
    }

    Ok(image_files)
}
