//! One-level directory scanning and filtering.
//!
//! All checks here are read-only, so many can be in flight at once.
//! Existence checks swallow errors: a permission-denied path reads the
//! same as an absent one.

use std::path::{Path, PathBuf};

use futures::future::join_all;

use crate::error::WeaveError;

/// File extensions recognized as image frames, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpeg", "jpg", "exr", "tif", "tiff"];

/// List the entries of a directory, one level deep, as full paths.
///
/// Entries come back in filesystem order, not sorted.
pub async fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, WeaveError> {
    let scan_err = |source| WeaveError::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut read_dir = tokio::fs::read_dir(dir).await.map_err(scan_err)?;
    let mut entries = Vec::new();
    while let Some(entry) = read_dir.next_entry().await.map_err(scan_err)? {
        entries.push(entry.path());
    }
    Ok(entries)
}

/// True only if the path exists and is a directory.
///
/// Any stat failure resolves to false.
pub async fn is_directory(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// Keep only the paths that are directories, preserving order.
///
/// The checks are independent and run concurrently.
pub async fn filter_directories(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let checks = join_all(paths.iter().map(|path| is_directory(path))).await;
    paths
        .into_iter()
        .zip(checks)
        .filter_map(|(path, is_dir)| is_dir.then_some(path))
        .collect()
}

/// Keep only the paths whose lowercase extension is in `extensions`.
pub fn filter_by_extension(paths: Vec<PathBuf>, extensions: &[&str]) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|path| {
            path.extension()
                .map(|ext| ext.to_string_lossy().to_lowercase())
                .is_some_and(|ext| extensions.contains(&ext.as_str()))
        })
        .collect()
}
