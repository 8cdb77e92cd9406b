//! Directory reading for `colorls`.
//!
//! Lists exactly one level of a directory with `WalkDir` and resolves each
//! entry's type once, without following symlinks. Entries keep the order the
//! filesystem returned them in.

use crate::data::{Entry, EntryType};
use crate::error::{Error, Result};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Reads the immediate children of `root`.
///
/// # Errors
/// Returns an error if:
/// - `root` does not exist or cannot be stat'ed
/// - `root` is not a directory
/// - the directory or one of its entries cannot be read
pub fn read_entries(root: &Path) -> Result<Vec<Entry>> {
    let metadata = std::fs::metadata(root).map_err(|source| Error::Filesystem {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .map(|entry| {
            let entry = entry.map_err(|e| Error::Filesystem {
                path: e.path().unwrap_or(root).to_path_buf(),
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop detected")),
            })?;
            let entry_type = if entry.file_type().is_dir() {
                EntryType::Dir
            } else {
                EntryType::File
            };
            Ok(Entry::new(
                entry.file_name().to_string_lossy().into_owned(),
                entry_type,
            ))
        })
        .collect()
}
