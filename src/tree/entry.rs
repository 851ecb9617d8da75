//! Directory listing and entry classification

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// What a directory entry turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// Stat a path, following symlinks. A broken link is an error.
pub fn classify(path: &Path) -> Result<EntryKind> {
    let metadata = fs::metadata(path).map_err(|source| Error::Classify {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(if metadata.is_dir() {
        EntryKind::Dir
    } else {
        EntryKind::File
    })
}

/// Read a directory's entry names, sorted. Names are returned as the OS
/// gave them, so they join back into paths that exist.
pub fn list_entries(path: &Path) -> io::Result<Vec<OsString>> {
    let mut names = fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
