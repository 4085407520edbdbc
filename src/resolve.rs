use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{ExobrainError, Result};

/// Resolve a note name to a file under `root`.
///
/// The walk is depth-first and top-down. Inside each directory the files are
/// examined (in name order) before any subdirectory is entered, so a file
/// named exactly `name` returns as soon as its directory is reached. Failing
/// that, the first file whose name contains `name` is returned.
pub fn resolve_note(root: &Path, name: &str) -> Result<PathBuf> {
    let mut partial: Option<PathBuf> = None;

    let walker = WalkDir::new(root).min_depth(1).sort_by(files_first);
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !is_note_file(&entry) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name == name {
            log::debug!("exact match {}", entry.path().display());
            return Ok(entry.into_path());
        }
        if partial.is_none() && file_name.contains(name) {
            log::debug!("partial match {}", entry.path().display());
            partial = Some(entry.into_path());
        }
    }

    partial.ok_or_else(|| ExobrainError::NoteNotFound {
        name: name.to_string(),
    })
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir.cmp(&b_dir).then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_note_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    // Links to directories are neither walked nor treated as notes.
    !(file_type.is_symlink() && entry.path().is_dir())
}
