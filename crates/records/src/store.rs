//! The records store: listing and verbatim reads rooted at one directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::RecordsError;
use crate::guard;

/// Read-only access to a single records directory.
///
/// Holds nothing but the root path; every operation re-reads the filesystem,
/// so the directory may change freely between requests.
#[derive(Debug, Clone)]
pub struct RecordsStore {
    root: PathBuf,
}

impl RecordsStore {
    /// Create a store rooted at `root`. The directory is not required to
    /// exist yet; operations report `DirectoryUnavailable` when it does not.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured records directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filenames of the `.xml` documents directly in the root.
    ///
    /// Case-insensitive extension match, regular files only, no recursion.
    /// Order is whatever the directory enumeration yields. Entries whose
    /// names are not valid UTF-8 are skipped.
    pub fn list(&self) -> Result<Vec<String>, RecordsError> {
        let entries = fs::read_dir(&self.root)
            .map_err(|source| RecordsError::DirectoryUnavailable { source })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !name.to_ascii_lowercase().ends_with(".xml") {
                continue;
            }
            // follows symlinks, unlike DirEntry::file_type
            if entry.path().is_file() {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Resolve `name` through the path guard, yielding a validated path.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, RecordsError> {
        guard::resolve_within(&self.root, name)
    }

    /// Guarded verbatim read of a document's text content.
    pub fn read(&self, name: &str) -> Result<String, RecordsError> {
        let path = self.resolve(name)?;
        fs::read_to_string(path).map_err(|source| RecordsError::Read { source })
    }
}

/// Human-facing display name for a document filename: the `.xml` extension
/// stripped (case-insensitively) and underscores replaced by spaces.
pub fn display_name(filename: &str) -> String {
    let stem = filename
        .strip_suffix(".xml")
        .or_else(|| filename.strip_suffix(".XML"))
        .or_else(|| {
            let lower = filename.to_ascii_lowercase();
            lower
                .ends_with(".xml")
                .then(|| &filename[..filename.len() - 4])
        })
        .unwrap_or(filename);
    stem.replace('_', " ")
}
