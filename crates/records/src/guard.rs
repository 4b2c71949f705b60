//! Path guard: confines requested filenames to the records directory.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::error::RecordsError;

/// Resolve `name` (already percent-decoded) under `root` and verify the
/// result cannot escape it.
///
/// Two-stage check:
///
/// 1. Lexical: walk the requested path's components against the
///    canonicalized root. Absolute paths and any `..` that would climb above
///    the root are rejected before touching the filesystem.
/// 2. Physical: canonicalize the candidate and require it still starts with
///    the canonical root, so a symlink inside the directory cannot point the
///    read elsewhere.
///
/// A candidate inside the root that does not exist (or is not a regular
/// file) is `NotFound`; escapes are `AccessDenied`.
pub(crate) fn resolve_within(root: &Path, name: &str) -> Result<PathBuf, RecordsError> {
    let canonical_root = fs::canonicalize(root)
        .map_err(|source| RecordsError::DirectoryUnavailable { source })?;

    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() {
                    warn!(name, "rejected path climbing above records directory");
                    return Err(RecordsError::AccessDenied);
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                warn!(name, "rejected absolute path");
                return Err(RecordsError::AccessDenied);
            }
        }
    }
    if parts.is_empty() {
        return Err(RecordsError::NotFound);
    }

    let mut candidate = canonical_root.clone();
    candidate.extend(parts);

    let canonical = match fs::canonicalize(&candidate) {
        Ok(path) => path,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(RecordsError::NotFound);
        }
        Err(source) => return Err(RecordsError::Read { source }),
    };

    if !canonical.starts_with(&canonical_root) {
        warn!(name, "rejected symlink escaping records directory");
        return Err(RecordsError::AccessDenied);
    }
    if !canonical.is_file() {
        return Err(RecordsError::NotFound);
    }

    Ok(canonical)
}
