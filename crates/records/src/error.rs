//! Error surface for records directory access.
//!
//! `AccessDenied` and `NotFound` are deliberately distinct variants: an
//! out-of-bounds request must not learn whether its target exists.

use thiserror::Error;

/// Errors from listing, guarding, or reading records.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RecordsError {
    /// The records directory itself is missing or unreadable.
    #[error("records directory unavailable: {source}")]
    DirectoryUnavailable {
        #[source]
        source: std::io::Error,
    },

    /// The requested name resolves outside the records directory.
    #[error("access denied")]
    AccessDenied,

    /// The resolved path is inside the directory but does not exist.
    #[error("file not found")]
    NotFound,

    /// I/O failure while reading an already-guarded file.
    #[error("failed to read file: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}
