//! C-CDA Records Directory Access
//!
//! This crate is the filesystem boundary of the records server. It owns three
//! concerns, all stateless reads over a single configured directory:
//!
//! - **Listing** - enumerate the `.xml` documents directly in the records
//!   directory (case-insensitive extension match, no recursion).
//! - **Guarding** - resolve a user-supplied filename against the directory
//!   root and reject anything that escapes it, via canonicalized paths rather
//!   than string containment.
//! - **Reading** - return a guarded document's content verbatim.
//!
//! The root path is passed in explicitly at construction so callers stay
//! testable without process environment setup.
//!
//! ## Example
//!
//! ```no_run
//! use records::RecordsStore;
//!
//! let store = RecordsStore::new("/app/medical-records");
//! for name in store.list()? {
//!     let content = store.read(&name)?;
//!     println!("{name}: {} bytes", content.len());
//! }
//! # Ok::<(), records::RecordsError>(())
//! ```

mod error;
mod guard;
mod store;

pub use crate::error::RecordsError;
pub use crate::store::{display_name, RecordsStore};
