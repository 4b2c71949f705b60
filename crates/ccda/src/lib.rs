//! C-CDA Display Metadata Extraction
//!
//! This crate pulls the two fields a document listing needs out of a C-CDA
//! (Consolidated Clinical Document Architecture) XML blob:
//!
//! - **Patient name** - `recordTarget → patientRole → patient → name`,
//!   given parts then family parts.
//! - **Most recent encounter date** - the largest `effectiveTime` across all
//!   encounter entries, falling back to the documented service event when a
//!   document carries no encounters.
//!
//! ## Failure model
//!
//! Extraction is **total**: [`extract_metadata`] never returns an error and
//! never panics. C-CDA exports in the wild are optional-field-heavy and often
//! truncated, so every lookup step degrades independently to a default
//! (`"Unknown Patient"` / `"Unknown Date"`) rather than failing the document.
//! Degrades are logged via `tracing` for diagnostics only.
//!
//! ## Example
//!
//! ```
//! let xml = r#"<ClinicalDocument xmlns="urn:hl7-org:v3">
//!   <recordTarget><patientRole><patient>
//!     <name><given>Jane</given><given>Q</given><family>Doe</family></name>
//!   </patient></patientRole></recordTarget>
//! </ClinicalDocument>"#;
//!
//! let meta = ccda::extract_metadata(xml);
//! assert_eq!(meta.patient_name, "Jane Q Doe");
//! assert_eq!(meta.date_formatted, "Unknown Date");
//! ```

use tracing::debug;

mod date;
mod encounter;
mod patient;
mod types;
mod xml;

pub use crate::types::DocumentMetadata;
pub use crate::xml::{parse_document, Element, XmlError};

/// Extract display metadata from raw C-CDA XML text.
///
/// Total function: unparseable or structurally surprising input yields the
/// defaults in [`DocumentMetadata`], never an error.
pub fn extract_metadata(xml: &str) -> DocumentMetadata {
    let root = match xml::parse_document(xml) {
        Ok(root) => root,
        Err(err) => {
            debug!(error = %err, "unparseable document, using default metadata");
            return DocumentMetadata::default();
        }
    };

    let mut meta = DocumentMetadata::default();

    if let Some(name) = patient::patient_name(&root) {
        meta.patient_name = name;
    } else {
        debug!("no resolvable patient name");
    }

    if let Some(ts) = encounter::latest_encounter_timestamp(&root) {
        match date::format_timestamp(&ts) {
            Some(formatted) => {
                meta.encounter_date = Some(formatted.iso);
                meta.date_formatted = formatted.long;
            }
            None => debug!(timestamp = %ts, "encounter timestamp is not a valid calendar date"),
        }
    } else {
        debug!("no resolvable encounter timestamp");
    }

    meta
}
