//! Output type for metadata extraction.

use serde::{Deserialize, Serialize};

/// Display metadata derived from a single C-CDA document.
///
/// Derived, never stored: the caller recomputes this on every listing. The
/// defaults are the user-facing placeholders shown when a field cannot be
/// resolved from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Patient display name, `"Unknown Patient"` when unresolvable.
    pub patient_name: String,

    /// Most recent encounter date in ISO `YYYY-MM-DD` form, absent when
    /// unresolvable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter_date: Option<String>,

    /// Long-form English rendering of the encounter date
    /// (e.g. `"June 15, 2023"`), `"Unknown Date"` when unresolvable.
    pub date_formatted: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            patient_name: "Unknown Patient".to_string(),
            encounter_date: None,
            date_formatted: "Unknown Date".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_placeholders() {
        let meta = DocumentMetadata::default();
        assert_eq!(meta.patient_name, "Unknown Patient");
        assert!(meta.encounter_date.is_none());
        assert_eq!(meta.date_formatted, "Unknown Date");
    }

    #[test]
    fn absent_date_is_skipped_in_json() {
        let json = serde_json::to_value(DocumentMetadata::default()).unwrap();
        assert!(json.get("encounter_date").is_none());
        assert_eq!(json["date_formatted"], "Unknown Date");
    }
}
