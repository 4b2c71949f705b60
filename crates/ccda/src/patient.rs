//! Patient display name lookup.

use crate::xml::Element;

/// Resolve the patient display name from the document root.
///
/// Descends `ClinicalDocument → recordTarget → patientRole → patient → name`
/// (first `name` when a patient carries several) and joins all `given` parts
/// followed by all `family` parts, space-separated, in document order. Returns
/// `None` when the path is absent or the assembled name is empty.
pub(crate) fn patient_name(root: &Element) -> Option<String> {
    let name = root
        .child("recordTarget")?
        .child("patientRole")?
        .child("patient")?
        .child("name")?;

    let mut parts: Vec<&str> = Vec::new();
    for given in name.children("given") {
        if let Some(text) = given.text() {
            parts.push(text);
        }
    }
    for family in name.children("family") {
        if let Some(text) = family.text() {
            parts.push(text);
        }
    }

    let joined = parts.join(" ");
    (!joined.is_empty()).then_some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    fn doc(body: &str) -> Element {
        parse_document(&format!(
            r#"<ClinicalDocument xmlns="urn:hl7-org:v3">{body}</ClinicalDocument>"#
        ))
        .unwrap()
    }

    fn patient(name_xml: &str) -> Element {
        doc(&format!(
            "<recordTarget><patientRole><patient>{name_xml}</patient></patientRole></recordTarget>"
        ))
    }

    #[test]
    fn given_parts_then_family() {
        let root = patient("<name><given>Jane</given><given>Q</given><family>Doe</family></name>");
        assert_eq!(patient_name(&root).as_deref(), Some("Jane Q Doe"));
    }

    #[test]
    fn family_only() {
        let root = patient("<name><family>Doe</family></name>");
        assert_eq!(patient_name(&root).as_deref(), Some("Doe"));
    }

    #[test]
    fn given_only() {
        let root = patient("<name><given>Jane</given></name>");
        assert_eq!(patient_name(&root).as_deref(), Some("Jane"));
    }

    #[test]
    fn first_of_multiple_names_wins() {
        let root = patient(
            "<name><given>Legal</given><family>Name</family></name>\
             <name><given>Alias</given></name>",
        );
        assert_eq!(patient_name(&root).as_deref(), Some("Legal Name"));
    }

    #[test]
    fn missing_name_is_none() {
        let root = patient("");
        assert_eq!(patient_name(&root), None);
    }

    #[test]
    fn missing_record_target_is_none() {
        let root = doc("");
        assert_eq!(patient_name(&root), None);
    }

    #[test]
    fn empty_parts_yield_none() {
        let root = patient("<name><given/><family></family></name>");
        assert_eq!(patient_name(&root), None);
    }
}
