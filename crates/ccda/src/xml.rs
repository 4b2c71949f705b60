//! Minimal element tree over `quick-xml` events.
//!
//! C-CDA metadata lookup is a handful of nested descents through
//! optional-field-heavy XML, which reads far better against a tree than
//! against a raw event stream. This module folds the event stream into
//! [`Element`] nodes and exposes `Option`-returning lookups so traversal
//! composes as chains of fallible steps with first-success-wins fallbacks.
//!
//! Names are matched by **local name**: C-CDA documents carry the
//! `urn:hl7-org:v3` namespace with varying prefixes, and display extraction
//! has no reason to care which prefix an export chose.

use thiserror::Error;

/// Errors from parsing a document into an element tree.
///
/// Callers of [`crate::extract_metadata`] never see these; they exist for the
/// parse boundary and for tests.
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("malformed xml: {0}")]
    Malformed(#[from] quick_xml::Error),

    #[error("document has no root element")]
    NoRootElement,
}

/// A parsed XML element: local name, attributes, direct text, child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Local (prefix-stripped) element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given local name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Attribute value by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed direct text content, `None` when empty.
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

fn local_name(qname: &[u8]) -> String {
    let start = qname
        .iter()
        .rposition(|&b| b == b':')
        .map(|i| i + 1)
        .unwrap_or(0);
    String::from_utf8_lossy(&qname[start..]).into_owned()
}

fn element_from_start(start: &quick_xml::events::BytesStart<'_>) -> Element {
    let mut attributes = Vec::new();
    for attr in start.attributes().flatten() {
        let key = local_name(attr.key.as_ref());
        let value = match attr.unescape_value() {
            Ok(v) => v.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        };
        attributes.push((key, value));
    }
    Element {
        name: local_name(start.name().as_ref()),
        attributes,
        ..Element::default()
    }
}

/// Parse raw XML text into its root [`Element`].
pub fn parse_document(xml: &str) -> Result<Element, XmlError> {
    use quick_xml::events::Event;

    let mut reader = quick_xml::Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(element_from_start(&start)),
            Event::Empty(start) => {
                let element = element_from_start(&start);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None if root.is_none() => root = Some(element),
                    None => {}
                }
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    match text.unescape() {
                        Ok(t) => current.text.push_str(&t),
                        Err(_) => current.text.push_str(&String::from_utf8_lossy(&text)),
                    }
                }
            }
            Event::CData(cdata) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&cdata));
                }
            }
            Event::End(_) => {
                // quick-xml checks end-name balance; a pop here always pairs
                // with the matching Start.
                if let Some(done) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(done),
                        None if root.is_none() => root = Some(done),
                        None => {}
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    root.ok_or(XmlError::NoRootElement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_and_attributes() {
        let root = parse_document(
            r#"<a x="1"><b><c y="2">hello</c></b><b>second</b></a>"#,
        )
        .unwrap();

        assert_eq!(root.name(), "a");
        assert_eq!(root.attr("x"), Some("1"));
        assert_eq!(root.children("b").count(), 2);

        let c = root.child("b").unwrap().child("c").unwrap();
        assert_eq!(c.attr("y"), Some("2"));
        assert_eq!(c.text(), Some("hello"));
    }

    #[test]
    fn strips_namespace_prefixes() {
        let root = parse_document(
            r#"<hl7:ClinicalDocument xmlns:hl7="urn:hl7-org:v3">
                 <hl7:recordTarget hl7:contextControlCode="OP"/>
               </hl7:ClinicalDocument>"#,
        )
        .unwrap();

        assert_eq!(root.name(), "ClinicalDocument");
        let target = root.child("recordTarget").unwrap();
        assert_eq!(target.attr("contextControlCode"), Some("OP"));
    }

    #[test]
    fn self_closing_elements_become_children() {
        let root = parse_document(r#"<a><low value="20230101"/></a>"#).unwrap();
        assert_eq!(root.child("low").unwrap().attr("value"), Some("20230101"));
    }

    #[test]
    fn truncated_document_is_an_error() {
        assert!(parse_document("<a><b>unclosed").is_err());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_document(""), Err(XmlError::NoRootElement)));
    }

    #[test]
    fn whitespace_only_text_is_none() {
        let root = parse_document("<a>\n   \n</a>").unwrap();
        assert_eq!(root.text(), None);
    }
}
