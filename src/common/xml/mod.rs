//! Shared helpers for the serde-driven XML object graph.
//!
//! Parts are modelled as plain structs whose field names carry the element
//! and attribute names (`@` prefix for attributes, `$text` for character
//! data). `quick-xml`'s serializer turns them into markup.

use serde::Serialize;

/// Declaration emitted at the top of every generated XML part.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// An element with no attributes and no children, such as `<w:b/>`.
///
/// Used as `Option<Empty>` wherever the schema expresses a property by the
/// mere presence of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Empty;

impl Empty {
    /// Presence flag: `Some(Empty)` when `present` is true.
    #[inline]
    pub fn when(present: bool) -> Option<Empty> {
        present.then_some(Empty)
    }
}

/// Serialize a root element to a complete XML document string.
///
/// The root element name comes from the value's serde name, so root types
/// carry `#[serde(rename = "...")]`. Errors are returned as plain messages;
/// callers attach the part name.
pub fn to_xml_document<T: Serialize>(root: &T) -> std::result::Result<String, String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    quick_xml::se::to_writer(&mut xml, root).map_err(|e| e.to_string())?;
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename = "w:rPr")]
    struct Props {
        #[serde(rename = "w:b", skip_serializing_if = "Option::is_none")]
        bold: Option<Empty>,
        #[serde(rename = "w:i", skip_serializing_if = "Option::is_none")]
        italic: Option<Empty>,
    }

    #[test]
    fn test_presence_flag() {
        assert_eq!(Empty::when(true), Some(Empty));
        assert_eq!(Empty::when(false), None);
    }

    #[test]
    fn test_empty_markers_serialize_as_self_closing_elements() {
        let xml = to_xml_document(&Props {
            bold: Empty::when(true),
            italic: Empty::when(false),
        })
        .unwrap();

        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("<w:b/>"));
        assert!(!xml.contains("<w:i"));
    }
}
