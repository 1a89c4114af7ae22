//! XML serialization of the generic element tree.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Result, SdfError};
use crate::tree::Element;

/// Serialize an element tree as an indented XML document string.
///
/// Elements with no children and no text serialize as self-closing tags.
/// Output is deterministic: the same tree always produces the same bytes.
///
/// # Errors
///
/// Returns `SdfError::XmlWrite` if serialization fails.
pub fn write_document(root: &Element) -> Result<String> {
    let mut buffer = Vec::new();
    let mut writer = Writer::new_with_indent(Cursor::new(&mut buffer), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", None, None)))
        .map_err(|e| SdfError::XmlWrite(e.to_string()))?;

    write_element(&mut writer, root)?;

    String::from_utf8(buffer).map_err(|e| SdfError::XmlWrite(format!("UTF-8 error: {e}")))
}

/// Write one element and its subtree.
fn write_element(writer: &mut Writer<Cursor<&mut Vec<u8>>>, elem: &Element) -> Result<()> {
    let mut start = BytesStart::new(elem.name.as_str());
    for (name, value) in &elem.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if elem.children.is_empty() && elem.text.is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| SdfError::XmlWrite(e.to_string()))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| SdfError::XmlWrite(e.to_string()))?;

    if !elem.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&elem.text)))
            .map_err(|e| SdfError::XmlWrite(e.to_string()))?;
    }

    for child in &elem.children {
        write_element(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(elem.name.as_str())))
        .map_err(|e| SdfError::XmlWrite(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_write_self_closing_when_empty() {
        let robot = Element::new("robot").with_attr("name", "arm");
        let xml = write_document(&robot).expect("should write");
        assert!(xml.contains(r#"<robot name="arm"/>"#));
    }

    #[test]
    fn test_write_nested_structure() {
        let robot = Element::new("robot").with_attr("name", "arm").with_child(
            Element::new("link")
                .with_attr("name", "base")
                .with_child(Element::new("origin").with_attr("xyz", "0 0 1")),
        );

        let xml = write_document(&robot).expect("should write");
        assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
        assert!(xml.contains(r#"<robot name="arm">"#));
        assert!(xml.contains(r#"<link name="base">"#));
        assert!(xml.contains(r#"<origin xyz="0 0 1"/>"#));
        assert!(xml.contains("</robot>"));
    }

    #[test]
    fn test_write_escapes_attribute_values() {
        let e = Element::new("mesh").with_attr("filename", "a<b&c");
        let xml = write_document(&e).expect("should write");
        assert!(xml.contains("a&lt;b&amp;c"));
    }

    #[test]
    fn test_write_is_deterministic() {
        let e = Element::new("robot")
            .with_attr("name", "r")
            .with_child(Element::new("link").with_attr("name", "a"))
            .with_child(Element::new("link").with_attr("name", "b"));
        let first = write_document(&e).expect("should write");
        let second = write_document(&e).expect("should write");
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_then_parse_round_trip() {
        let original = Element::new("robot")
            .with_attr("name", "arm")
            .with_child(Element::new("joint").with_attr("name", "j1").with_child(
                Element::new("limit").with_attr("lower", "-1.5").with_attr("upper", "1.5"),
            ));

        let xml = write_document(&original).expect("should write");
        let reparsed = parse_document(&xml).expect("should parse back");
        assert_eq!(reparsed, original);
    }
}
