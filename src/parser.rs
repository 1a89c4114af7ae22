//! XML parsing into the generic element tree.
//!
//! A single event loop over quick-xml builds the whole document tree up
//! front; the converter then works on the in-memory tree only.

use quick_xml::events::attributes::Attributes;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Result, SdfError};
use crate::tree::Element;

/// Parse an XML string into its root element.
///
/// # Errors
///
/// Returns `SdfError::XmlParse` if the XML is malformed or the document has
/// no root element.
pub fn parse_document(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // Open elements, innermost last.
    let mut stack: Vec<Element> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let mut elem = Element::new(name);
                read_attributes(e.attributes(), &mut elem)?;
                stack.push(elem);
            }
            Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let mut elem = Element::new(name);
                read_attributes(e.attributes(), &mut elem)?;
                match stack.last_mut() {
                    Some(parent) => parent.push(elem),
                    // Self-closing root element.
                    None => return Ok(elem),
                }
            }
            Ok(Event::Text(ref t)) => {
                if let Some(top) = stack.last_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| SdfError::XmlParse(e.to_string()))?;
                    top.text.push_str(&text);
                }
            }
            Ok(Event::CData(ref t)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(t));
                }
            }
            Ok(Event::End(_)) => {
                let elem = stack
                    .pop()
                    .ok_or_else(|| SdfError::XmlParse("unmatched closing tag".into()))?;
                match stack.last_mut() {
                    Some(parent) => parent.push(elem),
                    // Root element closed; ignore anything after it.
                    None => return Ok(elem),
                }
            }
            Ok(Event::Eof) => break,
            // Declaration, comments, processing instructions, doctype.
            Ok(_) => {}
            Err(e) => return Err(SdfError::XmlParse(e.to_string())),
        }
        buf.clear();
    }

    Err(SdfError::XmlParse(match stack.last() {
        Some(open) => format!("unexpected EOF in <{}>", open.name),
        None => "no root element".into(),
    }))
}

/// Copy the attributes of a start tag onto an element, in document order.
fn read_attributes(attrs: Attributes, elem: &mut Element) -> Result<()> {
    for attr in attrs {
        let attr = attr.map_err(|e| SdfError::XmlParse(e.to_string()))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| SdfError::XmlParse(e.to_string()))?;
        elem.set_attr(name, value.to_string());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let xml = r#"
            <sdf version="1.4">
                <model name="arm">
                    <link name="base">
                        <pose>0 0 1 0 0 0</pose>
                    </link>
                </model>
            </sdf>
        "#;

        let doc = parse_document(xml).expect("should parse");
        assert_eq!(doc.name, "sdf");
        assert_eq!(doc.attr("version"), Some("1.4"));

        let model = doc.child("model").expect("model");
        assert_eq!(model.attr("name"), Some("arm"));

        let pose = model.resolve("link/pose").expect("pose");
        assert_eq!(pose.text, "0 0 1 0 0 0");
    }

    #[test]
    fn test_parse_self_closing_root() {
        let doc = parse_document(r#"<sdf version="1.5"/>"#).expect("should parse");
        assert_eq!(doc.name, "sdf");
        assert!(doc.children.is_empty());
    }

    #[test]
    fn test_parse_preserves_child_order() {
        let xml = "<model><joint/><link/><joint/></model>";
        let doc = parse_document(xml).expect("should parse");
        let names: Vec<&str> = doc.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["joint", "link", "joint"]);
    }

    #[test]
    fn test_parse_unescapes_text_and_attrs() {
        let xml = r#"<m name="a&amp;b"><uri>model://x&lt;y.stl</uri></m>"#;
        let doc = parse_document(xml).expect("should parse");
        assert_eq!(doc.attr("name"), Some("a&b"));
        assert_eq!(doc.child("uri").unwrap().text, "model://x<y.stl");
    }

    #[test]
    fn test_parse_skips_declaration_and_comments() {
        let xml = "<?xml version=\"1.0\"?><!-- robot --><sdf><model name=\"m\"/></sdf>";
        let doc = parse_document(xml).expect("should parse");
        assert_eq!(doc.name, "sdf");
        assert!(doc.child("model").is_some());
    }

    #[test]
    fn test_parse_empty_document() {
        let result = parse_document("");
        assert!(matches!(result, Err(SdfError::XmlParse(_))));
    }

    #[test]
    fn test_parse_truncated_document() {
        let result = parse_document("<sdf><model>");
        assert!(matches!(result, Err(SdfError::XmlParse(_))));
    }
}
