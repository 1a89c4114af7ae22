//! High-level conversion entry points.
//!
//! Ties the parser, converter and writer together: SDF XML text in, URDF
//! XML text out, with the collected diagnostics alongside.

use std::fs;
use std::path::Path;

use crate::converter::{convert_document, Conversion};
use crate::diagnostics::Diagnostic;
use crate::error::{Result, SdfError};
use crate::parser::parse_document;
use crate::tree::Element;
use crate::writer::write_document;

/// A converted robot, ready to be serialized or inspected.
#[derive(Debug)]
pub struct ConvertedRobot {
    /// The robot name (from the model's `name` attribute).
    pub name: String,
    /// The URDF `robot` element tree.
    pub robot: Element,
    /// Ordered diagnostics produced during conversion.
    pub diagnostics: Vec<Diagnostic>,
}

impl ConvertedRobot {
    /// Serialize the URDF tree as an XML document string.
    ///
    /// # Errors
    ///
    /// Returns `SdfError::XmlWrite` if serialization fails.
    pub fn to_xml_string(&self) -> Result<String> {
        write_document(&self.robot)
    }

    /// Iterate over warning diagnostics only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }
}

/// Convert an SDF XML string to a URDF robot.
///
/// # Errors
///
/// Returns an error if the XML is malformed, the root element is not
/// `<sdf>`, or no `<model>` element is present.
pub fn convert_sdf_str(xml: &str) -> Result<ConvertedRobot> {
    let doc = parse_document(xml)?;
    let Conversion { robot, diagnostics } = convert_document(&doc)?;
    let name = robot.attr("name").unwrap_or_default().to_string();

    Ok(ConvertedRobot {
        name,
        robot,
        diagnostics,
    })
}

/// Convert an SDF file to a URDF robot.
///
/// # Errors
///
/// Returns `SdfError::ReadInput` if the file cannot be read, plus all the
/// errors of [`convert_sdf_str`].
pub fn convert_sdf_file(path: impl AsRef<Path>) -> Result<ConvertedRobot> {
    let path = path.as_ref();
    let xml = fs::read_to_string(path)
        .map_err(|e| SdfError::read_input(path.display().to_string(), &e))?;
    convert_sdf_str(&xml)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL_SDF: &str = r#"
        <sdf version="1.4">
            <model name="cart">
                <link name="chassis"/>
            </model>
        </sdf>
    "#;

    #[test]
    fn test_convert_from_string() {
        let converted = convert_sdf_str(MINIMAL_SDF).expect("should convert");
        assert_eq!(converted.name, "cart");
        assert_eq!(converted.robot.children_named("link").count(), 1);
        assert_eq!(converted.warnings().count(), 0);
    }

    #[test]
    fn test_convert_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(MINIMAL_SDF.as_bytes()).expect("write");

        let converted = convert_sdf_file(file.path()).expect("should convert");
        assert_eq!(converted.name, "cart");
    }

    #[test]
    fn test_missing_file_error() {
        let result = convert_sdf_file("/nonexistent/robot.sdf");
        assert!(matches!(result, Err(SdfError::ReadInput { .. })));
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let first = convert_sdf_str(MINIMAL_SDF)
            .expect("should convert")
            .to_xml_string()
            .expect("should serialize");
        let second = convert_sdf_str(MINIMAL_SDF)
            .expect("should convert")
            .to_xml_string()
            .expect("should serialize");
        assert_eq!(first, second);
    }
}
