//! Error types for SDF conversion.

use thiserror::Error;

/// Errors that can occur while converting an SDF document.
#[derive(Debug, Error)]
pub enum SdfError {
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// XML serialization error.
    #[error("XML write error: {0}")]
    XmlWrite(String),

    /// The document's root element is not `<sdf>`.
    #[error("root element is not <sdf>, but <{0}>")]
    UnexpectedRoot(String),

    /// The `<sdf>` root contains no `<model>` element.
    #[error("no <model> element in document")]
    MissingModel,

    /// An input file could not be read.
    #[error("cannot read input '{path}': {message}")]
    ReadInput {
        /// The path that failed to read.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },
}

impl SdfError {
    /// Create a `ReadInput` error from a path and an I/O error.
    pub(crate) fn read_input(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::ReadInput {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for SDF conversion operations.
pub type Result<T> = std::result::Result<T, SdfError>;
