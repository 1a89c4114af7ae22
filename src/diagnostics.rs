//! Conversion diagnostics.
//!
//! The converter collects an ordered sequence of diagnostic records and
//! returns them alongside the output tree, so warnings can be asserted in
//! tests without capturing console output. Each record is also emitted
//! through `tracing` at the point of detection; the command-line binary
//! routes those events to standard error.

use std::fmt;

/// A single diagnostic record produced during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Informational: the name of the model being converted.
    ModelName(String),
    /// A joint was dropped because URDF does not support its type.
    UnsupportedJointType {
        /// Name of the dropped joint.
        joint: String,
        /// The unsupported type string from the input.
        joint_type: String,
    },
}

impl Diagnostic {
    /// Whether this record is a warning (as opposed to informational).
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::UnsupportedJointType { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelName(name) => write!(f, "Robot name: `{name}'"),
            Self::UnsupportedJointType { joint, joint_type } => write!(
                f,
                "URDF does not support joint type `{joint_type}' (joint `{joint}')"
            ),
        }
    }
}
