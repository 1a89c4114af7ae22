//! SDF to URDF robot description converter.
//!
//! This crate converts [SDF](http://sdformat.org/) (Simulation Description
//! Format) robot models into [URDF](http://wiki.ros.org/urdf) (Unified Robot
//! Description Format) documents.
//!
//! # Features
//!
//! - Parse SDF XML from files, strings, or standard input (via the binary)
//! - Convert links with visual, collision, and inertial blocks
//! - Fold nested SDF `<pose>` offsets into flat URDF `<origin>` attributes
//! - Flatten deep joint parameters (`axis/limit/lower`) into URDF attributes
//! - Structured diagnostics returned alongside the output tree
//!
//! # Example
//!
//! ```
//! use sdf2urdf::convert_sdf_str;
//!
//! let sdf = r#"
//!     <sdf version="1.4">
//!         <model name="arm">
//!             <link name="base"/>
//!             <link name="tip">
//!                 <pose>0 0 1 0 0 0</pose>
//!             </link>
//!             <joint name="j1" type="revolute">
//!                 <parent>base</parent>
//!                 <child>tip</child>
//!             </joint>
//!         </model>
//!     </sdf>
//! "#;
//!
//! let converted = convert_sdf_str(sdf).expect("should convert");
//! assert_eq!(converted.name, "arm");
//!
//! let urdf = converted.to_xml_string().expect("should serialize");
//! assert!(urdf.contains(r#"<robot name="arm">"#));
//! ```
//!
//! # Supported SDF Elements
//!
//! ## Links
//!
//! - `<link name="...">` with optional `<pose>`
//! - `<visual>` / `<collision>` - pose plus geometry
//! - `<inertial>` - pose, `<mass>`, `<inertia>` moments (copied verbatim)
//!
//! ## Joints
//!
//! - `<joint name="..." type="...">` where the type is one of the URDF set:
//!   `revolute`, `continuous`, `prismatic`, `fixed`, `floating`, `planar`.
//!   Joints with other types are dropped with a warning.
//! - `<parent>`, `<child>` link references
//! - `<axis>`, `<axis><dynamic>`, `<axis><limit>` parameters, flattened
//!   into URDF `axis` / `dynamic` / `limit` attribute sets
//!
//! ## Geometry
//!
//! Every primitive tag passes through with its parameters copied verbatim
//! as attributes; the `mesh` primitive's `uri` becomes `filename`.
//!
//! # Limitations
//!
//! - Pose composition is a component-wise sum of the two 6-vectors. This is
//!   only a correct frame composition when the ancestor rotation is zero;
//!   the approximation is deliberate and kept for output compatibility.
//! - Only the first `<model>` element is converted; additional models are
//!   silently ignored.
//! - Non-kinematic SDF constructs (sensors, plugins, physics parameters,
//!   lighting) are not preserved.
//! - Neither the input nor the output schema is validated beyond the
//!   document shape the conversion itself needs.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::unused_self,
    clippy::needless_pass_by_value
)]

mod converter;
mod diagnostics;
mod error;
mod loader;
mod parser;
mod tree;
mod writer;

pub use converter::{convert_document, Conversion};
pub use diagnostics::Diagnostic;
pub use error::{Result, SdfError};
pub use loader::{convert_sdf_file, convert_sdf_str, ConvertedRobot};
pub use parser::parse_document;
pub use tree::Element;
pub use writer::write_document;
