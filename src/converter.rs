//! SDF to URDF conversion.
//!
//! Walks a parsed SDF document tree and builds the equivalent URDF tree.
//! Both trees use the generic [`Element`] shape; this module holds all of
//! the schema knowledge.
//!
//! ## SDF → URDF Mapping
//!
//! | SDF | URDF |
//! |-----|------|
//! | `<sdf><model>` | `<robot>` |
//! | `<link><pose>` | folded into child `<origin>` offsets |
//! | `<visual>` / `<collision>` | `<visual>` / `<collision>` with `<origin>` |
//! | `<geometry><mesh><uri>` | `<geometry><mesh filename="...">` |
//! | `<joint><axis><limit><lower>` | `<joint><limit lower="...">` |
//!
//! ## Pose composition
//!
//! A child frame's pose is combined with its link's pose by adding the two
//! 6-vectors component-wise. This is only a correct frame composition when
//! the link's rotation is zero; it is kept as-is deliberately (see the
//! crate-level docs).

use nalgebra::Vector3;

use crate::diagnostics::Diagnostic;
use crate::error::{Result, SdfError};
use crate::tree::Element;

/// Joint types permitted by the URDF schema.
const URDF_JOINT_TYPES: [&str; 6] = [
    "revolute",
    "continuous",
    "prismatic",
    "fixed",
    "floating",
    "planar",
];

/// Field renames applied when flattening geometry primitive parameters:
/// `(primitive tag, input field, output attribute)`. Every field not listed
/// here passes through under its own name, for known and unknown primitive
/// tags alike.
const PRIMITIVE_FIELD_RENAMES: &[(&str, &str, &str)] = &[("mesh", "uri", "filename")];

/// Result of converting one SDF document.
#[derive(Debug)]
pub struct Conversion {
    /// The URDF `robot` element.
    pub robot: Element,
    /// Ordered diagnostics produced during conversion.
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert a parsed SDF document into a URDF `robot` tree.
///
/// Only the first `<model>` element is converted; additional models are
/// ignored. Joints with types URDF does not support are dropped with a
/// warning diagnostic, and conversion continues.
///
/// # Errors
///
/// Returns `SdfError::UnexpectedRoot` if the root element is not `<sdf>`,
/// and `SdfError::MissingModel` if the root has no `<model>` child. No
/// output is produced in either case.
pub fn convert_document(doc: &Element) -> Result<Conversion> {
    if doc.name != "sdf" {
        return Err(SdfError::UnexpectedRoot(doc.name.clone()));
    }

    let model = doc.child("model").ok_or(SdfError::MissingModel)?;

    let mut converter = Converter::default();
    let robot = converter.convert_model(model);

    Ok(Conversion {
        robot,
        diagnostics: converter.diagnostics,
    })
}

/// Internal converter state.
#[derive(Default)]
struct Converter {
    diagnostics: Vec<Diagnostic>,
}

impl Converter {
    fn convert_model(&mut self, model: &Element) -> Element {
        let name = model.attr("name").unwrap_or_default();
        tracing::info!("Robot name: `{name}'");
        self.diagnostics.push(Diagnostic::ModelName(name.to_string()));

        let mut robot = Element::new("robot").with_attr("name", name);

        // All links first, then all joints, regardless of input interleaving.
        for sdf_link in model.children_named("link") {
            robot.push(self.convert_link(sdf_link));
        }
        for sdf_joint in model.children_named("joint") {
            if let Some(joint) = self.convert_joint(sdf_joint) {
                robot.push(joint);
            }
        }

        robot
    }

    fn convert_link(&self, sdf_link: &Element) -> Element {
        // The link's own pose is the composition ancestor for its children;
        // it is never emitted on the link itself.
        let link_pose = sdf_link.child("pose");

        let mut link =
            Element::new("link").with_attr("name", sdf_link.attr("name").unwrap_or_default());

        for sdf_visual in sdf_link.children_named("visual") {
            link.push(self.convert_shape("visual", sdf_visual, link_pose));
        }

        if let Some(sdf_inertial) = sdf_link.child("inertial") {
            link.push(self.convert_inertial(sdf_inertial, link_pose));
        }

        for sdf_collision in sdf_link.children_named("collision") {
            link.push(self.convert_shape("collision", sdf_collision, link_pose));
        }

        link
    }

    /// Visual and collision entries get the same treatment: a composed
    /// origin followed by the mapped geometry.
    fn convert_shape(&self, tag: &str, sdf_shape: &Element, link_pose: Option<&Element>) -> Element {
        let mut shape = Element::new(tag);
        if let Some(origin) = convert_pose(sdf_shape, link_pose) {
            shape.push(origin);
        }
        if let Some(geometry) = convert_geometry(sdf_shape) {
            shape.push(geometry);
        }
        shape
    }

    fn convert_inertial(&self, sdf_inertial: &Element, link_pose: Option<&Element>) -> Element {
        let mut inertial = Element::new("inertial");

        if let Some(origin) = convert_pose(sdf_inertial, link_pose) {
            inertial.push(origin);
        }

        if let Some(sdf_mass) = sdf_inertial.child("mass") {
            inertial.push(Element::new("mass").with_attr("value", sdf_mass.text.as_str()));
        }

        if let Some(sdf_inertia) = sdf_inertial.child("inertia") {
            // Verbatim tag→text copy, no filtering of unexpected tag names.
            let mut inertia = Element::new("inertia");
            for item in &sdf_inertia.children {
                inertia.set_attr(item.name.as_str(), item.text.as_str());
            }
            inertial.push(inertia);
        }

        inertial
    }

    fn convert_joint(&mut self, sdf_joint: &Element) -> Option<Element> {
        let name = sdf_joint.attr("name").unwrap_or_default();
        let joint_type = sdf_joint.attr("type").unwrap_or_default();

        if !URDF_JOINT_TYPES.contains(&joint_type) {
            tracing::warn!("URDF does not support joint type `{joint_type}' (joint `{name}')");
            self.diagnostics.push(Diagnostic::UnsupportedJointType {
                joint: name.to_string(),
                joint_type: joint_type.to_string(),
            });
            return None;
        }

        let mut joint = Element::new("joint")
            .with_attr("name", name)
            .with_attr("type", joint_type);

        // Joints do not inherit a parent pose.
        if let Some(origin) = convert_pose(sdf_joint, None) {
            joint.push(origin);
        }

        let parts = [
            flatten_element(sdf_joint, "child", &[("child", "link")]),
            flatten_element(sdf_joint, "parent", &[("parent", "link")]),
            flatten_element(sdf_joint, "axis", &[("xyz", "xyz")]),
            flatten_element(
                sdf_joint,
                "dynamic",
                &[
                    ("axis/dynamic/damping", "damping"),
                    ("axis/dynamic/friction", "friction"),
                ],
            ),
            flatten_element(
                sdf_joint,
                "limit",
                &[
                    ("axis/limit/lower", "lower"),
                    ("axis/limit/upper", "upper"),
                    ("axis/limit/effort", "effort"),
                    ("axis/limit/velocity", "velocity"),
                ],
            ),
        ];
        for part in parts.into_iter().flatten() {
            joint.push(part);
        }

        Some(joint)
    }
}

// ============================================================================
// Pose composer
// ============================================================================

/// A 6-component pose: translation plus roll-pitch-yaw.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pose {
    xyz: Vector3<f64>,
    rpy: Vector3<f64>,
}

impl Pose {
    /// Parse a whitespace-separated pose string.
    ///
    /// Unparseable tokens read as zero; missing trailing components are
    /// zero-padded; extra tokens are ignored.
    fn parse(text: &str) -> Self {
        let mut c = [0.0f64; 6];
        for (slot, token) in c.iter_mut().zip(text.split_whitespace()) {
            *slot = token.parse().unwrap_or(0.0);
        }
        Self {
            xyz: Vector3::new(c[0], c[1], c[2]),
            rpy: Vector3::new(c[3], c[4], c[5]),
        }
    }

    /// Component-wise sum with another pose.
    ///
    /// Not a rigid-transform composition: positions and Euler angles are
    /// added independently, which is only exact when `other` has zero
    /// rotation.
    fn sum(self, other: Self) -> Self {
        Self {
            xyz: self.xyz + other.xyz,
            rpy: self.rpy + other.rpy,
        }
    }

    /// True when every component is exactly zero.
    fn is_zero(&self) -> bool {
        self.xyz.iter().chain(self.rpy.iter()).all(|&c| c == 0.0)
    }
}

/// Format a vector as a space-joined attribute value.
fn triple(v: &Vector3<f64>) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}

/// Convert the `<pose>` child of `parent` into an `origin` element,
/// optionally composed with an ancestor pose element.
///
/// Returns `None` when `parent` has no pose child (even if an ancestor pose
/// was supplied), and when the composed pose is all-zero: a zero pose means
/// "unspecified" here, not an identity to be written out.
fn convert_pose(parent: &Element, ancestor: Option<&Element>) -> Option<Element> {
    let sdf_pose = parent.child("pose")?;

    let mut pose = Pose::parse(&sdf_pose.text);
    if let Some(ancestor) = ancestor {
        pose = pose.sum(Pose::parse(&ancestor.text));
    }

    if pose.is_zero() {
        return None;
    }

    Some(
        Element::new("origin")
            .with_attr("xyz", triple(&pose.xyz))
            .with_attr("rpy", triple(&pose.rpy)),
    )
}

// ============================================================================
// Geometry mapper
// ============================================================================

/// Output attribute name for a primitive's parameter field.
fn output_field_name<'a>(primitive: &str, field: &'a str) -> &'a str {
    PRIMITIVE_FIELD_RENAMES
        .iter()
        .find(|&&(p, f, _)| p == primitive && f == field)
        .map_or(field, |&(_, _, renamed)| renamed)
}

/// Convert the `<geometry>` child of `parent` into the output geometry
/// element, or `None` if no geometry is present.
///
/// Each primitive keeps its tag name; its scalar children become attributes
/// named after their tags, subject to [`PRIMITIVE_FIELD_RENAMES`]. Values
/// are copied as raw text.
fn convert_geometry(parent: &Element) -> Option<Element> {
    let sdf_geom = parent.child("geometry")?;

    let mut geometry = Element::new("geometry");
    for sdf_prim in &sdf_geom.children {
        let mut primitive = Element::new(sdf_prim.name.as_str());
        for param in &sdf_prim.children {
            primitive.set_attr(
                output_field_name(&sdf_prim.name, &param.name),
                param.text.as_str(),
            );
        }
        geometry.push(primitive);
    }

    Some(geometry)
}

// ============================================================================
// Attribute flattener
// ============================================================================

/// Collect scattered descendant values into one flat element.
///
/// Each `(path, attribute)` binding is resolved relative to `root`; paths
/// that resolve contribute their element's text under the mapped attribute
/// name. Returns `None` when no binding resolved, so callers emit nothing
/// for fully absent sub-trees.
fn flatten_element(root: &Element, out_tag: &str, bindings: &[(&str, &str)]) -> Option<Element> {
    let mut out = Element::new(out_tag);
    let mut found = false;

    for (path, attr) in bindings {
        if let Some(node) = root.resolve(path) {
            out.set_attr(*attr, node.text.as_str());
            found = true;
        }
    }

    found.then_some(out)
}
