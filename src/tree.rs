//! Generic XML element tree.
//!
//! Both the SDF input and the URDF output are held in the same ordered tree
//! shape: a tag name, an ordered attribute list, ordered child elements, and
//! text content. The converter never needs schema-specific types; it walks
//! one tree and builds another.

/// A single XML element.
///
/// Attributes keep insertion order so that repeated conversions of the same
/// input serialize to identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub name: String,
    /// Attributes in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<Element>,
    /// Concatenated text content.
    pub text: String,
}

impl Element {
    /// Create an empty element with the given tag name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute addition.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder-style child addition.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set an attribute, replacing an existing value of the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            attr.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Append a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get the first child with the given tag name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Iterate over all children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Resolve a relative path of child tag names, e.g. `axis/limit/lower`.
    ///
    /// Each step descends into the first child with that tag name. Returns
    /// `None` as soon as a step has no match.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Element> {
        let mut current = self;
        for step in path.split('/').filter(|s| !s.is_empty()) {
            current = current.child(step)?;
        }
        Some(current)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample_joint() -> Element {
        Element::new("joint")
            .with_attr("name", "j1")
            .with_child(Element::new("child").with_text("tip"))
            .with_child(
                Element::new("axis").with_child(
                    Element::new("limit")
                        .with_child(Element::new("lower").with_text("-1.5"))
                        .with_child(Element::new("upper").with_text("1.5")),
                ),
            )
    }

    #[test]
    fn test_attr_lookup_and_replace() {
        let mut e = Element::new("link").with_attr("name", "base");
        assert_eq!(e.attr("name"), Some("base"));
        assert_eq!(e.attr("missing"), None);

        e.set_attr("name", "tip");
        assert_eq!(e.attr("name"), Some("tip"));
        assert_eq!(e.attributes.len(), 1);
    }

    #[test]
    fn test_attribute_order_preserved() {
        let e = Element::new("origin")
            .with_attr("xyz", "0 0 1")
            .with_attr("rpy", "0 0 0");
        let names: Vec<&str> = e.attributes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["xyz", "rpy"]);
    }

    #[test]
    fn test_resolve_direct_child() {
        let joint = sample_joint();
        let child = joint.resolve("child").expect("should resolve");
        assert_eq!(child.text, "tip");
    }

    #[test]
    fn test_resolve_deep_path() {
        let joint = sample_joint();
        assert_eq!(joint.resolve("axis/limit/lower").unwrap().text, "-1.5");
        assert_eq!(joint.resolve("axis/limit/upper").unwrap().text, "1.5");
        assert!(joint.resolve("axis/limit/effort").is_none());
        assert!(joint.resolve("axis/dynamic/damping").is_none());
    }

    #[test]
    fn test_resolve_first_match_only() {
        let e = Element::new("model")
            .with_child(Element::new("link").with_attr("name", "a"))
            .with_child(Element::new("link").with_attr("name", "b"));
        assert_eq!(e.resolve("link").unwrap().attr("name"), Some("a"));
    }

    #[test]
    fn test_children_named() {
        let e = Element::new("model")
            .with_child(Element::new("link"))
            .with_child(Element::new("joint"))
            .with_child(Element::new("link"));
        assert_eq!(e.children_named("link").count(), 2);
        assert_eq!(e.children_named("joint").count(), 1);
    }
}
