//! Namespace prefix bindings in scope while writing an element tree

use super::model::XElement;

/// Stack of prefix bindings, one frame per open element
#[derive(Debug, Default)]
pub struct NamespaceScope {
    frames: Vec<Vec<(String, String)>>,
}

impl NamespaceScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a frame holding the declarations made on `element`
    pub fn enter(&mut self, element: &XElement) {
        let frame = element
            .namespace_declarations()
            .map(|(prefix, uri)| (prefix.to_string(), uri.to_string()))
            .collect();
        self.frames.push(frame);
    }

    pub fn exit(&mut self) {
        self.frames.pop();
    }

    /// Innermost prefix bound to `uri`
    pub fn prefix_for(&self, uri: &str) -> Option<&str> {
        self.frames
            .iter()
            .rev()
            .flat_map(|frame| frame.iter().rev())
            .find(|(_, bound)| bound == uri)
            .map(|(prefix, _)| prefix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::model::XName;

    #[test]
    fn test_inner_binding_shadows_outer() {
        let mut outer = XElement::new(XName::local("root"));
        outer.add_namespace_declaration("a", "urn:x");
        let mut inner = XElement::new(XName::local("child"));
        inner.add_namespace_declaration("b", "urn:x");

        let mut scope = NamespaceScope::new();
        scope.enter(&outer);
        assert_eq!(scope.prefix_for("urn:x"), Some("a"));
        scope.enter(&inner);
        assert_eq!(scope.prefix_for("urn:x"), Some("b"));
        scope.exit();
        assert_eq!(scope.prefix_for("urn:x"), Some("a"));
        scope.exit();
        assert_eq!(scope.prefix_for("urn:x"), None);
    }
}
