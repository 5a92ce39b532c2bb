//! XML data model

/// Element name, optionally qualified by a namespace URI
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XName {
    namespace: Option<String>,
    local: String,
}

impl XName {
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    pub fn qualified(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local
    }
}

/// Attribute of an element. Namespace declarations are kept apart from
/// ordinary attributes so writers can bind prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XAttribute {
    Value { name: String, value: String },
    /// `xmlns:prefix="uri"`
    Namespace { prefix: String, uri: String },
}

impl XAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Value {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn namespace(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::Namespace {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }

    /// Name as written in the document
    pub fn qualified_name(&self) -> String {
        match self {
            Self::Value { name, .. } => name.clone(),
            Self::Namespace { prefix, .. } => format!("xmlns:{prefix}"),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Value { value, .. } => value,
            Self::Namespace { uri, .. } => uri,
        }
    }
}

/// XML element with ordered attributes, ordered child elements and an
/// optional text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XElement {
    pub name: XName,
    pub attributes: Vec<XAttribute>,
    pub children: Vec<XElement>,
    pub text: Option<String>,
}

impl XElement {
    pub fn new(name: XName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Replaces the value of an existing attribute or appends a new one
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        for attr in &mut self.attributes {
            if let XAttribute::Value { name: existing, value: slot } = attr {
                if existing == name {
                    *slot = value;
                    return;
                }
            }
        }
        self.attributes.push(XAttribute::new(name, value));
    }

    pub fn add_namespace_declaration(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.attributes.push(XAttribute::namespace(prefix, uri));
    }

    /// Value of a plain attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find_map(|attr| match attr {
            XAttribute::Value { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Namespace declarations made on this element, in document order
    pub fn namespace_declarations(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes.iter().filter_map(|attr| match attr {
            XAttribute::Namespace { prefix, uri } => Some((prefix.as_str(), uri.as_str())),
            XAttribute::Value { .. } => None,
        })
    }

    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut el = XElement::new(XName::local("root"));
        el.set_attribute("type", "array");
        el.set_attribute("item", "key");
        el.set_attribute("type", "object");
        assert_eq!(el.attribute("type"), Some("object"));
        assert_eq!(
            el.attributes.first().map(XAttribute::qualified_name),
            Some("type".to_string())
        );
        assert_eq!(el.attributes.len(), 2);
    }

    #[test]
    fn test_namespace_declarations_are_not_plain_attributes() {
        let mut el = XElement::new(XName::qualified("item", "item"));
        el.add_namespace_declaration("a", "item");
        assert_eq!(el.attribute("xmlns:a"), None);
        assert_eq!(el.namespace_declarations().collect::<Vec<_>>(), vec![("a", "item")]);
        assert_eq!(
            el.attributes.first().map(XAttribute::qualified_name),
            Some("xmlns:a".to_string())
        );
    }
}
