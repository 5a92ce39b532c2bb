//! XML text writer built on `quick-xml`

use super::{FormatConfig, Formatter};
use crate::error::{EncodeError, EncodeErrorKind};
use crate::xml::{NamespaceScope, XElement};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;

/// Writes the element tree as an XML document
pub struct XmlFormatter;

impl Formatter for XmlFormatter {
    fn format(&self, root: &XElement, config: &FormatConfig) -> Result<String, EncodeError> {
        let mut buf = Vec::with_capacity(256);
        {
            let mut writer = if config.pretty {
                Writer::new_with_indent(&mut buf, b' ', config.indent_spaces)
            } else {
                Writer::new(&mut buf)
            };

            writer.write_event(Event::Decl(BytesDecl::new(
                "1.0",
                Some(config.declaration_encoding.as_str()),
                None,
            )))?;

            let mut scope = NamespaceScope::new();
            Self::write_element(&mut writer, root, &mut scope)?;
        }
        Ok(String::from_utf8(buf)?)
    }
}

impl XmlFormatter {
    fn write_element<W: Write>(
        writer: &mut Writer<W>,
        element: &XElement,
        scope: &mut NamespaceScope,
    ) -> Result<(), EncodeError> {
        scope.enter(element);
        let name = Self::qualified_name(element, scope)?;

        let mut start = BytesStart::new(name.as_str());
        for attr in &element.attributes {
            let attr_name = attr.qualified_name();
            start.push_attribute(Attribute {
                key: QName(attr_name.as_bytes()),
                value: Cow::Owned(escape_attribute(attr.value()).into_bytes()),
            });
        }

        let text = element.text().filter(|text| !text.is_empty());
        if text.is_none() && element.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            if let Some(text) = text {
                writer.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
            }
            for child in &element.children {
                Self::write_element(writer, child, scope)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }

        scope.exit();
        Ok(())
    }

    fn qualified_name(element: &XElement, scope: &NamespaceScope) -> Result<String, EncodeError> {
        let local = element.name.local_name();
        match element.name.namespace() {
            None => Ok(local.to_string()),
            Some(uri) => match scope.prefix_for(uri) {
                Some("") => Ok(local.to_string()),
                Some(prefix) => Ok(format!("{prefix}:{local}")),
                None => Err(EncodeErrorKind::UnboundNamespace(uri.to_string()).into()),
            },
        }
    }
}

/// Character references keep tab, LF and CR intact through attribute-value
/// normalization
fn escape_attribute(value: &str) -> String {
    escape_with(value, |c| match c {
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        '\t' => Some("&#x9;"),
        '\n' => Some("&#xA;"),
        other => text_entity(other),
    })
}

/// A raw CR would be folded into LF by line-end normalization
fn escape_text(text: &str) -> String {
    escape_with(text, text_entity)
}

fn text_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\r' => Some("&#xD;"),
        _ => None,
    }
}

fn escape_with(raw: &str, entity: impl Fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match entity(c) {
            Some(reference) => out.push_str(reference),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{XAttribute, XName};

    fn render(root: &XElement, pretty: bool) -> Result<String, EncodeError> {
        let config = FormatConfig {
            pretty,
            ..FormatConfig::default()
        };
        XmlFormatter.format(root, &config)
    }

    #[test]
    fn test_writes_declaration_and_self_closing_leaf() -> Result<(), EncodeError> {
        let mut root = XElement::new(XName::local("root"));
        root.set_attribute("type", "null");
        let xml = render(&root, false)?;
        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="utf-8"?><root type="null"/>"#
        );
        Ok(())
    }

    #[test]
    fn test_escapes_text_and_attributes() -> Result<(), EncodeError> {
        let mut root = XElement::new(XName::local("root"));
        root.set_attribute("item", "a<\"b\">");
        root.set_text("x & y < z");
        let xml = render(&root, false)?;
        assert!(xml.contains("x &amp; y &lt; z"));
        assert!(xml.contains(r#"item="a&lt;&quot;b&quot;&gt;""#));
        Ok(())
    }

    #[test]
    fn test_whitespace_in_attributes_uses_character_references() -> Result<(), EncodeError> {
        let mut root = XElement::new(XName::local("root"));
        root.set_attribute("item", "a\tb\nc\rd e");
        let xml = render(&root, false)?;
        assert!(xml.contains(r#"<root item="a&#x9;b&#xA;c&#xD;d e"/>"#));
        Ok(())
    }

    #[test]
    fn test_carriage_return_in_text_is_referenced() -> Result<(), EncodeError> {
        let mut root = XElement::new(XName::local("root"));
        root.set_text("a\r\nb\tc");
        let xml = render(&root, false)?;
        assert!(xml.ends_with("<root>a&#xD;\nb\tc</root>"));
        Ok(())
    }

    #[test]
    fn test_prefixes_namespaced_elements() -> Result<(), EncodeError> {
        let mut root = XElement::new(XName::local("root"));
        let mut child = XElement::new(XName::qualified("item", "item"));
        child.add_namespace_declaration("a", "item");
        child.set_attribute("item", "bad key");
        root.push_child(child);
        let xml = render(&root, false)?;
        assert!(xml.contains(r#"<a:item xmlns:a="item" item="bad key"/>"#));
        Ok(())
    }

    #[test]
    fn test_unbound_namespace_fails() {
        let mut root = XElement::new(XName::local("root"));
        root.push_child(XElement::new(XName::qualified("urn:nowhere", "x")));
        let err = render(&root, false).err();
        assert!(matches!(
            err.as_ref().map(EncodeError::kind),
            Some(EncodeErrorKind::UnboundNamespace(uri)) if uri == "urn:nowhere"
        ));
    }

    #[test]
    fn test_pretty_output_breaks_lines() -> Result<(), EncodeError> {
        let mut root = XElement::new(XName::local("root"));
        let mut child = XElement::new(XName::local("a"));
        child.set_text("1");
        root.push_child(child);
        let xml = render(&root, true)?;
        assert!(xml.contains("\n  <a>1</a>"));
        Ok(())
    }

    #[test]
    fn test_attribute_order_is_preserved() -> Result<(), EncodeError> {
        let mut root = XElement::new(XName::local("root"));
        root.attributes.push(XAttribute::new("z", "1"));
        root.attributes.push(XAttribute::new("a", "2"));
        let xml = render(&root, false)?;
        assert!(xml.contains(r#"<root z="1" a="2"/>"#));
        Ok(())
    }
}
