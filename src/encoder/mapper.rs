//! Mirrors a JSON element tree into a type-tagged XML element tree.
//!
//! Every XML element gets a `type` attribute naming its JSON type. Array
//! items are all named `item`. Object members are named by their key when the
//! key is a valid XML name; otherwise the member becomes
//! `<a:item xmlns:a="item" item="KEY">` so the key survives.

use crate::culture::Culture;
use crate::element::{Element, ElementType, Scalar};
use crate::error::{EncodeError, EncodeErrorKind};
use crate::xml::{
    first_non_xml_char, is_valid_name, XElement, XName, ITEM_ELEMENT_NAME, ITEM_NAMESPACE_PREFIX,
    ROOT_ELEMENT_NAME, TYPE_ATTRIBUTE,
};
use std::fmt;
use tracing::trace;

/// Recursive JSON to XML mapping under one culture
#[derive(Debug, Clone, Copy)]
pub struct TreeMapper<'c> {
    culture: &'c Culture,
}

impl<'c> TreeMapper<'c> {
    pub fn new(culture: &'c Culture) -> Self {
        Self { culture }
    }

    /// Maps `root` into a fresh `<root>` element
    pub fn map_root(&self, root: &Element) -> Result<XElement, EncodeError> {
        let mut xml = XElement::new(XName::local(ROOT_ELEMENT_NAME));
        let mut path = JsonPath::default();
        self.map_element(root, &mut xml, &mut path)?;
        Ok(xml)
    }

    fn map_element<'a>(
        &self,
        json: &'a Element,
        xml: &mut XElement,
        path: &mut JsonPath<'a>,
    ) -> Result<(), EncodeError> {
        xml.set_attribute(TYPE_ATTRIBUTE, json.kind().as_str());

        match json.kind() {
            ElementType::Object | ElementType::Array => self.map_children(json, xml, path),
            ElementType::Null => Self::ensure_leaf(json, path),
            ElementType::Boolean => {
                Self::ensure_leaf(json, path)?;
                match json.value().and_then(Scalar::as_bool) {
                    Some(b) => {
                        xml.set_text(if b { "true" } else { "false" });
                        Ok(())
                    }
                    None => Err(EncodeError::malformed(
                        path.to_string(),
                        format!("boolean element carries {}", describe(json.value())),
                    )),
                }
            }
            ElementType::String => {
                Self::ensure_leaf(json, path)?;
                let text = match json.value() {
                    Some(value) => match value.as_str() {
                        Some(s) => s.to_string(),
                        None => Culture::invariant().format_scalar(value)?,
                    },
                    None => {
                        return Err(EncodeError::malformed(
                            path.to_string(),
                            "string element carries no value",
                        ))
                    }
                };
                xml.set_text(Self::checked_text(text, path)?);
                Ok(())
            }
            ElementType::Number => {
                Self::ensure_leaf(json, path)?;
                if let Some(value) = json.value() {
                    let text = self.culture.format_scalar(value)?;
                    xml.set_text(Self::checked_text(text, path)?);
                }
                Ok(())
            }
        }
    }

    fn map_children<'a>(
        &self,
        json: &'a Element,
        xml: &mut XElement,
        path: &mut JsonPath<'a>,
    ) -> Result<(), EncodeError> {
        if json.value().is_some() {
            return Err(EncodeError::malformed(
                path.to_string(),
                format!("{} element carries a scalar value", json.kind()),
            ));
        }

        let is_array = json.kind() == ElementType::Array;
        for (index, child) in json.iter().enumerate() {
            path.push(if is_array {
                Segment::Index(index)
            } else {
                Segment::Key(child.name().unwrap_or_default())
            });

            let mut child_xml = Self::create_element(is_array, child, path)?;
            self.map_element(child, &mut child_xml, path)?;
            xml.push_child(child_xml);

            path.pop();
        }
        Ok(())
    }

    fn create_element(
        is_array_item: bool,
        json: &Element,
        path: &JsonPath<'_>,
    ) -> Result<XElement, EncodeError> {
        if is_array_item {
            return Ok(XElement::new(XName::local(ITEM_ELEMENT_NAME)));
        }

        let name = json
            .name()
            .ok_or_else(|| EncodeError::malformed(path.to_string(), "object member has no name"))?;
        if is_valid_name(name) {
            return Ok(XElement::new(XName::local(name)));
        }

        let name = Self::checked_text(name.to_string(), path)?;
        trace!(key = %name, "escaping member key that is not a valid XML name");
        let mut element = XElement::new(XName::qualified(ITEM_ELEMENT_NAME, ITEM_ELEMENT_NAME));
        element.add_namespace_declaration(ITEM_NAMESPACE_PREFIX, ITEM_ELEMENT_NAME);
        element.set_attribute(ITEM_ELEMENT_NAME, name);
        Ok(element)
    }

    /// Rejects text that an XML document cannot carry, even escaped
    fn checked_text(text: String, path: &JsonPath<'_>) -> Result<String, EncodeError> {
        match first_non_xml_char(&text) {
            Some(character) => Err(EncodeErrorKind::NonXmlChar {
                path: path.to_string(),
                character,
            }
            .into()),
            None => Ok(text),
        }
    }

    fn ensure_leaf(json: &Element, path: &JsonPath<'_>) -> Result<(), EncodeError> {
        if json.is_empty() {
            Ok(())
        } else {
            Err(EncodeError::malformed(
                path.to_string(),
                format!("{} element carries {} children", json.kind(), json.len()),
            ))
        }
    }
}

fn describe(value: Option<&Scalar>) -> String {
    match value {
        None => "no value".to_string(),
        Some(scalar) => format!("{scalar:?}"),
    }
}

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

/// Location of the element being mapped, rendered as `$.key[0]`
#[derive(Debug, Default)]
struct JsonPath<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> JsonPath<'a> {
    fn push(&mut self, segment: Segment<'a>) {
        self.segments.push(segment);
    }

    fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for JsonPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
