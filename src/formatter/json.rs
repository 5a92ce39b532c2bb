//! Renders a type-tagged element tree as JSON text.
//!
//! Follows the JSON-to-XML mapping convention in reverse: the `type`
//! attribute decides the JSON shape, member names come from element names,
//! and an escaped member (`a:item` in the item namespace) takes its name from
//! the `item` attribute.

use super::{helpers, CommonFormatter, FormatConfig, Formatter};
use crate::element::ElementType;
use crate::error::{EncodeError, EncodeErrorKind};
use crate::xml::{XElement, ITEM_ELEMENT_NAME, TYPE_ATTRIBUTE};

pub struct JsonFormatter;

impl CommonFormatter for JsonFormatter {}

impl Formatter for JsonFormatter {
    fn format(&self, root: &XElement, config: &FormatConfig) -> Result<String, EncodeError> {
        Self::format_value(root, 0, config)
    }
}

impl JsonFormatter {
    fn format_value(
        element: &XElement,
        indent: usize,
        config: &FormatConfig,
    ) -> Result<String, EncodeError> {
        match Self::element_type(element)? {
            ElementType::Object => Self::format_object(element, indent, config),
            ElementType::Array => Self::format_array(element, indent, config),
            ElementType::String => Ok(quote(element.text().unwrap_or_default())),
            ElementType::Number => {
                let text = element.text().unwrap_or_default();
                if is_json_number(text) {
                    Ok(text.to_string())
                } else {
                    Err(EncodeErrorKind::InvalidNumber(text.to_string()).into())
                }
            }
            ElementType::Boolean => match element.text() {
                Some(text @ ("true" | "false")) => Ok(text.to_string()),
                other => Err(EncodeError::malformed(
                    element.name.local_name(),
                    format!("boolean text {other:?}"),
                )),
            },
            ElementType::Null => Ok("null".to_string()),
        }
    }

    fn format_array(
        element: &XElement,
        indent: usize,
        config: &FormatConfig,
    ) -> Result<String, EncodeError> {
        if element.children.is_empty() {
            return Ok(helpers::format_empty_array());
        }

        let (indent_str, inner_indent) = Self::create_indentation(indent, config);
        let items = element
            .children
            .iter()
            .map(|item| {
                Self::format_value(item, indent + 1, config).map(|v| format!("{inner_indent}{v}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(helpers::wrap('[', items, ']', &indent_str, config))
    }

    fn format_object(
        element: &XElement,
        indent: usize,
        config: &FormatConfig,
    ) -> Result<String, EncodeError> {
        if element.children.is_empty() {
            return Ok(helpers::format_empty_object());
        }

        let (indent_str, inner_indent) = Self::create_indentation(indent, config);
        let separator = if config.pretty { ": " } else { ":" };
        let items = element
            .children
            .iter()
            .map(|member| {
                let value = Self::format_value(member, indent + 1, config)?;
                Ok(format!(
                    "{inner_indent}{}{separator}{value}",
                    quote(Self::member_name(member))
                ))
            })
            .collect::<Result<Vec<_>, EncodeError>>()?;

        Ok(helpers::wrap('{', items, '}', &indent_str, config))
    }

    /// Elements without a `type` attribute are strings
    fn element_type(element: &XElement) -> Result<ElementType, EncodeError> {
        match element.attribute(TYPE_ATTRIBUTE) {
            None => Ok(ElementType::String),
            Some(name) => Ok(name.parse()?),
        }
    }

    fn member_name(element: &XElement) -> &str {
        let escaped = element.name.namespace() == Some(ITEM_ELEMENT_NAME)
            && element.name.local_name() == ITEM_ELEMENT_NAME;
        match element.attribute(ITEM_ELEMENT_NAME) {
            Some(key) if escaped => key,
            _ => element.name.local_name(),
        }
    }
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if u32::from(c) < 0x20 => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// JSON number grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
fn is_json_number(text: &str) -> bool {
    let mut rest = text.strip_prefix('-').unwrap_or(text);

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if int_len == 0 || (int_len > 1 && rest.starts_with('0')) {
        return false;
    }
    rest = rest.get(int_len..).unwrap_or_default();

    if let Some(frac) = rest.strip_prefix('.') {
        let frac_len = frac.bytes().take_while(u8::is_ascii_digit).count();
        if frac_len == 0 {
            return false;
        }
        rest = frac.get(frac_len..).unwrap_or_default();
    }

    if let Some(exp) = rest.strip_prefix(['e', 'E']) {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        let exp_len = exp.bytes().take_while(u8::is_ascii_digit).count();
        if exp_len == 0 {
            return false;
        }
        rest = exp.get(exp_len..).unwrap_or_default();
    }

    rest.is_empty()
}
