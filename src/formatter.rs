mod json;
mod xml;

pub use self::{json::JsonFormatter, xml::XmlFormatter};
use crate::error::EncodeError;
use crate::xml::XElement;

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for indentation
    pub indent_spaces: usize,
    /// Whether to break lines and indent nested elements
    pub pretty: bool,
    /// Encoding named in the XML declaration
    pub declaration_encoding: String,
}

/// Default configuration for formatting
impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            pretty: false,
            declaration_encoding: "utf-8".to_string(),
        }
    }
}

/// Trait for rendering an element tree as text
pub trait Formatter {
    fn format(&self, root: &XElement, config: &FormatConfig) -> Result<String, EncodeError>;
}

/// Common formatting functionality
pub trait CommonFormatter {
    /// Creates indentation strings for the current and the nested level
    fn create_indentation(indent: usize, config: &FormatConfig) -> (String, String) {
        if !config.pretty {
            return (String::new(), String::new());
        }
        let indent_str = " ".repeat(indent * config.indent_spaces);
        let inner_indent = " ".repeat((indent + 1) * config.indent_spaces);
        (indent_str, inner_indent)
    }
}

/// Helper functions for formatting collections
pub mod helpers {
    use super::FormatConfig;

    pub fn format_empty_array() -> String {
        "[]".to_string()
    }

    pub fn format_empty_object() -> String {
        "{}".to_string()
    }

    pub fn join_with_commas(items: Vec<String>, config: &FormatConfig) -> String {
        if config.pretty {
            items.join(",\n")
        } else {
            items.join(",")
        }
    }

    /// Wraps already formatted items in the given brackets
    pub fn wrap(
        open: char,
        items: Vec<String>,
        close: char,
        indent_str: &str,
        config: &FormatConfig,
    ) -> String {
        let body = join_with_commas(items, config);
        if config.pretty {
            format!("{open}\n{body}\n{indent_str}{close}")
        } else {
            format!("{open}{body}{close}")
        }
    }
}
