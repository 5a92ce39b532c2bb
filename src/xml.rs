//! XML element tree produced by the encoder

pub mod model;
pub mod name;
pub mod scope;

pub use model::{XAttribute, XElement, XName};
pub use name::{first_non_xml_char, is_valid_name, is_xml_char};
pub use scope::NamespaceScope;

/// Name of the document element
pub const ROOT_ELEMENT_NAME: &str = "root";
/// Name shared by array items and by object members whose key is not a
/// valid XML name; also the namespace URI and key attribute of the latter
pub const ITEM_ELEMENT_NAME: &str = "item";
/// Attribute carrying the JSON element type
pub const TYPE_ATTRIBUTE: &str = "type";
/// Prefix bound to the item namespace on escaped members
pub const ITEM_NAMESPACE_PREFIX: &str = "a";
