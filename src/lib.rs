//! xmljson: encodes JSON element trees as type-tagged XML
//!
//! This crate provides functionality to:
//! - Model JSON documents as typed element trees
//! - Map them onto XML elements that carry a `type` attribute, so the JSON
//!   shape can be reconstructed later
//! - Escape object keys that are not valid XML names
//! - Write the result as XML (or back as JSON) in UTF-8 or UTF-16
//! - Read JSON text into element trees
//!
//! # Examples
//! ```
//! use xmljson::{parse_json, encode_xml};
//!
//! fn example() -> Result<(), xmljson::Error> {
//!     let doc = parse_json(r#"{"name": "Ada", "tags": ["x"], "1st": null}"#)?;
//!     let xml = encode_xml(&doc)?;
//!     assert!(xml.contains(r#"<tags type="array"><item type="string">x</item></tags>"#));
//!     assert!(xml.contains(r#"<a:item xmlns:a="item" item="1st" type="null"/>"#));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use tracing::{debug, info, instrument};

pub mod culture;
pub mod element;
pub mod encoder;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod utils;
pub mod xml;

// Re-exports
pub use culture::Culture;
pub use element::{Element, ElementType, Scalar};
pub use encoder::{encode, EncodeOptions, OutputFormat, TextEncoding, TreeMapper, XmlJsonEncoder};
pub use error::{EncodeError, EncodeErrorKind, Error, ParseError, ParseErrorKind, Result};
pub use parser::{JsonParser, ParserConfig};
pub use utils::{encode_xml, parse_json};

#[instrument]
pub fn parse_file(path: &str) -> Result<Element> {
    debug!("Starting to parse file: {}", path);

    let content = utils::read_file(path)?;
    info!("File read successfully, parsing JSON");

    let element = parse_json(&content)?;
    debug!("Parsing completed");
    Ok(element)
}

/// Reads the JSON document at `input` and writes its encoding to `output`
#[instrument(skip(options))]
pub fn encode_file(
    input: &str,
    output: &str,
    options: &EncodeOptions,
) -> std::result::Result<(), Error> {
    let element = parse_file(input)?;
    utils::write_encoded(output, &element, options)?;
    info!("Encoded document written");
    Ok(())
}
