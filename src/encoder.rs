//! Encodes JSON element trees as type-tagged XML.
//!
//! The encoder builds the whole XML tree first, renders it with the requested
//! writer, transcodes the text and hands it to the sink in a single write
//! followed by a flush. Any failure along the way surfaces as one
//! [`EncodeError`].
//!
//! # Examples
//! ```
//! use xmljson::{Element, EncodeOptions, XmlJsonEncoder};
//!
//! let doc = Element::object([("pi", Element::from(3.14)), ("ok", Element::from(true))]);
//! let xml = XmlJsonEncoder::new().encode_to_string(&doc, &EncodeOptions::default())?;
//! assert!(xml.ends_with(
//!     r#"<root type="object"><pi type="number">3.14</pi><ok type="boolean">true</ok></root>"#
//! ));
//! # Ok::<(), xmljson::EncodeError>(())
//! ```

mod mapper;
mod options;

pub use mapper::TreeMapper;
pub use options::{EncodeOptions, OutputFormat, TextEncoding, UnsupportedEncoding};

use crate::culture::Culture;
use crate::element::Element;
use crate::error::EncodeError;
use crate::formatter::{FormatConfig, Formatter, JsonFormatter, XmlFormatter};
use crate::xml::XElement;
use std::io::Write;
use tracing::{debug, instrument};

/// Stateless JSON to XML encoder. Safe to share between threads; all
/// per-call settings travel in [`EncodeOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlJsonEncoder;

impl XmlJsonEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encodes `root` into `sink` and flushes it
    #[instrument(skip_all, fields(encoding = %options.encoding, pretty = options.pretty))]
    pub fn encode<W: Write + ?Sized>(
        &self,
        root: &Element,
        sink: &mut W,
        options: &EncodeOptions,
    ) -> Result<(), EncodeError> {
        let text = self.encode_to_string(root, options)?;
        let bytes = options.encoding.encode(text);

        sink.write_all(&bytes)?;
        sink.flush()?;

        debug!(bytes = bytes.len(), "wrote encoded document");
        Ok(())
    }

    /// Encodes `root` into a byte buffer in the requested encoding
    pub fn encode_to_vec(
        &self,
        root: &Element,
        options: &EncodeOptions,
    ) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::new();
        self.encode(root, &mut buf, options)?;
        Ok(buf)
    }

    /// Renders `root` as text. The declaration still names
    /// `options.encoding`, but no transcoding takes place.
    pub fn encode_to_string(
        &self,
        root: &Element,
        options: &EncodeOptions,
    ) -> Result<String, EncodeError> {
        let tree = self.to_xml_tree(root, &options.culture)?;
        let config = FormatConfig {
            pretty: options.pretty,
            declaration_encoding: options.encoding.label().to_string(),
            ..FormatConfig::default()
        };

        match options.format {
            OutputFormat::Xml => XmlFormatter.format(&tree, &config),
            OutputFormat::Json => JsonFormatter.format(&tree, &config),
        }
    }

    /// Maps `root` into the type-tagged XML tree without writing it
    pub fn to_xml_tree(&self, root: &Element, culture: &Culture) -> Result<XElement, EncodeError> {
        let tree = TreeMapper::new(culture).map_root(root)?;
        debug!(members = tree.children.len(), "mapped element tree");
        Ok(tree)
    }
}

/// Encodes `root` into `sink` with default options: UTF-8, compact XML,
/// invariant culture
pub fn encode<W: Write + ?Sized>(root: &Element, sink: &mut W) -> Result<(), EncodeError> {
    XmlJsonEncoder::new().encode(root, sink, &EncodeOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeErrorKind;
    use std::io;

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_sink_surfaces_encode_error() {
        let err = encode(&Element::null(), &mut ClosedSink).err();
        assert!(matches!(
            err.as_ref().map(EncodeError::kind),
            Some(EncodeErrorKind::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn test_declaration_names_requested_encoding() -> Result<(), EncodeError> {
        let options = EncodeOptions::new().with_encoding(TextEncoding::Utf16Be);
        let text = XmlJsonEncoder::new().encode_to_string(&Element::null(), &options)?;
        assert!(text.starts_with(r#"<?xml version="1.0" encoding="utf-16BE"?>"#));
        Ok(())
    }

    #[test]
    fn test_utf16_output_is_transcoded() -> Result<(), EncodeError> {
        let encoder = XmlJsonEncoder::new();
        let options = EncodeOptions::new().with_encoding(TextEncoding::Utf16Le);
        let bytes = encoder.encode_to_vec(&Element::from("x"), &options)?;
        let text = encoder.encode_to_string(&Element::from("x"), &options)?;
        assert_eq!(bytes.len(), text.encode_utf16().count() * 2);
        assert_eq!(bytes.get(..2), Some(&[b'<', 0][..]));
        Ok(())
    }
}
