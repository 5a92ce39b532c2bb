//! Per-call encoding options

use crate::culture::Culture;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text encoding of the bytes written to the sink. No byte-order mark is
/// written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported text encoding '{0}' (expected utf-8, utf-16le or utf-16be)")]
pub struct UnsupportedEncoding(pub String);

impl TextEncoding {
    /// Name written into the XML declaration
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16LE",
            Self::Utf16Be => "utf-16BE",
        }
    }

    pub fn encode(self, text: String) -> Vec<u8> {
        match self {
            Self::Utf8 => text.into_bytes(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = UnsupportedEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-16" | "utf16" | "utf-16le" | "utf16le" => Ok(Self::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Self::Utf16Be),
            _ => Err(UnsupportedEncoding(s.to_string())),
        }
    }
}

/// Writer used for the final serialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Type-tagged XML document
    #[default]
    Xml,
    /// JSON text read back through the mapping convention
    Json,
}

/// Options for a single encode call
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub encoding: TextEncoding,
    pub pretty: bool,
    pub culture: Culture,
    pub format: OutputFormat,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_names() {
        assert_eq!("UTF-8".parse(), Ok(TextEncoding::Utf8));
        assert_eq!("utf-16".parse(), Ok(TextEncoding::Utf16Le));
        assert_eq!("UTF-16BE".parse(), Ok(TextEncoding::Utf16Be));
        assert_eq!(
            "latin1".parse::<TextEncoding>(),
            Err(UnsupportedEncoding("latin1".to_string()))
        );
    }

    #[test]
    fn test_utf16_transcoding() {
        assert_eq!(
            TextEncoding::Utf16Le.encode("a\u{e9}".to_string()),
            vec![0x61, 0x00, 0xe9, 0x00]
        );
        assert_eq!(TextEncoding::Utf16Be.encode("a".to_string()), vec![0x00, 0x61]);
        assert_eq!(
            TextEncoding::Utf16Le.encode("\u{1F600}".to_string()),
            vec![0x3d, 0xd8, 0x00, 0xde]
        );
    }

    #[test]
    fn test_defaults() {
        let options = EncodeOptions::default();
        assert_eq!(options.encoding, TextEncoding::Utf8);
        assert!(!options.pretty);
        assert!(options.culture.is_invariant());
        assert_eq!(options.format, OutputFormat::Xml);
    }
}
