use crate::{
    element::Element,
    encoder::{EncodeOptions, XmlJsonEncoder},
    error::{EncodeError, ParseError, ParseErrorKind, Result},
    parser::{JsonParser, ParserConfig},
};
use std::fs::{self, File};
use std::io::BufWriter;

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        ParseError::new(ParseErrorKind::Io(format!("Cannot read file {path}: {e}")))
    })
}

/// Creates `path` and encodes `element` into it
pub fn write_encoded(
    path: &str,
    element: &Element,
    options: &EncodeOptions,
) -> std::result::Result<(), EncodeError> {
    let mut writer = BufWriter::new(File::create(path)?);
    XmlJsonEncoder::new().encode(element, &mut writer, options)
}

pub fn parse_json(content: &str) -> Result<Element> {
    let mut parser = JsonParser::new(content)?;
    parser.parse()
}

pub fn parse_json_with_config(content: &str, config: ParserConfig) -> Result<Element> {
    let mut parser = JsonParser::with_config(content, config)?;
    parser.parse()
}

pub fn encode_xml(element: &Element) -> std::result::Result<String, EncodeError> {
    XmlJsonEncoder::new().encode_to_string(element, &EncodeOptions::default())
}
