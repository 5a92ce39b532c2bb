#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use std::fs;
use xmljson::error::{LexicalError, ParseErrorKind, SyntaxError};
use xmljson::{parse_json, ElementType, JsonParser, Scalar};

fn read_test_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read file: {}", path))
}

#[test]
fn test_parse_sample_file() {
    let doc = parse_json(&read_test_file("tests/input/sample.json")).unwrap();
    assert_eq!(doc.kind(), ElementType::Object);
    assert_eq!(doc.len(), 8);

    let last = &doc.children()[7];
    assert_eq!(last.name(), Some("1st place"));
    assert_eq!(last.value(), Some(&Scalar::from("gold")));

    let tags = &doc.children()[5];
    assert_eq!(tags.kind(), ElementType::Array);
    assert!(tags.iter().all(|item| item.name().is_none()));
}

#[test]
fn test_parse_large_file() {
    let doc = parse_json(&read_test_file("tests/input/large.json")).unwrap();
    let records = &doc.children()[0];
    assert_eq!(records.name(), Some("records"));
    assert_eq!(records.len(), 400);
}

#[test]
fn test_number_kinds() {
    let doc = parse_json("[0, -12, 18446744073709551615, 1.5e3, -0.25]").unwrap();
    let values: Vec<_> = doc.iter().filter_map(|e| e.value().cloned()).collect();
    assert_eq!(
        values,
        vec![
            Scalar::Int(0),
            Scalar::Int(-12),
            Scalar::UInt(u64::MAX),
            Scalar::Float(1500.0),
            Scalar::Float(-0.25),
        ]
    );
}

#[test]
fn test_string_escapes() {
    let doc = parse_json(r#""tab\tquote\"slash\/uniA""#).unwrap();
    assert_eq!(doc.value(), Some(&Scalar::from("tab\tquote\"slash/uniA")));
}

#[test]
fn test_scalar_documents() {
    assert_eq!(parse_json("true").unwrap().kind(), ElementType::Boolean);
    assert_eq!(parse_json(" null ").unwrap().kind(), ElementType::Null);
    assert_eq!(parse_json("\"\"").unwrap().kind(), ElementType::String);
}

#[test]
fn test_invalid_documents() {
    let cases = [
        (
            "",
            ParseErrorKind::Syntax(SyntaxError::Expected {
                expected: "a value".to_string(),
                found: "end of input".to_string(),
            }),
        ),
        ("[1,]", ParseErrorKind::Syntax(SyntaxError::TrailingComma)),
        ("{} []", ParseErrorKind::Syntax(SyntaxError::TrailingContent)),
        ("01", ParseErrorKind::Lexical(LexicalError::InvalidNumber("0".to_string()))),
    ];
    for (input, expected) in cases {
        let err = JsonParser::new(input)
            .and_then(|mut parser| parser.parse())
            .unwrap_err();
        assert_eq!(err.kind(), &expected, "input: {input:?}");
    }
}

#[test]
fn test_unquoted_key_is_rejected() {
    let err = parse_json("{a: 1}").unwrap_err();
    assert!(err.location().is_some());
}

#[test]
fn test_error_location_points_at_second_line() {
    let err = parse_json("{\n  \"a\": tru\n}").unwrap_err();
    let location = err.location().unwrap();
    assert_eq!(location.line, 2);
}
