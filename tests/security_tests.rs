#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use xmljson::error::{ParseErrorKind, SecurityError};
use xmljson::parser::config::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_OBJECT_ENTRIES, DEFAULT_MAX_SIZE, DEFAULT_MAX_STRING_LENGTH,
};
use xmljson::{JsonParser, ParserConfig};

fn security_error(input: &str) -> Option<SecurityError> {
    match JsonParser::new(input).and_then(|mut parser| parser.parse()) {
        Err(e) => match e.kind() {
            ParseErrorKind::Security(err) => Some(err.clone()),
            _ => None,
        },
        Ok(_) => None,
    }
}

#[test]
fn test_max_input_size() {
    let large_input = "0".repeat(DEFAULT_MAX_SIZE + 1);
    assert_eq!(
        security_error(&large_input),
        Some(SecurityError::MaxSizeExceeded)
    );
}

#[test]
fn test_max_object_entries() {
    let entries: Vec<String> = (0..=DEFAULT_MAX_OBJECT_ENTRIES)
        .map(|i| format!(r#""key{}":0"#, i))
        .collect();
    let json = format!("{{{}}}", entries.join(","));
    assert_eq!(
        security_error(&json),
        Some(SecurityError::MaxObjectEntriesExceeded)
    );
}

#[test]
fn test_nesting_depth() {
    let too_deep = format!(
        "{}{}",
        "[".repeat(DEFAULT_MAX_DEPTH + 1),
        "]".repeat(DEFAULT_MAX_DEPTH + 1)
    );
    assert_eq!(security_error(&too_deep), Some(SecurityError::MaxDepthExceeded));

    let at_limit = format!(
        "{}{}",
        "[".repeat(DEFAULT_MAX_DEPTH),
        "]".repeat(DEFAULT_MAX_DEPTH)
    );
    assert!(JsonParser::new(&at_limit).unwrap().parse().is_ok());
}

#[test]
fn test_nested_objects_count_towards_depth() {
    let mut json = String::new();
    for _ in 0..=DEFAULT_MAX_DEPTH {
        json.push_str(r#"{"a":"#);
    }
    json.push_str("null");
    json.push_str(&"}".repeat(DEFAULT_MAX_DEPTH + 1));
    assert_eq!(security_error(&json), Some(SecurityError::MaxDepthExceeded));
}

#[test]
fn test_max_string_length() {
    let long = format!("\"{}\"", "x".repeat(DEFAULT_MAX_STRING_LENGTH + 1));
    assert_eq!(
        security_error(&long),
        Some(SecurityError::MaxStringLengthExceeded)
    );
}

#[test]
fn test_custom_limits() {
    let config = ParserConfig {
        max_depth: 2,
        ..ParserConfig::default()
    };
    let result = JsonParser::with_config("[[[]]]", config).and_then(|mut p| p.parse());
    assert!(matches!(
        result.unwrap_err().kind(),
        ParseErrorKind::Security(SecurityError::MaxDepthExceeded)
    ));
}
