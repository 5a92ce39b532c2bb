use super::Lexer;
use crate::error::{LexicalError, Result, SecurityError};

pub(crate) fn read_string(lexer: &mut Lexer) -> Result<String> {
    // Skip the opening quote
    lexer.advance();

    let mut result = String::new();
    let max_length = lexer.config.max_string_length;

    while let Some(c) = lexer.current_char {
        if result.len() > max_length {
            return Err(lexer.error(SecurityError::MaxStringLengthExceeded));
        }

        match c {
            '"' => {
                // Reached the closing quote
                lexer.advance();
                return Ok(result);
            }
            '\\' => {
                lexer.advance(); // consume '\'
                let Some(escape_char) = lexer.current_char else {
                    return Err(lexer.error(LexicalError::UnexpectedEof));
                };
                let escaped = match escape_char {
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    '/' => '/',
                    '\\' => '\\',
                    '"' => '"',
                    'u' => parse_unicode_escape(lexer)?,
                    _ => return Err(lexer.error(LexicalError::InvalidEscape(escape_char))),
                };
                result.push(escaped);
                if escape_char != 'u' {
                    lexer.advance();
                }
            }
            c if u32::from(c) < 0x20 => {
                return Err(lexer.error(LexicalError::ControlCharacter));
            }
            _ => {
                result.push(c);
                lexer.advance();
            }
        }
    }

    // Ran out of characters before finding a closing quote
    Err(lexer.error(LexicalError::UnexpectedEof))
}

/// Parses the code unit after `\u`, pairing surrogates. Leaves the lexer on
/// the character after the last hex digit.
fn parse_unicode_escape(lexer: &mut Lexer) -> Result<char> {
    let high = read_code_unit(lexer)?;

    let code_point = match high {
        0xD800..=0xDBFF => {
            if lexer.current_char != Some('\\') {
                return Err(lexer.error(LexicalError::InvalidUnicode));
            }
            lexer.advance();
            if lexer.current_char != Some('u') {
                return Err(lexer.error(LexicalError::InvalidUnicode));
            }
            let low = read_code_unit(lexer)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(lexer.error(LexicalError::InvalidUnicode));
            }
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        }
        0xDC00..=0xDFFF => return Err(lexer.error(LexicalError::InvalidUnicode)),
        _ => high,
    };

    char::from_u32(code_point).ok_or_else(|| lexer.error(LexicalError::InvalidUnicode))
}

/// Consumes `u` and exactly four hexadecimal digits
fn read_code_unit(lexer: &mut Lexer) -> Result<u32> {
    lexer.advance(); // skip 'u'

    let mut code_unit = 0u32;
    for _ in 0..4 {
        let Some(c) = lexer.current_char else {
            return Err(lexer.error(LexicalError::UnexpectedEof));
        };
        let Some(digit) = c.to_digit(16) else {
            return Err(lexer.error(LexicalError::InvalidUnicode));
        };
        code_unit = code_unit * 16 + digit;
        lexer.advance();
    }
    Ok(code_unit)
}
