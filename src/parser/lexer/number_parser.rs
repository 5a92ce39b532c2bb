use super::Lexer;
use crate::element::Scalar;
use crate::error::{LexicalError, Result};

/// Reads a JSON number. Integers that fit `i64` (or `u64` when positive) keep
/// their integer kind; everything else becomes a float.
pub(crate) fn read_number(lexer: &mut Lexer) -> Result<Scalar> {
    let mut number_str = String::new();
    let mut is_float = false;

    // Handle optional leading '-'
    if lexer.current_char == Some('-') {
        number_str.push('-');
        lexer.advance();
    }

    match lexer.current_char {
        Some('0') => {
            number_str.push('0');
            lexer.advance();
            // No leading zeros
            if lexer.current_char.is_some_and(|c| c.is_ascii_digit()) {
                return Err(invalid(lexer, number_str));
            }
        }
        Some('1'..='9') => {
            read_digits(lexer, &mut number_str);
        }
        _ => return Err(invalid(lexer, number_str)),
    }

    if lexer.current_char == Some('.') {
        is_float = true;
        number_str.push('.');
        lexer.advance();
        if read_digits(lexer, &mut number_str) == 0 {
            return Err(invalid(lexer, number_str));
        }
    }

    if let Some(e @ ('e' | 'E')) = lexer.current_char {
        is_float = true;
        number_str.push(e);
        lexer.advance();
        if let Some(sign @ ('+' | '-')) = lexer.current_char {
            number_str.push(sign);
            lexer.advance();
        }
        if read_digits(lexer, &mut number_str) == 0 {
            return Err(invalid(lexer, number_str));
        }
    }

    if !is_float {
        if let Ok(n) = number_str.parse::<i64>() {
            return Ok(Scalar::Int(n));
        }
        if let Ok(n) = number_str.parse::<u64>() {
            return Ok(Scalar::UInt(n));
        }
    }

    match number_str.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Scalar::Float(n)),
        _ => Err(invalid(lexer, number_str)),
    }
}

fn read_digits(lexer: &mut Lexer, out: &mut String) -> usize {
    let mut count = 0;
    while let Some(c) = lexer.current_char.filter(char::is_ascii_digit) {
        out.push(c);
        lexer.advance();
        count += 1;
    }
    count
}

fn invalid(lexer: &Lexer, number_str: String) -> crate::error::ParseError {
    lexer.error(LexicalError::InvalidNumber(number_str))
}
