mod number_parser;
mod string_parser;

use super::config::ParserConfig;
use super::token::Token;
use crate::error::{LexicalError, ParseError, ParseErrorKind, Result};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    pub(crate) current_char: Option<char>,
    pub(crate) config: ParserConfig,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &str, config: ParserConfig) -> Self {
        let input: Vec<char> = input.chars().collect();
        let current_char = input.first().copied();
        Self {
            input,
            position: 0,
            current_char,
            config,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn advance(&mut self) {
        if self.current_char == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    /// Line and column of the current character (1-based)
    pub fn location(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    pub(crate) fn error(&self, kind: impl Into<ParseErrorKind>) -> ParseError {
        ParseError::new(kind).with_location(self.line, self.column)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.current_char {
            self.advance();
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let Some(c) = self.current_char else {
            return Ok(Token::Eof);
        };

        let token = match c {
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            ':' => Token::Colon,
            ',' => Token::Comma,
            '"' => return string_parser::read_string(self).map(Token::String),
            '0'..='9' | '-' => return number_parser::read_number(self).map(Token::Number),
            't' => return self.read_literal("true", Token::Boolean(true)),
            'f' => return self.read_literal("false", Token::Boolean(false)),
            'n' => return self.read_literal("null", Token::Null),
            _ => return Err(self.error(LexicalError::InvalidToken(c.to_string()))),
        };
        self.advance();
        Ok(token)
    }

    /// Reads a bare word and accepts it only if it is exactly `word`
    fn read_literal(&mut self, word: &str, token: Token) -> Result<Token> {
        let (line, column) = self.location();
        let mut value = String::new();

        while let Some(c) = self.current_char {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            value.push(c);
            self.advance();
        }

        if value == word {
            Ok(token)
        } else {
            Err(ParseError::new(LexicalError::InvalidToken(value)).with_location(line, column))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Scalar;

    fn tokens(input: &str) -> Result<Vec<Token>> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token()?;
            if token == Token::Eof {
                return Ok(out);
            }
            out.push(token);
        }
    }

    #[test]
    fn test_punctuation_and_literals() -> Result<()> {
        assert_eq!(
            tokens(r#"{"a": [true, null, -1.5e2]}"#)?,
            vec![
                Token::LeftBrace,
                Token::String("a".to_string()),
                Token::Colon,
                Token::LeftBracket,
                Token::Boolean(true),
                Token::Comma,
                Token::Null,
                Token::Comma,
                Token::Number(Scalar::Float(-150.0)),
                Token::RightBracket,
                Token::RightBrace,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_bare_words_are_rejected_with_location() {
        let err = tokens("[\n  nul]").err();
        assert_eq!(
            err.as_ref().map(ParseError::kind),
            Some(&ParseErrorKind::Lexical(LexicalError::InvalidToken("nul".to_string())))
        );
        assert_eq!(
            err.and_then(|e| e.location()).map(|l| (l.line, l.column)),
            Some((2, 3))
        );
    }

    #[test]
    fn test_single_quotes_are_invalid() {
        assert!(tokens("'a'").is_err());
    }
}
