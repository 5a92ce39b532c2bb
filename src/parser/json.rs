// parser/json.rs
//! JSON parser implementation.
//!
//! This module provides a recursive descent parser for JSON documents that:
//! - Validates JSON syntax
//! - Builds an [`Element`] tree that keeps member order and duplicate keys
//! - Keeps integers and floats apart
//! - Enforces the nesting, size and entry limits of [`ParserConfig`]

use super::{config::ParserConfig, config::ParsingContext, lexer::Lexer, token::Token};
use crate::element::Element;
use crate::error::{ParseError, Result, SyntaxError};
use tracing::{debug, instrument};

/// Parser for JSON documents
pub struct JsonParser {
    /// Lexer that provides tokens
    lexer: Lexer,
    /// Current token being processed
    current_token: Token,
    config: ParserConfig,
    context: ParsingContext,
}

impl JsonParser {
    /// Creates a new JSON parser for the given input
    pub fn new(input: &str) -> Result<Self> {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &str, config: ParserConfig) -> Result<Self> {
        config.validate_size(input)?;
        let mut lexer = Lexer::with_config(input, config);
        let current_token = lexer.next_token()?;
        Ok(Self {
            lexer,
            current_token,
            config,
            context: ParsingContext::new(),
        })
    }

    fn advance(&mut self) -> Result<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        self.syntax_error(SyntaxError::Expected {
            expected: expected.to_string(),
            found: self.current_token.describe(),
        })
    }

    fn syntax_error(&self, error: SyntaxError) -> ParseError {
        let (line, column) = self.lexer.location();
        ParseError::new(error).with_location(line, column)
    }

    /// Parses a complete JSON document
    /// # Returns
    /// - Ok(Element) holding the document tree
    /// - Err if the input is not valid JSON
    #[instrument(skip(self))]
    pub fn parse(&mut self) -> Result<Element> {
        let element = self.parse_value()?;

        // Check for trailing content
        if self.current_token != Token::Eof {
            return Err(self.syntax_error(SyntaxError::TrailingContent));
        }

        debug!(kind = %element.kind(), members = element.len(), "parsed JSON document");
        Ok(element)
    }

    /// Parses a JSON value
    fn parse_value(&mut self) -> Result<Element> {
        let element = match &self.current_token {
            Token::LeftBrace => return self.parse_object(),
            Token::LeftBracket => return self.parse_array(),
            Token::String(s) => Element::string(s.clone()),
            Token::Number(n) => Element::number(n.clone()),
            Token::Boolean(b) => Element::boolean(*b),
            Token::Null => Element::null(),
            _ => return Err(self.unexpected("a value")),
        };
        self.advance()?;
        Ok(element)
    }

    /// Parses a JSON object
    fn parse_object(&mut self) -> Result<Element> {
        self.context.enter_nested(&self.config)?;
        self.advance()?; // consume '{'

        let mut members: Vec<(String, Element)> = Vec::new();

        // Handle empty object
        if self.current_token == Token::RightBrace {
            self.advance()?;
            self.context.exit_nested();
            return Ok(Element::object(members));
        }

        loop {
            // Parse key - ONLY accept string tokens
            let key = match &self.current_token {
                Token::String(s) => s.clone(),
                _ => return Err(self.unexpected("a string key")),
            };
            self.advance()?;

            if self.current_token != Token::Colon {
                return Err(self.unexpected("':'"));
            }
            self.advance()?;

            let value = self.parse_value()?;
            members.push((key, value));
            self.config.validate_object_entries(members.len())?;

            // Handle comma or end of object
            match self.current_token {
                Token::Comma => {
                    self.advance()?;
                    if self.current_token == Token::RightBrace {
                        return Err(self.syntax_error(SyntaxError::TrailingComma));
                    }
                }
                Token::RightBrace => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("',' or '}'")),
            }
        }

        self.context.exit_nested();
        Ok(Element::object(members))
    }

    /// Parses a JSON array
    fn parse_array(&mut self) -> Result<Element> {
        self.context.enter_nested(&self.config)?;
        self.advance()?; // consume '['

        let mut items = Vec::new();

        // Handle empty array
        if self.current_token == Token::RightBracket {
            self.advance()?;
            self.context.exit_nested();
            return Ok(Element::array(items));
        }

        loop {
            items.push(self.parse_value()?);

            match self.current_token {
                Token::Comma => {
                    self.advance()?;
                    if self.current_token == Token::RightBracket {
                        return Err(self.syntax_error(SyntaxError::TrailingComma));
                    }
                }
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }

        self.context.exit_nested();
        Ok(Element::array(items))
    }
}
