//! JSON text reader producing [`Element`](crate::element::Element) trees

pub mod config;
pub mod json;
pub mod lexer;
pub mod token;

pub use config::{ParserConfig, ParsingContext};
pub use json::JsonParser;
pub use lexer::Lexer;
pub use token::Token;
