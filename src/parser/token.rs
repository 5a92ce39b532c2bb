use crate::element::Scalar;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Colon,        // :
    Comma,        // ,
    String(String),
    Number(Scalar),
    Boolean(bool),
    Null,
    Eof,
}

impl Token {
    /// Short description used in syntax errors
    pub fn describe(&self) -> String {
        match self {
            Self::LeftBrace => "'{'".to_string(),
            Self::RightBrace => "'}'".to_string(),
            Self::LeftBracket => "'['".to_string(),
            Self::RightBracket => "']'".to_string(),
            Self::Colon => "':'".to_string(),
            Self::Comma => "','".to_string(),
            Self::String(_) => "string".to_string(),
            Self::Number(_) => "number".to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Null => "null".to_string(),
            Self::Eof => "end of input".to_string(),
        }
    }
}
