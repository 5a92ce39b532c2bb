use crate::error::{ParseError, Result, SecurityError};

pub const DEFAULT_MAX_DEPTH: usize = 100;
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const DEFAULT_MAX_STRING_LENGTH: usize = 1024 * 1024; // 1MB
pub const DEFAULT_MAX_OBJECT_ENTRIES: usize = 10_000;

/// Configuration for parser limits and validation
#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    /// Maximum nesting depth for objects/arrays
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
    /// Maximum string length in bytes
    pub max_string_length: usize,
    /// Maximum number of object entries
    pub max_object_entries: usize,
}

/// Tracks nesting depth during parsing
#[derive(Debug, Default)]
pub struct ParsingContext {
    current_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            max_object_entries: DEFAULT_MAX_OBJECT_ENTRIES,
        }
    }
}

impl ParserConfig {
    pub fn validate_size(&self, input: &str) -> Result<()> {
        if input.len() > self.max_size {
            return Err(ParseError::new(SecurityError::MaxSizeExceeded));
        }
        Ok(())
    }

    pub fn validate_object_entries(&self, count: usize) -> Result<()> {
        if count > self.max_object_entries {
            return Err(ParseError::new(SecurityError::MaxObjectEntriesExceeded));
        }
        Ok(())
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(ParseError::new(SecurityError::MaxDepthExceeded));
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}
