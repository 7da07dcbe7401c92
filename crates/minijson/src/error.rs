//! Error types for parsing operations.

use thiserror::Error;

/// A parse failure.
///
/// Only the first failure encountered during a parse is reported. `offset` is
/// the byte position of the cursor when that failure was recorded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse error at byte {offset}: {message}")]
pub struct ParseError {
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }

    /// The diagnostic without the position prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convenience alias used throughout minijson.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offset_and_message() {
        let err = ParseError::new(7, "end of json");
        assert_eq!(err.to_string(), "parse error at byte 7: end of json");
        assert_eq!(err.message(), "end of json");
    }
}
