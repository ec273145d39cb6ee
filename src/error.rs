//! Error types for the lexer

use std::sync::Arc;

use thiserror::Error;

use crate::lexer::{Encoding, Position};

/// Lexer errors
#[derive(Error, Debug, Clone)]
pub enum Error {
    // Scan errors
    /// A number ran directly into a character that cannot follow it
    ///
    /// **Triggered by:** A digit run followed by a non-digit, non-terminator character
    /// **Example:** `42abc` fails at `a`
    /// **Prevention:** Separate numbers from symbols with whitespace or parentheses
    #[error("Unexpected character '{character}' at {position}")]
    MalformedToken {
        /// Offending character
        character: char,
        /// Where the character was read
        position: Position,
    },

    /// Digit run does not fit a signed 64-bit integer
    ///
    /// **Triggered by:** `99999999999999999999`
    #[error("Numeric overflow: {text} at {position}")]
    NumericOverflow {
        /// Digits as they appeared in the source
        text: String,
        /// Where the number starts
        position: Position,
    },

    /// Symbol or number longer than the configured maximum
    #[error("Token too long (limit: {limit} characters) at {position}")]
    TokenTooLong {
        /// Configured maximum token length
        limit: usize,
        /// Where the token starts
        position: Position,
    },

    // Source errors
    /// Source bytes are not valid in the selected encoding
    #[error("Invalid {encoding} input at byte offset {byte_offset}")]
    InvalidEncoding {
        /// Encoding used to decode the source
        encoding: Encoding,
        /// Absolute offset of the first offending byte
        byte_offset: u64,
    },

    /// Read failure of the underlying source
    #[error("I/O error: {0}")]
    Io(Arc<std::io::Error>),

    // Stream errors
    /// Token stream used after `close()`
    #[error("The token stream has already been closed")]
    Closed,

    /// `take()` called with no token available
    #[error("No more tokens")]
    NoMoreTokens,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(Arc::new(err))
    }
}

impl Error {
    /// Create a configuration error with a message
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Source position attached to the error, if any
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::MalformedToken { position, .. }
            | Error::NumericOverflow { position, .. }
            | Error::TokenTooLong { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Whether the error leaves a token stream unusable
    ///
    /// Misuse errors (`NoMoreTokens`, `Closed`) and configuration errors don't
    /// poison the stream they were raised on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::MalformedToken { .. }
                | Error::NumericOverflow { .. }
                | Error::TokenTooLong { .. }
                | Error::InvalidEncoding { .. }
                | Error::Io(_)
        )
    }
}

/// Result type for lexer operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_token_message() {
        let err = Error::MalformedToken {
            character: 'a',
            position: Position::new(2, 1, 3),
        };
        assert_eq!(err.to_string(), "Unexpected character 'a' at 1:3");
        assert_eq!(err.position(), Some(Position::new(2, 1, 3)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_io_error_is_wrapped() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
        assert_eq!(err.position(), None);
    }

    #[test]
    fn test_misuse_errors_are_not_fatal() {
        assert!(!Error::Closed.is_fatal());
        assert!(!Error::NoMoreTokens.is_fatal());
        assert!(!Error::config("bad").is_fatal());
    }
}
