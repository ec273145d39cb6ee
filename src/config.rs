//! Lexer configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lexer::{Encoding, DEFAULT_BUFFER_SIZE};

/// Longest symbol or number accepted by default, in characters
pub const DEFAULT_MAX_TOKEN_LEN: usize = 1024;

/// Options for opening a token stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Encoding of byte sources (default: UTF-8)
    pub encoding: Encoding,
    /// Bytes read from the source per refill (default: 8192)
    pub buffer_size: usize,
    /// Longest symbol or number accepted, in characters (default: 1024)
    pub max_token_len: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::Utf8,
            buffer_size: DEFAULT_BUFFER_SIZE,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }
}

impl LexerConfig {
    /// Parses a JSON configuration; missing fields take their defaults
    ///
    /// ```
    /// use lisp_lexer::{Encoding, LexerConfig};
    ///
    /// let config = LexerConfig::from_json(r#"{"encoding": "latin1"}"#).unwrap();
    /// assert_eq!(config.encoding, Encoding::Latin1);
    /// assert_eq!(config.max_token_len, 1024);
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let config: LexerConfig = serde_json::from_str(text)
            .map_err(|e| Error::config(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the source encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the read buffer size
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Sets the maximum token length
    pub fn with_max_token_len(mut self, max_token_len: usize) -> Self {
        self.max_token_len = max_token_len;
        self
    }

    /// Rejects values the lexer cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(Error::config("buffer_size must be greater than zero"));
        }
        if self.max_token_len == 0 {
            return Err(Error::config("max_token_len must be greater than zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LexerConfig::default();
        assert_eq!(config.encoding, Encoding::Utf8);
        assert_eq!(config.buffer_size, 8192);
        assert_eq!(config.max_token_len, DEFAULT_MAX_TOKEN_LEN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config =
            LexerConfig::from_json(r#"{"encoding": "utf-16le", "max_token_len": 64}"#).unwrap();
        assert_eq!(config.encoding, Encoding::Utf16Le);
        assert_eq!(config.max_token_len, 64);
        assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            LexerConfig::from_json(r#"{"buffer_size": 0}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            LexerConfig::from_json(r#"{"encoding": "klingon"}"#),
            Err(Error::Config(_))
        ));
        assert!(LexerConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_builder() {
        let config = LexerConfig::default()
            .with_encoding(Encoding::Ascii)
            .with_buffer_size(16)
            .with_max_token_len(0);
        assert_eq!(config.encoding, Encoding::Ascii);
        assert_eq!(config.buffer_size, 16);
        assert!(config.validate().is_err());
    }
}
