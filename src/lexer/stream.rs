//! Lazy, pull-based token sequence.
//!
//! A [`TokenStream`] owns one [`Scanner`] and, through it, one character
//! source. Tokens are scanned on demand, one per
//! [`TokenStream::take_token`], and the stream is consumed front to back
//! exactly once.
//!
//! ```
//! use lisp_lexer::{Token, TokenStream};
//!
//! # fn main() -> lisp_lexer::Result<()> {
//! let mut stream = TokenStream::from_text("(foo 42)");
//! let mut tokens = Vec::new();
//! while stream.peek_available()? {
//!     tokens.push(stream.take_token()?);
//! }
//! stream.close();
//!
//! assert_eq!(tokens[1], Token::Symbol("foo".to_string()));
//! assert_eq!(tokens[2], Token::Number(42));
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::Read;
use std::iter::FusedIterator;
use std::path::Path;

use super::encoding::Encoding;
use super::position::Position;
use super::scanner::Scanner;
use super::source::{CharSource, ReaderSource, StrSource};
use super::token::Token;
use crate::config::LexerConfig;
use crate::error::{Error, Result};

/// Result of the last scan, held until consumed
#[derive(Debug)]
enum Slot {
    /// Nothing scanned yet
    Empty,
    /// A token waiting to be taken
    Ready(Token),
    /// The input has no more tokens
    Exhausted,
    /// The last scan failed, or the stream was closed; the stream is unusable
    Failed {
        error: Error,
        /// Whether the iterator already yielded the error
        reported: bool,
    },
}

/// Lazy sequence of tokens read from one source
#[derive(Debug)]
pub struct TokenStream<S> {
    /// `None` once closed
    scanner: Option<Scanner<S>>,
    slot: Slot,
}

impl<S: CharSource> TokenStream<S> {
    /// Creates a stream over `source` with the default configuration
    pub fn new(source: S) -> Self {
        TokenStream {
            scanner: Some(Scanner::new(source)),
            slot: Slot::Empty,
        }
    }

    /// Creates a stream over `source` using the limits in `config`
    pub fn with_config(source: S, config: &LexerConfig) -> Result<Self> {
        config.validate()?;
        Ok(TokenStream {
            scanner: Some(Scanner::with_max_token_len(source, config.max_token_len)),
            slot: Slot::Empty,
        })
    }

    /// Returns whether another token is available
    ///
    /// Scans at most once and keeps the token until [`take_token`](Self::take_token).
    /// After a fatal scan error (see [`Error::is_fatal`]) the same error is
    /// returned again without touching the source.
    pub fn peek_available(&mut self) -> Result<bool> {
        let scanner = self.scanner.as_mut().ok_or(Error::Closed)?;

        match &self.slot {
            Slot::Ready(_) => return Ok(true),
            Slot::Exhausted => return Ok(false),
            Slot::Failed { error, .. } => return Err(error.clone()),
            Slot::Empty => {}
        }

        match scanner.scan() {
            Ok(Some(token)) => {
                self.slot = Slot::Ready(token);
                Ok(true)
            }
            Ok(None) => {
                tracing::debug!(position = %scanner.position(), "token stream exhausted");
                self.slot = Slot::Exhausted;
                Ok(false)
            }
            Err(error) => {
                tracing::warn!(%error, "scan failed");
                if error.is_fatal() {
                    self.slot = Slot::Failed {
                        error: error.clone(),
                        reported: false,
                    };
                }
                Err(error)
            }
        }
    }

    /// Takes the next token
    ///
    /// Fails with [`Error::NoMoreTokens`] when the stream is exhausted.
    pub fn take_token(&mut self) -> Result<Token> {
        if !self.peek_available()? {
            return Err(Error::NoMoreTokens);
        }

        match std::mem::replace(&mut self.slot, Slot::Empty) {
            Slot::Ready(token) => Ok(token),
            other => {
                self.slot = other;
                Err(Error::NoMoreTokens)
            }
        }
    }

    /// Releases the source
    ///
    /// Closing an already closed stream does nothing. Every other use
    /// afterwards fails with [`Error::Closed`].
    pub fn close(&mut self) {
        if let Some(scanner) = self.scanner.take() {
            tracing::debug!(position = %scanner.position(), "closing token stream");
            self.slot = Slot::Failed {
                error: Error::Closed,
                reported: false,
            };
        }
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.scanner.is_none()
    }

    /// Position of the next unread character, `None` once closed
    pub fn position(&self) -> Option<Position> {
        self.scanner.as_ref().map(Scanner::position)
    }
}

impl<'a> TokenStream<StrSource<'a>> {
    /// Creates a stream over an in-memory string
    pub fn from_text(text: &'a str) -> Self {
        TokenStream::new(StrSource::new(text))
    }
}

impl<R: Read> TokenStream<ReaderSource<R>> {
    /// Creates a stream decoding `reader` as described by `config`
    pub fn from_reader(reader: R, config: &LexerConfig) -> Result<Self> {
        let source = ReaderSource::with_encoding(reader, config.encoding, config.buffer_size);
        TokenStream::with_config(source, config)
    }
}

impl TokenStream<ReaderSource<File>> {
    /// Opens the file at `path`, decoding it as `encoding`
    pub fn open(path: impl AsRef<Path>, encoding: Encoding) -> Result<Self> {
        Self::open_with_config(path, &LexerConfig::default().with_encoding(encoding))
    }

    /// Opens the file at `path` with the given configuration
    pub fn open_with_config(path: impl AsRef<Path>, config: &LexerConfig) -> Result<Self> {
        let path = path.as_ref();
        config.validate()?;
        let file = File::open(path)?;
        tracing::debug!(
            path = %path.display(),
            encoding = %config.encoding,
            "opened token stream"
        );
        TokenStream::from_reader(file, config)
    }
}

/// Yields each token as `Ok`, a failed scan once as `Err`, then stops
///
/// A closed stream yields [`Error::Closed`] once.
impl<S: CharSource> Iterator for TokenStream<S> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.slot, Slot::Failed { reported: true, .. }) {
            return None;
        }

        match self.peek_available() {
            Ok(true) => Some(self.take_token()),
            Ok(false) => None,
            Err(error) => {
                if let Slot::Failed { reported, .. } = &mut self.slot {
                    *reported = true;
                }
                Some(Err(error))
            }
        }
    }
}

impl<S: CharSource> FusedIterator for TokenStream<S> {}

/// Tokenizes a whole string
///
/// ```
/// use lisp_lexer::{tokenize, Token};
///
/// let tokens = tokenize("(a 1)").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[2], Token::Number(1));
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    TokenStream::from_text(text).collect()
}
