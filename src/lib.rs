//! # lisp-lexer - Table-Driven Tokenizer for a Minimal LISP
//!
//! Converts a stream of characters into a lazily produced stream of tokens
//! for a minimal parenthesized symbolic language: symbols, integers and
//! parentheses.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! lisp-lexer = "1.0.0"
//! ```
//!
//! ```rust
//! use lisp_lexer::{Token, TokenStream};
//!
//! # fn main() -> lisp_lexer::Result<()> {
//! let tokens: Vec<Token> = TokenStream::from_text("(define answer 42)")
//!     .collect::<lisp_lexer::Result<_>>()?;
//!
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[2], Token::Symbol("answer".to_string()));
//! assert_eq!(tokens[3], Token::Number(42));
//! # Ok(())
//! # }
//! ```
//!
//! Files are read incrementally, one buffer at a time, in an explicit encoding:
//!
//! ```no_run
//! use lisp_lexer::{Encoding, TokenStream};
//!
//! # fn main() -> lisp_lexer::Result<()> {
//! let mut stream = TokenStream::open("program.lisp", Encoding::Latin1)?;
//! while stream.peek_available()? {
//!     println!("{}", stream.take_token()?);
//! }
//! stream.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Tokens
//!
//! - `(` and `)` are tokens of their own
//! - a run of digits is a **number**, parsed as `i64`
//! - any other run of characters up to whitespace, a parenthesis or end of
//!   input is a **symbol** (`foo`, `x1`, `-5`, `set!`)
//! - a number running into a non-digit (`42abc`) is an error
//!
//! Tokens render as `(`, `)`, `<foo>` and `<42>`.
//!
//! ## Architecture
//!
//! ```text
//! CharSource → CharClass → transition table → Scanner → TokenStream → Token
//! ```
//!
//! - [`CharClass`] - classifies one character (or end of input)
//! - [`transition`] - maps (state, class) to an [`Action`]
//! - [`Scanner`] - drives the table, one token per scan
//! - [`TokenStream`] - pull interface with one-shot close
//!
//! Consumption is strictly sequential: a stream owns its scanner and source
//! and is not shared between threads.
//!
//! ## Error Handling
//!
//! ```rust
//! use lisp_lexer::{tokenize, Error};
//!
//! match tokenize("(+ 42abc 1)") {
//!     Err(Error::MalformedToken { character, position }) => {
//!         assert_eq!(character, 'a');
//!         assert_eq!(position.column, 6);
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

/// Version of the lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod lexer;

// Re-export main types
pub use config::{LexerConfig, DEFAULT_MAX_TOKEN_LEN};
pub use error::{Error, Result};
pub use lexer::{
    tokenize, transition, Action, CharClass, CharSource, Encoding, Next, Position, ReaderSource,
    Scanner, State, StrSource, Token, TokenKind, TokenStream,
};
