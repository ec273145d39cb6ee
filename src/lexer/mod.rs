//! Lexical analysis
//!
//! Converts a character source into a lazy stream of tokens using a
//! table-driven finite-state scanner.

mod encoding;
mod position;
mod scanner;
mod source;
mod stream;
mod table;
mod token;

pub use encoding::Encoding;
pub use position::Position;
pub use scanner::Scanner;
pub use source::{CharSource, ReaderSource, StrSource, DEFAULT_BUFFER_SIZE};
pub use stream::{tokenize, TokenStream};
pub use table::{transition, Action, CharClass, Next, State};
pub use token::{Token, TokenKind};
