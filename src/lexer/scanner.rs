use super::position::Position;
use super::source::CharSource;
use super::table::{transition, CharClass, Next, State};
use super::token::{Token, TokenKind};
use crate::config::DEFAULT_MAX_TOKEN_LEN;
use crate::error::{Error, Result};

/// Table-driven scanner producing one token per call to [`Scanner::scan`]
#[derive(Debug)]
pub struct Scanner<S> {
    /// Where characters come from
    source: S,
    /// Text of the symbol or number being scanned
    word: String,
    /// Characters in `word`
    word_len: usize,
    /// Position of the character under the cursor
    position: Position,
    /// Longest symbol or number accepted
    max_token_len: usize,
}

impl<S: CharSource> Scanner<S> {
    /// Creates a scanner reading from `source`
    pub fn new(source: S) -> Self {
        Self::with_max_token_len(source, DEFAULT_MAX_TOKEN_LEN)
    }

    /// Creates a scanner rejecting symbols and numbers longer than `max_token_len`
    pub fn with_max_token_len(source: S, max_token_len: usize) -> Self {
        Scanner {
            source,
            word: String::new(),
            word_len: 0,
            position: Position::default(),
            max_token_len,
        }
    }

    /// Position of the next unread character
    pub fn position(&self) -> Position {
        self.position
    }

    /// Consumes the scanner, returning its source
    pub fn into_source(self) -> S {
        self.source
    }

    /// Scans the next token
    ///
    /// Returns `Ok(None)` once the input is exhausted. Terminators that close
    /// a symbol or number are left unread for the next call.
    pub fn scan(&mut self) -> Result<Option<Token>> {
        self.word.clear();
        self.word_len = 0;

        let mut state = State::Start;
        let mut start = self.position;

        loop {
            let c = self.source.current()?;
            let action = transition(state, CharClass::of(c));

            if action.accumulate {
                if let Some(c) = c {
                    if self.word_len == 0 {
                        start = self.position;
                    }
                    if self.word_len >= self.max_token_len {
                        return Err(Error::TokenTooLong {
                            limit: self.max_token_len,
                            position: start,
                        });
                    }
                    self.word.push(c);
                    self.word_len += 1;
                }
            }

            let token = match action.emit {
                Some(kind) => {
                    if self.word_len == 0 {
                        start = self.position;
                    }
                    Some(self.build(kind, start)?)
                }
                None => None,
            };

            if action.advance {
                if let Some(c) = c {
                    self.source.advance();
                    self.position.advance(c);
                }
            }

            if let Some(token) = token {
                tracing::trace!(%token, %start, "token");
                return Ok(Some(token));
            }

            match action.next {
                Next::State(next) => state = next,
                Next::Terminal => return Ok(None),
                Next::Error => {
                    // Only reachable on a character, never at end of input
                    let character = c.unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(Error::MalformedToken {
                        character,
                        position: self.position,
                    });
                }
            }
        }
    }

    fn build(&self, kind: TokenKind, start: Position) -> Result<Token> {
        match kind {
            TokenKind::LeftParenthesis => Ok(Token::LeftParenthesis),
            TokenKind::RightParenthesis => Ok(Token::RightParenthesis),
            TokenKind::Symbol => Ok(Token::Symbol(self.word.clone())),
            TokenKind::Number => {
                self.word
                    .parse::<i64>()
                    .map(Token::Number)
                    .map_err(|_| Error::NumericOverflow {
                        text: self.word.clone(),
                        position: start,
                    })
            }
        }
    }
}
