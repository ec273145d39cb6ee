//! Character classes and the scanner's transition table.

use self::Action as A;
use super::token::TokenKind::{self, LeftParenthesis, Number, RightParenthesis, Symbol};

/// Category of the character under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Anything that is not one of the classes below
    Other = 0,
    /// ASCII decimal digit
    Digit = 1,
    /// `(`
    OpenParen = 2,
    /// `)`
    CloseParen = 3,
    /// Any Unicode whitespace, newlines included
    Whitespace = 4,
    /// No more input
    EndOfInput = 5,
}

impl CharClass {
    /// Number of classes, i.e. columns in the transition table
    pub const COUNT: usize = 6;

    /// Classifies `c`; `None` stands for end-of-input
    pub fn of(c: Option<char>) -> CharClass {
        match c {
            None => CharClass::EndOfInput,
            Some('(') => CharClass::OpenParen,
            Some(')') => CharClass::CloseParen,
            Some(c) if c.is_ascii_digit() => CharClass::Digit,
            Some(c) if c.is_whitespace() => CharClass::Whitespace,
            Some(_) => CharClass::Other,
        }
    }

    /// Whether the class closes a pending symbol or number
    pub fn is_terminator(self) -> bool {
        matches!(
            self,
            CharClass::OpenParen
                | CharClass::CloseParen
                | CharClass::Whitespace
                | CharClass::EndOfInput
        )
    }
}

/// Scanner state, one row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Between tokens
    Start = 0,
    /// Inside a symbol
    InSymbol = 1,
    /// Inside a number
    InNumber = 2,
}

/// Where a transition leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Next {
    /// Keep scanning in the given state
    State(State),
    /// The scan is over: a token was emitted or the input is exhausted
    Terminal,
    /// The current character cannot appear here
    Error,
}

/// What the scanner does for one (state, class) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    /// Where to go next
    pub next: Next,
    /// Append the current character to the token text
    pub accumulate: bool,
    /// Consume the current character
    pub advance: bool,
    /// Token to emit, if any
    pub emit: Option<TokenKind>,
}

impl Action {
    /// Accumulate, advance, continue in `state`
    const fn accumulate(state: State) -> Action {
        Action {
            next: Next::State(state),
            accumulate: true,
            advance: true,
            emit: None,
        }
    }

    /// Advance without accumulating, continue in `state`
    const fn skip(state: State) -> Action {
        Action {
            next: Next::State(state),
            accumulate: false,
            advance: true,
            emit: None,
        }
    }

    /// Emit `kind`, consuming the current character
    const fn emit_advance(kind: TokenKind) -> Action {
        Action {
            next: Next::Terminal,
            accumulate: false,
            advance: true,
            emit: Some(kind),
        }
    }

    /// Emit `kind`, leaving the terminator for the next scan
    const fn emit(kind: TokenKind) -> Action {
        Action {
            next: Next::Terminal,
            accumulate: false,
            advance: false,
            emit: Some(kind),
        }
    }

    const fn exhausted() -> Action {
        Action {
            next: Next::Terminal,
            accumulate: false,
            advance: false,
            emit: None,
        }
    }

    const fn error() -> Action {
        Action {
            next: Next::Error,
            accumulate: false,
            advance: false,
            emit: None,
        }
    }
}

#[rustfmt::skip]
static TRANSITIONS: [[Action; CharClass::COUNT]; 3] = [
    //  Other                          Digit                          (                               )                                whitespace                EOF
    [A::accumulate(State::InSymbol), A::accumulate(State::InNumber), A::emit_advance(LeftParenthesis), A::emit_advance(RightParenthesis), A::skip(State::Start), A::exhausted()], // Start
    [A::accumulate(State::InSymbol), A::accumulate(State::InSymbol), A::emit(Symbol),                  A::emit(Symbol),                   A::emit(Symbol),       A::emit(Symbol)], // InSymbol
    [A::error(),                     A::accumulate(State::InNumber), A::emit(Number),                  A::emit(Number),                   A::emit(Number),       A::emit(Number)], // InNumber
];

/// Looks up the action for `class` in `state`
pub fn transition(state: State, class: CharClass) -> Action {
    TRANSITIONS[state as usize][class as usize]
}
