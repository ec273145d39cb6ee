use serde::{Deserialize, Serialize};

/// A single token read from the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Left parenthesis (
    LeftParenthesis,
    /// Right parenthesis )
    RightParenthesis,
    /// Maximal run of non-terminator characters that does not start with a digit
    Symbol(String),
    /// Maximal run of decimal digits
    Number(i64),
}

/// Payload-free classification of a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Left parenthesis (
    LeftParenthesis,
    /// Right parenthesis )
    RightParenthesis,
    /// Symbol
    Symbol,
    /// Integer literal
    Number,
}

impl Token {
    /// Returns the kind of this token
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::LeftParenthesis => TokenKind::LeftParenthesis,
            Token::RightParenthesis => TokenKind::RightParenthesis,
            Token::Symbol(_) => TokenKind::Symbol,
            Token::Number(_) => TokenKind::Number,
        }
    }

    /// Check if token is a parenthesis
    pub fn is_parenthesis(&self) -> bool {
        matches!(self, Token::LeftParenthesis | Token::RightParenthesis)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
            Token::Symbol(text) => write!(f, "<{}>", text),
            Token::Number(n) => write!(f, "<{}>", n),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            TokenKind::LeftParenthesis => "left parenthesis",
            TokenKind::RightParenthesis => "right parenthesis",
            TokenKind::Symbol => "symbol",
            TokenKind::Number => "number",
        };
        f.write_str(name)
    }
}
