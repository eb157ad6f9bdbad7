//! The parser's single failure kind
//!
//! Parse errors are terminal: they propagate immediately to the caller
//! with one descriptive message and no partial tree. Messages carry no
//! position information; expressions are interactive one-liners.

use crate::boolex::lexer::Token;
use std::fmt;

/// Errors raised while parsing a token sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// End of input reached while an operand was expected
    UnexpectedEnd,
    /// A token that cannot start an operand at a primary position
    UnexpectedToken(Token),
    /// A required token (the closing parenthesis) was absent or mismatched
    Expected {
        expected: Token,
        found: Option<Token>,
    },
    /// Tokens remained after a complete top-level expression
    TrailingInput,
}

impl std::error::Error for SyntaxError {}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedEnd => write!(f, "Unexpected end of expression"),
            SyntaxError::UnexpectedToken(token) => write!(f, "Unexpected token: {}", token),
            SyntaxError::Expected {
                expected,
                found: Some(token),
            } => {
                write!(f, "Expected {} but found {}", expected, token)
            }
            SyntaxError::Expected {
                expected,
                found: None,
            } => {
                write!(f, "Expected {} but found end of input", expected)
            }
            SyntaxError::TrailingInput => write!(f, "Unexpected input after expression"),
        }
    }
}
