//! Implementation of the expression lexer
//!
//! This module provides convenience functions for tokenizing expression
//! text. The actual tokenization is handled entirely by logos.

use crate::boolex::lexer::tokens::Token;
use logos::Logos;
use std::fmt;

/// Error raised by [tokenize_strict] on input the lexer cannot match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    UnrecognizedCharacter { character: char, position: usize },
}

impl std::error::Error for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Unrecognized character '{}' at position {}",
                    character, position
                )
            }
        }
    }
}

/// Convenience function to tokenize a string and collect all tokens
///
/// Lenient: runs of input that match no token shape are dropped, so a
/// stray character surfaces later as a parse error instead of here.
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Tokenize a string, failing on the first unrecognized character
///
/// The hardened alternative to [tokenize]: instead of dropping input the
/// lexer cannot match, report the offending character and its byte
/// position.
pub fn tokenize_strict(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                let span = lexer.span();
                let character = source[span.start..].chars().next().unwrap_or('\u{fffd}');
                return Err(LexError::UnrecognizedCharacter {
                    character,
                    position: span.start,
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("A AND B");
        assert_eq!(
            tokens,
            vec![Token::Literal('A'), Token::And, Token::Literal('B')]
        );
    }

    #[test]
    fn test_parenthesized_tokenization() {
        let tokens = tokenize("NOT (a or b)");
        assert_eq!(
            tokens,
            vec![
                Token::Not,
                Token::OpenParen,
                Token::Literal('A'),
                Token::Or,
                Token::Literal('B'),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_whitespace_is_irrelevant() {
        assert_eq!(tokenize("A AND B"), tokenize(" A   AND    B "));
        assert_eq!(tokenize("A AND B"), tokenize("\tA\nAND\r\nB"));
    }

    #[test]
    fn test_case_is_irrelevant() {
        assert_eq!(tokenize("a and b"), tokenize("A AND B"));
        assert_eq!(tokenize("nOt X"), tokenize("NOT x"));
    }

    #[test]
    fn test_unrecognized_input_is_dropped() {
        // Digits and punctuation match no token shape and vanish
        assert_eq!(tokenize("A && B"), tokenize("A B"));
        assert_eq!(tokenize("A1 AND B2"), tokenize("A AND B"));
        assert_eq!(tokenize("!?"), vec![]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
        assert_eq!(tokenize("   "), vec![]);
    }

    #[test]
    fn test_tokenize_with_spans() {
        let tokens_with_spans = tokenize_with_spans("A AND B");
        assert_eq!(
            tokens_with_spans,
            vec![
                (Token::Literal('A'), 0..1),
                (Token::And, 2..5),
                (Token::Literal('B'), 6..7),
            ]
        );
    }

    #[test]
    fn test_strict_accepts_clean_input() {
        let tokens = tokenize_strict("NOT (A NAND B)").unwrap();
        assert_eq!(tokens, tokenize("NOT (A NAND B)"));
    }

    #[test]
    fn test_strict_reports_first_bad_character() {
        let err = tokenize_strict("A AND 3").unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                character: '3',
                position: 6,
            }
        );
        assert_eq!(err.to_string(), "Unrecognized character '3' at position 6");
    }
}
