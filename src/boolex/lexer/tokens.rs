//! Token definitions for Boolean gate expressions
//!
//! This module defines all the tokens that can be produced by the
//! expression lexer. The tokens are defined using the logos derive macro
//! for efficient tokenization. Operator keywords match case-insensitively
//! and literal letters are upper-cased, so token values are always in
//! their normalized surface form.

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in a Boolean gate expression
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Grouping
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // Operator keywords, any casing accepted
    #[token("and", ignore(ascii_case))]
    And,
    #[token("or", ignore(ascii_case))]
    Or,
    #[token("not", ignore(ascii_case))]
    Not,
    #[token("nand", ignore(ascii_case))]
    Nand,
    #[token("nor", ignore(ascii_case))]
    Nor,
    #[token("xor", ignore(ascii_case))]
    Xor,

    // A single-letter variable name, normalized to upper case.
    // Keywords win over letters by maximal munch, so "band" lexes as
    // Literal('B') followed by And.
    #[regex(r"[a-zA-Z]", |lex| { (lex.slice().as_bytes()[0] as char).to_ascii_uppercase() })]
    Literal(char),
}

/// The three token categories of the expression grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Paren,
    Operator,
    Literal,
}

impl Token {
    /// Get the category this token belongs to
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::OpenParen | Token::CloseParen => TokenKind::Paren,
            Token::And | Token::Or | Token::Not | Token::Nand | Token::Nor | Token::Xor => {
                TokenKind::Operator
            }
            Token::Literal(_) => TokenKind::Literal,
        }
    }

    /// Check if this token is a parenthesis
    pub fn is_paren(&self) -> bool {
        matches!(self, Token::OpenParen | Token::CloseParen)
    }

    /// Check if this token is an operator keyword
    pub fn is_operator(&self) -> bool {
        self.kind() == TokenKind::Operator
    }

    /// Check if this token is a variable literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }
}

impl fmt::Display for Token {
    /// The normalized surface form of the token, as shown in diagnostics
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::And => write!(f, "AND"),
            Token::Or => write!(f, "OR"),
            Token::Not => write!(f, "NOT"),
            Token::Nand => write!(f, "NAND"),
            Token::Nor => write!(f, "NOR"),
            Token::Xor => write!(f, "XOR"),
            Token::Literal(name) => write!(f, "{}", name),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Paren => write!(f, "paren"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::Literal => write!(f, "literal"),
        }
    }
}
