//! Lexer module for Boolean gate expressions
//!
//! This module contains the tokenization logic for expression text,
//! including token definitions and the lexer implementation.
//!
//! Leniency
//!
//! The default [tokenize] is lenient: any run of characters that matches
//! none of the three token shapes (parenthesis, operator keyword, single
//! letter) is dropped from the stream. Malformed input therefore surfaces
//! downstream as a parse error rather than a lexing error, which matches
//! the interactive behavior this lexer was written for. Callers that want
//! to fail fast on a stray character use [tokenize_strict] instead.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_strict, tokenize_with_spans, LexError};
pub use tokens::{Token, TokenKind};
