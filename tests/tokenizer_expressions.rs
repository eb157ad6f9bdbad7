//! Tokenization tests for whole expressions
//!
//! These tests verify exact token sequences for representative inputs,
//! including the lenient handling of input that matches no token shape.

use boolex::boolex::lexer::{tokenize, tokenize_strict, tokenize_with_spans, LexError, Token};

#[test]
fn test_simple_expression() {
    let tokens = tokenize("A AND B");
    assert_eq!(
        tokens,
        vec![
            Token::Literal('A'), // "A"
            Token::And,          // "AND"
            Token::Literal('B'), // "B"
        ]
    );
}

#[test]
fn test_parenthesized_expression() {
    let tokens = tokenize("NOT (A NAND B) XOR C");
    assert_eq!(
        tokens,
        vec![
            Token::Not,          // "NOT"
            Token::OpenParen,    // "("
            Token::Literal('A'), // "A"
            Token::Nand,         // "NAND"
            Token::Literal('B'), // "B"
            Token::CloseParen,   // ")"
            Token::Xor,          // "XOR"
            Token::Literal('C'), // "C"
        ]
    );
}

#[test]
fn test_case_insensitive_values_are_normalized() {
    assert_eq!(tokenize("a and b"), tokenize("A AND B"));
    assert_eq!(
        tokenize("nOr x"),
        vec![Token::Nor, Token::Literal('X')]
    );
}

#[test]
fn test_whitespace_carries_no_meaning() {
    assert_eq!(tokenize(" A   AND    B "), tokenize("A AND B"));
    assert_eq!(tokenize("(A)AND(B)"), tokenize("( A ) AND ( B )"));
}

#[test]
fn test_unmatched_input_is_silently_skipped() {
    // Digits and punctuation produce no tokens; the surrounding
    // expression is unaffected
    assert_eq!(tokenize("A + B"), vec![Token::Literal('A'), Token::Literal('B')]);
    assert_eq!(tokenize("42"), vec![]);
    assert_eq!(
        tokenize("A AND 3 B"),
        vec![Token::Literal('A'), Token::And, Token::Literal('B')]
    );
}

#[test]
fn test_spans_point_into_the_source() {
    let source = "NOT  (A)";
    let tokens = tokenize_with_spans(source);
    assert_eq!(
        tokens,
        vec![
            (Token::Not, 0..3),
            (Token::OpenParen, 5..6),
            (Token::Literal('A'), 6..7),
            (Token::CloseParen, 7..8),
        ]
    );
    assert_eq!(&source[0..3], "NOT");
}

#[test]
fn test_strict_tokenization_rejects_stray_characters() {
    assert_eq!(
        tokenize_strict("A ! B"),
        Err(LexError::UnrecognizedCharacter {
            character: '!',
            position: 2,
        })
    );

    // Clean input is identical in both modes
    assert_eq!(tokenize_strict("A AND B"), Ok(tokenize("A AND B")));
}
