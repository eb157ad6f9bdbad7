//! Diagnostic message tests
//!
//! Parsing either succeeds completely or fails with one descriptive
//! message; these tests pin the message for every error condition.

use boolex::boolex::parser::{parse, parse_expression};

fn error_message(source: &str) -> String {
    match parse(source) {
        Ok(expr) => panic!("expected a parse error for {:?}, got {}", source, expr),
        Err(e) => e.to_string(),
    }
}

#[test]
fn test_end_of_input_while_operand_expected() {
    insta::assert_snapshot!(error_message("A AND"), @"Unexpected end of expression");
    insta::assert_snapshot!(error_message("NOT"), @"Unexpected end of expression");
    insta::assert_snapshot!(error_message("(A OR"), @"Unexpected end of expression");
    insta::assert_snapshot!(error_message(""), @"Unexpected end of expression");
}

#[test]
fn test_unexpected_token_at_primary_position() {
    insta::assert_snapshot!(error_message("AND A"), @"Unexpected token: AND");
    insta::assert_snapshot!(error_message("A OR )"), @"Unexpected token: )");
    insta::assert_snapshot!(error_message("NOT XOR"), @"Unexpected token: XOR");
}

#[test]
fn test_missing_closing_parenthesis() {
    insta::assert_snapshot!(error_message("(A AND B"), @"Expected ) but found end of input");
    insta::assert_snapshot!(error_message("(A (B)"), @"Expected ) but found (");
}

#[test]
fn test_trailing_input_after_complete_expression() {
    insta::assert_snapshot!(error_message("A B"), @"Unexpected input after expression");
    insta::assert_snapshot!(error_message("(A) NOT B"), @"Unexpected input after expression");
    insta::assert_snapshot!(error_message("A OR B C"), @"Unexpected input after expression");
}

#[test]
fn test_lenient_lexing_defers_to_parse_errors() {
    // The tokenizer drops what it cannot match, so a numeric typo shows
    // up here as a missing operand, not a lexing failure
    insta::assert_snapshot!(error_message("A AND 3"), @"Unexpected end of expression");
    insta::assert_snapshot!(error_message("1 + 2"), @"Unexpected end of expression");
}

#[test]
fn test_no_partial_trees() {
    // An empty token sequence fails the same way as empty text
    let result = parse_expression(Vec::new());
    assert!(result.is_err());
}
