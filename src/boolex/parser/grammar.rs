//! Recursive-descent parser for Boolean gate expressions
//!
//! One function per precedence tier, mutually recursive, with a single
//! lookahead-by-one cursor into the token sequence. The grammar is LL(1)
//! as factored in the [parser module docs](crate::boolex::parser), so no
//! backtracking is needed: each tier parses one operand from the
//! next-tighter tier, then folds left while the next unconsumed token is
//! an operator belonging to the tier.

use crate::boolex::lexer::{tokenize, Token};
use crate::boolex::parser::ast::{Expr, GateOp};
use crate::boolex::parser::error::SyntaxError;

/// Parse expression text into an AST
///
/// Convenience wrapper over lenient [tokenize] + [parse_expression].
pub fn parse(source: &str) -> Result<Expr, SyntaxError> {
    parse_expression(tokenize(source))
}

/// Parse a token sequence into an AST
///
/// Fails if the sequence does not form exactly one complete expression.
pub fn parse_expression(tokens: Vec<Token>) -> Result<Expr, SyntaxError> {
    let mut parser = ExprParser::new(tokens);
    let root = parser.expression()?;
    if parser.peek().is_some() {
        return Err(SyntaxError::TrailingInput);
    }
    Ok(root)
}

/// Cursor over the token sequence
struct ExprParser {
    tokens: Vec<Token>,
    pos: usize,
}

impl ExprParser {
    fn new(tokens: Vec<Token>) -> Self {
        ExprParser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(token) if token == expected => {
                self.pos += 1;
                Ok(())
            }
            found => Err(SyntaxError::Expected { expected, found }),
        }
    }

    /// Expression := Or
    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        self.or_tier()
    }

    /// Or := And ( "OR" And )*
    fn or_tier(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.and_tier()?;
        while self.peek() == Some(Token::Or) {
            self.pos += 1;
            let right = self.and_tier()?;
            left = Expr::binary(GateOp::Or, left, right);
        }
        Ok(left)
    }

    /// And := NandNorXor ( "AND" NandNorXor )*
    fn and_tier(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.nand_nor_xor_tier()?;
        while self.peek() == Some(Token::And) {
            self.pos += 1;
            let right = self.nand_nor_xor_tier()?;
            left = Expr::binary(GateOp::And, left, right);
        }
        Ok(left)
    }

    /// NandNorXor := Primary ( ("NAND"|"NOR"|"XOR") Primary )*
    fn nand_nor_xor_tier(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.primary()?;
        while let Some(op) = self.peek().and_then(nand_nor_xor_op) {
            self.pos += 1;
            let right = self.primary()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// Primary := Literal | "NOT" Primary | "(" Expression ")"
    ///
    /// NOT is prefix and binds to exactly the following primary.
    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.bump() {
            None => Err(SyntaxError::UnexpectedEnd),
            Some(Token::Literal(name)) => Ok(Expr::literal(name)),
            Some(Token::Not) => Ok(Expr::not(self.primary()?)),
            Some(Token::OpenParen) => {
                let inner = self.expression()?;
                self.expect(Token::CloseParen)?;
                Ok(inner)
            }
            Some(token) => Err(SyntaxError::UnexpectedToken(token)),
        }
    }
}

/// The token's operator in the NAND/NOR/XOR tier, if it belongs there
fn nand_nor_xor_op(token: Token) -> Option<GateOp> {
    match token {
        Token::Nand => Some(GateOp::Nand),
        Token::Nor => Some(GateOp::Nor),
        Token::Xor => Some(GateOp::Xor),
        _ => None,
    }
}
