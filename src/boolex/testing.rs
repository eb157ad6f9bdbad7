//! Test support: expression tree builders
//!
//! Short constructors for building expected trees in assertions. Shared by
//! the inline unit tests and the integration suites in `tests/`.

use crate::boolex::parser::ast::{Expr, GateOp};

/// A literal leaf
pub fn lit(name: char) -> Expr {
    Expr::literal(name)
}

/// A NOT gate
pub fn not(input: Expr) -> Expr {
    Expr::not(input)
}

/// An AND gate
pub fn and(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(GateOp::And, lhs, rhs)
}

/// An OR gate
pub fn or(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(GateOp::Or, lhs, rhs)
}

/// A NAND gate
pub fn nand(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(GateOp::Nand, lhs, rhs)
}

/// A NOR gate
pub fn nor(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(GateOp::Nor, lhs, rhs)
}

/// An XOR gate
pub fn xor(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(GateOp::Xor, lhs, rhs)
}
