//! # boolex
//!
//! A parser for Boolean gate expressions and a layout engine that turns the
//! parsed tree into a logic-gate circuit diagram.
//!
//! The pipeline is strictly sequential: text -> tokens -> AST -> diagram.
//! See the [lexer](boolex::lexer), [parser](boolex::parser) and
//! [layout](boolex::layout) modules for the individual stages, and
//! [processor](boolex::processor) for the stage/format pipeline the CLI
//! drives.

pub mod boolex;
