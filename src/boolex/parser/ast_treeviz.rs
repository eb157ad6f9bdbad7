//! Treeviz formatter for expression trees

use crate::boolex::parser::ast::Expr;

pub fn to_treeviz_str(expr: &Expr) -> String {
    let mut result = String::new();
    append_node(&mut result, expr, "", true);
    result
}

fn append_node(result: &mut String, expr: &Expr, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    let label = match expr {
        Expr::Literal(literal) => format!("Literal: {}", literal.name),
        Expr::Gate(gate) => format!("Gate: {}", gate.op),
    };

    result.push_str(&format!("{}{} {}\n", prefix, connector, label));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });

    if let Expr::Gate(gate) = expr {
        for (i, input) in gate.inputs().iter().enumerate() {
            let is_last = i == gate.inputs().len() - 1;
            append_node(result, input, &new_prefix, is_last);
        }
    }
}
