//! Recursive diagram placement
//!
//! Depth-first traversal of the expression tree, assigning each node a
//! position on the canvas. The root sits toward the right edge; every
//! child moves one fixed step left, binary children split above and
//! below their parent with the vertical spread halving per level, and a
//! unary child stays on its parent's row.

use crate::boolex::layout::shapes::{gate_ports, input_pin_port, Point};
use crate::boolex::parser::{Expr, GateOp};
use serde::Serialize;

/// Canvas size
pub const CANVAS_WIDTH: f64 = 1100.0;
pub const CANVAS_HEIGHT: f64 = 650.0;

/// Where the root node is placed
const ROOT_X: f64 = 830.0;
const ROOT_Y: f64 = 320.0;
/// Vertical spread between the root's children
const ROOT_SPREAD: f64 = 100.0;
/// Horizontal step between a parent and its children
const LEVEL_DX: f64 = 120.0;
/// Gate bodies are drawn 20 units above the node's row so the body is
/// vertically centered on it
const GATE_LIFT: f64 = 20.0;
/// Where the root's output wire terminates
const OUTPUT_X: f64 = 1030.0;

/// A drawable element of the diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    /// A labeled input pin for a literal
    Input { name: char, center: Point },
    /// A gate body with its origin at `origin`
    Gate { op: GateOp, origin: Point },
}

/// A wire between two connection points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wire {
    pub from: Point,
    pub to: Point,
}

/// A fully placed circuit diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    pub width: f64,
    pub height: f64,
    /// Elements in draw order (children before their parent gate)
    pub elements: Vec<Element>,
    pub wires: Vec<Wire>,
    /// Where the root's output wire terminates, next to the OUTPUT label
    pub output: Point,
}

/// Lay the expression tree out as a circuit diagram
pub fn layout_diagram(expr: &Expr) -> Diagram {
    let mut diagram = Diagram {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        elements: Vec::new(),
        wires: Vec::new(),
        output: Point::new(OUTPUT_X, ROOT_Y),
    };

    let root_out = place(expr, Point::new(ROOT_X, ROOT_Y), ROOT_SPREAD, &mut diagram);
    let terminal = Point::new(OUTPUT_X, root_out.y);
    diagram.wires.push(Wire {
        from: root_out,
        to: terminal,
    });
    diagram.output = terminal;

    diagram
}

/// Place one node at `at` and return its output port
fn place(expr: &Expr, at: Point, spread: f64, diagram: &mut Diagram) -> Point {
    match expr {
        Expr::Literal(literal) => {
            diagram.elements.push(Element::Input {
                name: literal.name,
                center: at,
            });
            input_pin_port(at)
        }
        Expr::Gate(gate) => {
            let origin = Point::new(at.x, at.y - GATE_LIFT);
            let ports = gate_ports(gate.op, origin);

            let child_outs: Vec<Point> = match gate.inputs() {
                [input] => {
                    vec![place(input, Point::new(at.x - LEVEL_DX, at.y), spread, diagram)]
                }
                [lhs, rhs] => {
                    let half = spread / 2.0;
                    vec![
                        place(lhs, Point::new(at.x - LEVEL_DX, at.y - half), half, diagram),
                        place(rhs, Point::new(at.x - LEVEL_DX, at.y + half), half, diagram),
                    ]
                }
                _ => Vec::new(),
            };

            diagram.elements.push(Element::Gate {
                op: gate.op,
                origin,
            });
            for (from, to) in child_outs.into_iter().zip(ports.inputs.iter().copied()) {
                diagram.wires.push(Wire { from, to });
            }

            ports.output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolex::testing::{and, lit, not};

    #[test]
    fn test_single_literal_layout() {
        let diagram = layout_diagram(&lit('A'));

        assert_eq!(
            diagram.elements,
            vec![Element::Input {
                name: 'A',
                center: Point::new(830.0, 320.0),
            }]
        );
        // One wire: pin output to the diagram output terminal
        assert_eq!(
            diagram.wires,
            vec![Wire {
                from: Point::new(848.0, 320.0),
                to: Point::new(1030.0, 320.0),
            }]
        );
        assert_eq!(diagram.output, Point::new(1030.0, 320.0));
    }

    #[test]
    fn test_not_layout() {
        let diagram = layout_diagram(&not(lit('A')));

        assert_eq!(
            diagram.elements,
            vec![
                // Child pin placed first, on the parent's row
                Element::Input {
                    name: 'A',
                    center: Point::new(710.0, 320.0),
                },
                Element::Gate {
                    op: GateOp::Not,
                    origin: Point::new(830.0, 300.0),
                },
            ]
        );
        // Pin to gate input, gate output to terminal
        assert_eq!(
            diagram.wires,
            vec![
                Wire {
                    from: Point::new(728.0, 320.0),
                    to: Point::new(830.0, 320.0),
                },
                Wire {
                    from: Point::new(880.0, 320.0),
                    to: Point::new(1030.0, 320.0),
                },
            ]
        );
    }

    #[test]
    fn test_binary_children_split_vertically() {
        let diagram = layout_diagram(&and(lit('A'), lit('B')));

        assert_eq!(
            diagram.elements,
            vec![
                Element::Input {
                    name: 'A',
                    center: Point::new(710.0, 270.0),
                },
                Element::Input {
                    name: 'B',
                    center: Point::new(710.0, 370.0),
                },
                Element::Gate {
                    op: GateOp::And,
                    origin: Point::new(830.0, 300.0),
                },
            ]
        );
        assert_eq!(diagram.wires.len(), 3);
        assert_eq!(diagram.wires[0].to, Point::new(830.0, 310.0)); // in1
        assert_eq!(diagram.wires[1].to, Point::new(830.0, 330.0)); // in2
    }

    #[test]
    fn test_spread_halves_per_level() {
        // ((A AND B) AND C): the inner gate's children split by 25, not 50
        let diagram = layout_diagram(&and(and(lit('A'), lit('B')), lit('C')));

        assert_eq!(
            diagram.elements[0],
            Element::Input {
                name: 'A',
                center: Point::new(590.0, 245.0),
            }
        );
        assert_eq!(
            diagram.elements[1],
            Element::Input {
                name: 'B',
                center: Point::new(590.0, 295.0),
            }
        );
    }

    #[test]
    fn test_canvas_size() {
        let diagram = layout_diagram(&lit('A'));
        assert_eq!(diagram.width, 1100.0);
        assert_eq!(diagram.height, 650.0);
    }
}
