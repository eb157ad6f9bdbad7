//! Gate shape and port geometry
//!
//! Every gate body is drawn relative to an origin point; this module
//! knows, for each operator, where the input and output connection
//! points sit relative to that origin. The offsets match the drawn
//! shapes in [svg](crate::boolex::layout::svg): inverted gates carry
//! their bubble, so their output port sits 10 units further out.

use crate::boolex::parser::GateOp;
use serde::Serialize;

/// Radius of the circle drawn for an input pin
pub const INPUT_PIN_RADIUS: f64 = 18.0;

/// A point on the diagram canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// Connection points of a gate body placed at some origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ports {
    /// Input ports, ordered top to bottom; length matches the operator arity
    pub inputs: Vec<Point>,
    /// The single output port
    pub output: Point,
}

/// Port geometry for a gate body with its origin at `origin`
pub fn gate_ports(op: GateOp, origin: Point) -> Ports {
    let Point { x, y } = origin;
    match op {
        GateOp::And => Ports {
            inputs: vec![Point::new(x, y + 10.0), Point::new(x, y + 30.0)],
            output: Point::new(x + 50.0, y + 20.0),
        },
        GateOp::Or => Ports {
            inputs: vec![Point::new(x + 10.0, y + 10.0), Point::new(x + 10.0, y + 30.0)],
            output: Point::new(x + 55.0, y + 20.0),
        },
        GateOp::Not => Ports {
            inputs: vec![Point::new(x, y + 20.0)],
            output: Point::new(x + 50.0, y + 20.0),
        },
        // NAND and NOR share the body of AND and OR; the inversion
        // bubble pushes the output port 10 units to the right
        GateOp::Nand => Ports {
            inputs: vec![Point::new(x, y + 10.0), Point::new(x, y + 30.0)],
            output: Point::new(x + 60.0, y + 20.0),
        },
        GateOp::Nor => Ports {
            inputs: vec![Point::new(x + 10.0, y + 10.0), Point::new(x + 10.0, y + 30.0)],
            output: Point::new(x + 65.0, y + 20.0),
        },
        // XOR is an OR body with a leading arc; the arc carries no ports
        GateOp::Xor => Ports {
            inputs: vec![Point::new(x + 10.0, y + 10.0), Point::new(x + 10.0, y + 30.0)],
            output: Point::new(x + 55.0, y + 20.0),
        },
    }
}

/// Output port of an input pin centered at `center`
pub fn input_pin_port(center: Point) -> Point {
    Point::new(center.x + INPUT_PIN_RADIUS, center.y)
}
