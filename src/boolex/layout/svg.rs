//! SVG serialization for circuit diagrams
//!
//! Emits a standalone SVG document from a placed [Diagram]. The path
//! data for each gate body matches the shapes the port geometry in
//! [shapes](crate::boolex::layout::shapes) was derived from.

use crate::boolex::layout::diagram::{Diagram, Element, Wire};
use crate::boolex::layout::shapes::{gate_ports, Point, INPUT_PIN_RADIUS};
use crate::boolex::parser::GateOp;

/// Render a diagram as an SVG document
pub fn to_svg(diagram: &Diagram) -> String {
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        num(diagram.width),
        num(diagram.height)
    ));
    svg.push_str(
        "<style>.gate{fill:#fafafa;stroke:#333;stroke-width:2}\
         .wire{fill:none;stroke:#333;stroke-width:2}\
         text{font-family:sans-serif}</style>\n",
    );

    for element in &diagram.elements {
        match element {
            Element::Input { name, center } => append_input_pin(&mut svg, *name, *center),
            Element::Gate { op, origin } => append_gate_body(&mut svg, *op, *origin),
        }
    }

    for wire in &diagram.wires {
        append_wire(&mut svg, wire);
    }

    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"start\" font-weight=\"bold\">OUTPUT</text>\n",
        num(diagram.output.x + 10.0),
        num(diagram.output.y + 6.0)
    ));

    svg.push_str("</svg>\n");
    svg
}

/// Format a coordinate the way a hand-written SVG would: no trailing ".0"
fn num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn append_input_pin(svg: &mut String, name: char, center: Point) {
    svg.push_str(&format!(
        "<g><circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"#333\" stroke-width=\"2\" fill=\"#e6f0ff\"/>\
         <text x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text></g>\n",
        num(center.x),
        num(center.y),
        num(INPUT_PIN_RADIUS),
        num(center.x),
        num(center.y + 7.0),
        name
    ));
}

fn append_gate_body(svg: &mut String, op: GateOp, origin: Point) {
    let Point { x, y } = origin;
    match op {
        GateOp::And => append_and_body(svg, x, y),
        GateOp::Or => append_or_body(svg, x, y),
        GateOp::Not => {
            svg.push_str(&format!(
                "<polygon points=\"{},{} {},{} {},{}\" class=\"gate\"/>\n",
                num(x),
                num(y),
                num(x),
                num(y + 40.0),
                num(x + 40.0),
                num(y + 20.0)
            ));
            append_bubble(svg, Point::new(x + 45.0, y + 20.0));
        }
        GateOp::Nand => {
            append_and_body(svg, x, y);
            let output = gate_ports(GateOp::And, origin).output;
            append_bubble(svg, Point::new(output.x + 5.0, output.y));
        }
        GateOp::Nor => {
            append_or_body(svg, x, y);
            let output = gate_ports(GateOp::Or, origin).output;
            append_bubble(svg, Point::new(output.x + 5.0, output.y));
        }
        GateOp::Xor => {
            // The extra input-side arc that distinguishes XOR from OR
            svg.push_str(&format!(
                "<path d=\"M{},{} Q{},{} {},{}\" stroke=\"#333\" fill=\"none\" stroke-width=\"2\"/>\n",
                num(x - 7.0),
                num(y + 37.0),
                num(x + 14.0),
                num(y + 20.0),
                num(x - 7.0),
                num(y + 3.0)
            ));
            append_or_body(svg, x, y);
        }
    }
}

fn append_and_body(svg: &mut String, x: f64, y: f64) {
    svg.push_str(&format!(
        "<path d=\"M{},{} l30,0 a20,20 0 0,1 0,40 l-30,0 z\" class=\"gate\"/>\n",
        num(x),
        num(y)
    ));
}

fn append_or_body(svg: &mut String, x: f64, y: f64) {
    svg.push_str(&format!(
        "<path d=\"M{},{} Q{},{} {},{} Q{},{} {},{} Q{},{} {},{} Z\" class=\"gate\"/>\n",
        num(x),
        num(y + 40.0),
        num(x + 15.0),
        num(y + 20.0),
        num(x),
        num(y),
        num(x + 28.0),
        num(y + 20.0),
        num(x + 55.0),
        num(y + 20.0),
        num(x + 28.0),
        num(y + 23.0),
        num(x),
        num(y + 40.0)
    ));
}

/// The inversion bubble drawn on NOT, NAND and NOR outputs
fn append_bubble(svg: &mut String, center: Point) {
    svg.push_str(&format!(
        "<circle cx=\"{}\" cy=\"{}\" r=\"5\" stroke=\"#333\" stroke-width=\"2\" fill=\"#fafafa\"/>\n",
        num(center.x),
        num(center.y)
    ));
}

fn append_wire(svg: &mut String, wire: &Wire) {
    let mid = (wire.from.x + wire.to.x) / 2.0;
    svg.push_str(&format!(
        "<path d=\"M{} {} H{} V{} H{}\" class=\"wire\"/>\n",
        num(wire.from.x),
        num(wire.from.y),
        num(mid),
        num(wire.to.y),
        num(wire.to.x)
    ));
}
