//! Diagram layout module
//!
//! Maps an expression tree onto a logic-gate circuit diagram: every
//! literal becomes a labeled input pin, every gate node a gate body, and
//! every child-parent edge a wire from the child's output port to the
//! parent's corresponding input port. Placement is fixed offset
//! arithmetic over a depth-first traversal; there is no sizing or overlap
//! logic.
//!
//! The layout consumes the parser's arity invariant exactly: one input
//! port for NOT, two for every other gate.

pub mod diagram;
pub mod shapes;
pub mod svg;

pub use diagram::{layout_diagram, Diagram, Element, Wire};
pub use shapes::{gate_ports, input_pin_port, Point, Ports};
pub use svg::to_svg;
