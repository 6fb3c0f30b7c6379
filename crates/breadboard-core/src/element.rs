//! Element trait implemented by concrete schematic variants.

use crate::label::Label;
use crate::position::Position;
use crate::properties::Properties;

/// A boxed element stored in a circuit.
pub type BoxedElement = Box<dyn Element>;

/// A schematic element placed on the canvas.
///
/// Concrete variants (resistor, capacitor, wire, ...) fix their own terminal
/// count; the circuit aggregate only relies on this shape. New variants are
/// registered with the element registry rather than hard-coded anywhere in
/// the connectivity logic.
pub trait Element: std::fmt::Debug {
    /// The element's unique id within a circuit (e.g. "R1").
    fn id(&self) -> &str;

    /// The variant tag used for display and id prefixes (e.g. "resistor").
    fn kind(&self) -> &'static str;

    /// The element's terminals, in variant-defined order. Never empty.
    /// For wires, consecutive terminals are the endpoints of the polyline
    /// segments.
    fn terminals(&self) -> &[Position];

    /// Mutable access to the terminal coordinates. The slice length is
    /// fixed, so callers can move terminals but never change their count.
    fn terminals_mut(&mut self) -> &mut [Position];

    /// The element's display label, if any.
    fn label(&self) -> Option<&Label> {
        None
    }

    /// Replace the display label.
    fn set_label(&mut self, label: Option<Label>);

    /// The element's property container.
    fn properties(&self) -> &Properties;

    /// Mutable access to the property container.
    fn properties_mut(&mut self) -> &mut Properties;

    /// Whether a terminal may connect anywhere along this element's body,
    /// not just at its endpoints. True for wires.
    fn is_wire_like(&self) -> bool {
        false
    }

    /// A one-line description of the element: kind, id, and every terminal
    /// coordinate.
    fn describe(&self) -> String {
        let terminals = self
            .terminals()
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        match self.label() {
            Some(label) => format!("{} ({}) \"{}\" at {}", self.kind(), self.id(), label, terminals),
            None => format!("{} ({}) at {}", self.kind(), self.id(), terminals),
        }
    }
}
