//! Wire element.

use breadboard_core::error::{Error as CoreError, Result as CoreResult};
use breadboard_core::{Element, Label, Position, Properties};

/// A wire: a polyline of two or more terminals. Consecutive terminals are
/// the endpoints of the wire's body segments, and other elements' terminals
/// may connect anywhere along those segments.
#[derive(Debug, Clone)]
pub struct Wire {
    id: String,
    terminals: Vec<Position>,
    label: Option<Label>,
    properties: Properties,
}

impl Wire {
    /// Create a new wire. Requires at least two terminals.
    pub fn new(
        id: impl Into<String>,
        terminals: Vec<Position>,
        label: Option<Label>,
        properties: Properties,
    ) -> CoreResult<Self> {
        if terminals.len() < 2 {
            return Err(CoreError::InvalidGeometry(format!(
                "wire requires at least 2 terminals, got {}",
                terminals.len()
            )));
        }
        Ok(Self {
            id: id.into(),
            terminals,
            label,
            properties,
        })
    }

    /// Number of body segments (terminal count minus one).
    pub fn segment_count(&self) -> usize {
        self.terminals.len() - 1
    }
}

impl Element for Wire {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> &'static str {
        "wire"
    }

    fn terminals(&self) -> &[Position] {
        &self.terminals
    }

    fn terminals_mut(&mut self) -> &mut [Position] {
        &mut self.terminals
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    fn set_label(&mut self, label: Option<Label>) {
        self.label = label;
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    fn is_wire_like(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f64, y: f64) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn test_new_wire() {
        let w = Wire::new(
            "W1",
            vec![pos(40.0, 10.0), pos(60.0, 10.0), pos(60.0, 30.0)],
            None,
            Properties::new(),
        )
        .unwrap();
        assert_eq!(w.id(), "W1");
        assert_eq!(w.kind(), "wire");
        assert!(w.is_wire_like());
        assert_eq!(w.segment_count(), 2);
    }

    #[test]
    fn test_single_terminal_rejected() {
        let err = Wire::new("W1", vec![pos(40.0, 10.0)], None, Properties::new()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidGeometry(_)));
    }
}
