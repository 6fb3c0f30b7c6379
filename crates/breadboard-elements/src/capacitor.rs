//! Capacitor element.

use breadboard_core::error::{Error as CoreError, Result as CoreResult};
use breadboard_core::{Element, Label, Position, Properties, PropertyValue};

/// A two-terminal capacitor.
#[derive(Debug, Clone)]
pub struct Capacitor {
    id: String,
    terminals: Vec<Position>,
    label: Option<Label>,
    properties: Properties,
}

impl Capacitor {
    /// Create a new capacitor. Requires exactly two terminals.
    pub fn new(
        id: impl Into<String>,
        terminals: Vec<Position>,
        label: Option<Label>,
        properties: Properties,
    ) -> CoreResult<Self> {
        if terminals.len() != 2 {
            return Err(CoreError::InvalidGeometry(format!(
                "capacitor requires exactly 2 terminals, got {}",
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

    /// Create a capacitor with a concrete capacitance in farads.
    pub fn with_capacitance(
        id: impl Into<String>,
        terminals: Vec<Position>,
        farads: f64,
    ) -> CoreResult<Self> {
        Self::new(
            id,
            terminals,
            None,
            Properties::new().with("capacitance", PropertyValue::Number(farads)),
        )
    }

    /// The capacitance property, if it holds a concrete number.
    pub fn capacitance(&self) -> Option<f64> {
        match self.properties.get("capacitance") {
            Some(PropertyValue::Number(farads)) => Some(farads),
            _ => None,
        }
    }
}

impl Element for Capacitor {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> &'static str {
        "capacitor"
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
}
