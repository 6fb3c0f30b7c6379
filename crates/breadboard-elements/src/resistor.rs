//! Resistor element.

use breadboard_core::error::{Error as CoreError, Result as CoreResult};
use breadboard_core::{Element, Label, Position, Properties, PropertyValue};

/// A two-terminal resistor.
#[derive(Debug, Clone)]
pub struct Resistor {
    id: String,
    terminals: Vec<Position>,
    label: Option<Label>,
    properties: Properties,
}

impl Resistor {
    /// Create a new resistor. Requires exactly two terminals; a
    /// `resistance` property, if present, must be a number greater than
    /// zero (or one of the `variable`/`undefined` sentinels).
    pub fn new(
        id: impl Into<String>,
        terminals: Vec<Position>,
        label: Option<Label>,
        properties: Properties,
    ) -> CoreResult<Self> {
        if terminals.len() != 2 {
            return Err(CoreError::InvalidGeometry(format!(
                "resistor requires exactly 2 terminals, got {}",
                terminals.len()
            )));
        }
        if let Some(PropertyValue::Number(ohms)) = properties.get("resistance") {
            if ohms <= 0.0 {
                return Err(CoreError::InvalidProperty(
                    "resistance must be greater than zero".into(),
                ));
            }
        }
        Ok(Self {
            id: id.into(),
            terminals,
            label,
            properties,
        })
    }

    /// Create a resistor with a concrete resistance in ohms.
    pub fn with_resistance(
        id: impl Into<String>,
        terminals: Vec<Position>,
        ohms: f64,
    ) -> CoreResult<Self> {
        Self::new(
            id,
            terminals,
            None,
            Properties::new().with("resistance", PropertyValue::Number(ohms)),
        )
    }

    /// The resistance property, if it holds a concrete number.
    pub fn resistance(&self) -> Option<f64> {
        match self.properties.get("resistance") {
            Some(PropertyValue::Number(ohms)) => Some(ohms),
            _ => None,
        }
    }
}

impl Element for Resistor {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> &'static str {
        "resistor"
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
