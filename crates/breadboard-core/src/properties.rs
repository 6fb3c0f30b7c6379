//! Element property containers.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single property value.
///
/// A property is either a concrete number, the `variable` sentinel (the
/// value is swept or symbolic in the host application), or `undefined`
/// (not yet assigned).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// A concrete numeric value.
    Number(f64),
    /// The value is a free variable.
    Variable,
    /// The value has not been assigned.
    Undefined,
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(v) => write!(f, "{v}"),
            PropertyValue::Variable => f.write_str("variable"),
            PropertyValue::Undefined => f.write_str("undefined"),
        }
    }
}

/// An ordered mapping from property name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    values: IndexMap<String, PropertyValue>,
}

impl Properties {
    /// Create an empty property container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property value by name.
    pub fn get(&self, name: &str) -> Option<PropertyValue> {
        self.values.get(name).copied()
    }

    /// Set a property value, inserting or overwriting.
    pub fn set(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.values.insert(name.into(), value);
    }

    /// Builder-style insertion.
    pub fn with(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.set(name, value);
        self
    }

    /// Iterate over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PropertyValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the container is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render the properties as `"name: value, name: value"`.
    pub fn describe(&self) -> String {
        self.values
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut props = Properties::new();
        props.set("resistance", PropertyValue::Number(100.0));
        assert_eq!(props.get("resistance"), Some(PropertyValue::Number(100.0)));
        assert_eq!(props.get("missing"), None);
    }

    #[test]
    fn test_overwrite_keeps_order() {
        let mut props = Properties::new()
            .with("a", PropertyValue::Number(1.0))
            .with("b", PropertyValue::Variable);
        props.set("a", PropertyValue::Undefined);

        let keys: Vec<_> = props.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(props.get("a"), Some(PropertyValue::Undefined));
    }

    #[test]
    fn test_describe() {
        let props = Properties::new()
            .with("resistance", PropertyValue::Number(4700.0))
            .with("tolerance", PropertyValue::Variable);
        assert_eq!(props.describe(), "resistance: 4700, tolerance: variable");
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(Properties::new().describe(), "");
    }

    #[test]
    fn test_serde_round_trip() {
        let props = Properties::new()
            .with("resistance", PropertyValue::Number(100.0))
            .with("bias", PropertyValue::Undefined);
        let json = serde_json::to_string(&props).unwrap();
        let back: Properties = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }
}
