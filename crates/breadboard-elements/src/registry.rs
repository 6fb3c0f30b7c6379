//! Element registry: type names mapped to element factories.

use breadboard_core::{BoxedElement, Label, Position, Properties};
use indexmap::IndexMap;

use crate::capacitor::Capacitor;
use crate::error::{Error, Result};
use crate::resistor::Resistor;
use crate::wire::Wire;

/// A factory producing an element from an id, terminal list, label, and
/// properties.
pub type Factory =
    Box<dyn Fn(String, Vec<Position>, Option<Label>, Properties) -> Result<BoxedElement> + Send + Sync>;

/// A mapping from element type name to constructor, so hosts create elements
/// by name without the connectivity core hard-coding variants.
///
/// Registries are explicitly constructed and passed by reference; there is
/// no process-global instance. Registration happens once at startup, and
/// re-registering a name is an error rather than a silent overwrite.
#[derive(Default)]
pub struct ElementRegistry {
    factories: IndexMap<String, Factory>,
}

impl ElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a type name.
    ///
    /// Fails with [`Error::DuplicateType`] if the name is taken.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn(String, Vec<Position>, Option<Label>, Properties) -> Result<BoxedElement>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(Error::DuplicateType(name));
        }
        self.factories.insert(name, Box::new(factory));
        Ok(())
    }

    /// Get the factory registered under a type name.
    pub fn get(&self, name: &str) -> Option<&Factory> {
        self.factories.get(name)
    }

    /// Iterate over registered type names, in registration order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(|k| k.as_str())
    }

    /// Create an element of the named type.
    ///
    /// Fails with [`Error::UnknownType`] if the name is not registered;
    /// factory failures (e.g. a wrong terminal count) propagate unchanged.
    pub fn create(
        &self,
        name: &str,
        id: impl Into<String>,
        terminals: Vec<Position>,
        label: Option<Label>,
        properties: Properties,
    ) -> Result<BoxedElement> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| Error::UnknownType(name.to_string()))?;
        factory(id.into(), terminals, label, properties)
    }
}

impl std::fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRegistry")
            .field("types", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Build a registry preloaded with the built-in element types:
/// `resistor`, `capacitor`, and `wire`.
pub fn standard_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();
    registry
        .register("resistor", |id, terminals, label, properties| {
            Ok(Box::new(Resistor::new(id, terminals, label, properties)?))
        })
        .expect("empty registry");
    registry
        .register("capacitor", |id, terminals, label, properties| {
            Ok(Box::new(Capacitor::new(id, terminals, label, properties)?))
        })
        .expect("empty registry");
    registry
        .register("wire", |id, terminals, label, properties| {
            Ok(Box::new(Wire::new(id, terminals, label, properties)?))
        })
        .expect("empty registry");
    registry
}
