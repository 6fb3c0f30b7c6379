//! Concrete element variants for Breadboard schematics.
//!
//! Provides the built-in element types (resistor, capacitor, wire) and the
//! [`ElementRegistry`] that maps type names to factories, so hosts can add
//! their own variants without the connectivity core knowing about them.

pub mod capacitor;
pub mod error;
pub mod registry;
pub mod resistor;
pub mod wire;

pub use capacitor::Capacitor;
pub use error::{Error, Result};
pub use registry::{standard_registry, ElementRegistry};
pub use resistor::Resistor;
pub use wire::Wire;
