//! # Breadboard
//!
//! A schematic capture connectivity toolkit. Breadboard models a canvas of
//! discrete electrical elements (resistors, capacitors, wires, ...) joined
//! at shared terminal coordinates, including terminals landing anywhere
//! along a wire's body. It validates connections, tracks which elements
//! occupy which coordinates, and answers neighbor queries — it does not
//! simulate, render, or check electrical correctness.
//!
//! ## Quick Start
//!
//! ```rust
//! use breadboard::prelude::*;
//!
//! let registry = standard_registry();
//! let mut service = CircuitService::new();
//!
//! let r1 = service
//!     .create_element(
//!         &registry,
//!         "resistor",
//!         None,
//!         vec![
//!             Position::new(10.0, 20.0).unwrap(),
//!             Position::new(30.0, 20.0).unwrap(),
//!         ],
//!         None,
//!         Properties::new(),
//!     )
//!     .unwrap();
//! let w2 = service
//!     .create_element(
//!         &registry,
//!         "wire",
//!         None,
//!         vec![
//!             Position::new(30.0, 20.0).unwrap(),
//!             Position::new(80.0, 20.0).unwrap(),
//!         ],
//!         None,
//!         Properties::new(),
//!     )
//!     .unwrap();
//!
//! service.connect(&r1, &w2).unwrap();
//! assert_eq!(service.neighbors(&r1), vec!["W2"]);
//! ```

// Re-export member crates
pub use breadboard_core as core;
pub use breadboard_elements as elements;
pub use breadboard_service as service;

// ============================================================================
// Convenient re-exports from breadboard_core
// ============================================================================

pub use breadboard_core::{
    // Circuit aggregate
    Circuit,
    // Element shape
    BoxedElement,
    Element,
    // Errors
    Error as CoreError,
    Label,
    Occupant,
    // Value objects
    Position,
    Properties,
    PropertyValue,
};

// Geometry helpers (exported from submodule)
pub use breadboard_core::geometry::{point_on_segment, COLLINEARITY_EPS};

// ============================================================================
// Convenient re-exports from breadboard_elements
// ============================================================================

pub use breadboard_elements::{
    Capacitor,
    // Registry
    ElementRegistry,
    // Errors
    Error as RegistryError,
    // Built-in variants
    Resistor,
    standard_registry,
    Wire,
};

// ============================================================================
// Convenient re-exports from breadboard_service
// ============================================================================

pub use breadboard_service::{
    // Orchestration
    CircuitService,
    // Errors
    Error as ServiceError,
    IdGenerator,
    // Persistence
    save_to_file,
};

/// Element manipulation: translate, rotate, property updates.
pub use breadboard_service::element_ops;

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Prelude module containing commonly used types and functions.
///
/// ```rust
/// use breadboard::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{Circuit, Element, Label, Occupant, Position, Properties, PropertyValue};

    // Elements and registry
    pub use crate::{standard_registry, Capacitor, ElementRegistry, Resistor, Wire};

    // Services
    pub use crate::{element_ops, save_to_file, CircuitService, IdGenerator};
}
