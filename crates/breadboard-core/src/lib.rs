//! Core schematic representation for Breadboard.
//!
//! This crate provides the fundamental data structures for assembling a
//! schematic: positions, labels, property containers, the [`Element`] trait
//! implemented by concrete element variants, and the [`Circuit`] aggregate
//! that owns the element set and enforces the connection rules.

pub mod circuit;
pub mod element;
pub mod error;
pub mod geometry;
pub mod label;
pub mod position;
pub mod properties;

pub use circuit::{Circuit, Occupant};
pub use element::{BoxedElement, Element};
pub use error::{Error, Result};
pub use label::Label;
pub use position::Position;
pub use properties::{Properties, PropertyValue};
