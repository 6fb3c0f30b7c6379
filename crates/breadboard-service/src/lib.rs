//! Application services for Breadboard schematics.
//!
//! The connectivity core validates and records; this crate orchestrates it:
//! [`CircuitService`] drives add/delete/connect use cases and keeps the
//! element-pair adjacency the coordinate-indexed core does not, `element_ops`
//! moves and rotates placed elements, [`IdGenerator`] hands out sequential
//! ids, and `persistence` writes the textual circuit description to disk.

pub mod element_ops;
pub mod error;
pub mod id;
pub mod persistence;
pub mod service;

pub use error::{Error, Result};
pub use id::IdGenerator;
pub use persistence::save_to_file;
pub use service::CircuitService;
