//! Error types for breadboard-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid label: {0}")]
    InvalidLabel(String),

    #[error("invalid property: {0}")]
    InvalidProperty(String),

    #[error("element with id {0} is already in the circuit")]
    DuplicateElement(String),

    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("node at position ({x}, {y}) is already connected and cannot accept additional connections")]
    ConnectionConflict { x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
