//! Error types for breadboard-service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("orientation must be one of 0, 90, 180, or 270 degrees, got {0}")]
    InvalidRotation(i32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] breadboard_core::Error),

    #[error(transparent)]
    Registry(#[from] breadboard_elements::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
