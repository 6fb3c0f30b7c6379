//! Error types for breadboard-elements.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("element type \"{0}\" is already registered")]
    DuplicateType(String),

    #[error("element type \"{0}\" is not registered")]
    UnknownType(String),

    #[error(transparent)]
    Core(#[from] breadboard_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
