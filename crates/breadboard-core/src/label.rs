//! Display labels for elements.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum length of a label, in characters.
const MAX_LABEL_LEN: usize = 50;

/// A user-facing label attached to an element, independent of connectivity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// Create a label. Must be non-empty (after trimming) and at most 50
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() || value.chars().count() > MAX_LABEL_LEN {
            return Err(Error::InvalidLabel(
                "must be non-empty and less than 50 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Get the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
