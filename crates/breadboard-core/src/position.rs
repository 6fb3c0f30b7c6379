//! Canvas positions for element terminals.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point on the schematic canvas.
///
/// Coordinates are non-negative; construction fails otherwise. Positions are
/// plain values: elements hold them by value and connection keys are derived
/// from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Create a new position. Both coordinates must be non-negative.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if x < 0.0 || y < 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "position coordinates must be non-negative, got ({x}, {y})"
            )));
        }
        Ok(Self { x, y })
    }

    /// Get the x-coordinate.
    pub fn x(self) -> f64 {
        self.x
    }

    /// Get the y-coordinate.
    pub fn y(self) -> f64 {
        self.y
    }

    /// The connection-table key for this position, e.g. `"10,20"`.
    ///
    /// Uses the `Display` rendering of `f64`, so whole numbers carry no
    /// trailing `.0` and two positions compare equal exactly when their
    /// keys do.
    pub fn key(self) -> String {
        format!("{},{}", self.x, self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
