//! Moving, rotating, and editing placed elements.

use breadboard_core::{Element, Position, PropertyValue};

use crate::error::{Error, Result};

/// Move an element so its reference terminal (terminal 0) lands on
/// `new_reference`, shifting every other terminal by the same delta.
///
/// All resulting positions are validated before any terminal is written, so
/// a move that would push a coordinate negative leaves the element unchanged.
pub fn translate(element: &mut dyn Element, new_reference: Position) -> Result<()> {
    let reference = element.terminals()[0];
    let dx = new_reference.x() - reference.x();
    let dy = new_reference.y() - reference.y();

    let moved = element
        .terminals()
        .iter()
        .map(|t| Position::new(t.x() + dx, t.y() + dy))
        .collect::<breadboard_core::Result<Vec<_>>>()?;

    element.terminals_mut().copy_from_slice(&moved);
    Ok(())
}

/// Rotate an element's terminals about its reference terminal (terminal 0).
///
/// Only right-angle orientations are supported: 0, 90, 180, or 270 degrees.
/// The mapping is exact integer arithmetic on the relative coordinates, so
/// grid-aligned elements stay grid-aligned.
pub fn rotate(element: &mut dyn Element, orientation: i32) -> Result<()> {
    if !matches!(orientation, 0 | 90 | 180 | 270) {
        return Err(Error::InvalidRotation(orientation));
    }

    let reference = element.terminals()[0];
    let (rx, ry) = (reference.x(), reference.y());

    let rotated = element
        .terminals()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            if i == 0 {
                return Ok(*t);
            }
            let (x, y) = (t.x() - rx, t.y() - ry);
            let (nx, ny) = match orientation {
                0 => (x, y),
                90 => (-y, x),
                180 => (-x, -y),
                _ => (y, -x),
            };
            Position::new(rx + nx, ry + ny)
        })
        .collect::<breadboard_core::Result<Vec<_>>>()?;

    element.terminals_mut().copy_from_slice(&rotated);
    Ok(())
}

/// Apply a batch of property updates to an element.
pub fn update_properties<I, K>(element: &mut dyn Element, updates: I)
where
    I: IntoIterator<Item = (K, PropertyValue)>,
    K: Into<String>,
{
    let properties = element.properties_mut();
    for (name, value) in updates {
        properties.set(name, value);
    }
}
