//! File persistence for circuit descriptions.

use std::fs;
use std::path::Path;

use breadboard_core::Circuit;
use log::debug;

use crate::error::Result;

/// Write the circuit's textual description to a file, UTF-8 encoded.
///
/// The description lists every element with its id and terminal
/// coordinates, one line per element, in insertion order.
pub fn save_to_file(circuit: &Circuit, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, circuit.describe())?;
    debug!("saved circuit description to {}", path.display());
    Ok(())
}
