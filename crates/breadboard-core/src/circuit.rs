//! Circuit aggregate: owns the element set and the connection table.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::element::{BoxedElement, Element};
use crate::error::{Error, Result};
use crate::geometry::point_on_segment;
use crate::position::Position;

/// An entry in a coordinate's occupant list.
///
/// Terminal-to-terminal connections record the two elements; wire-body
/// connections record the wire and the bare terminal position that landed on
/// its body.
#[derive(Debug, Clone, PartialEq)]
pub enum Occupant {
    /// An element, by id.
    Element(String),
    /// A bare terminal position connected to a wire body.
    Terminal(Position),
}

impl Occupant {
    /// Whether this occupant is the element with the given id.
    pub fn is_element(&self, id: &str) -> bool {
        matches!(self, Occupant::Element(e) if e == id)
    }
}

/// A schematic circuit: the set of placed elements and the table of
/// established connections, keyed by `"x,y"` coordinate.
///
/// The aggregate enforces id uniqueness and the connection rules; it knows
/// nothing about rendering, persistence, or electrical behavior.
#[derive(Debug, Default)]
pub struct Circuit {
    /// Elements keyed by id, in insertion order.
    elements: IndexMap<String, BoxedElement>,
    /// Occupants per coordinate key, in the order connections were made.
    connections: IndexMap<String, Vec<Occupant>>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the circuit.
    ///
    /// Fails with [`Error::DuplicateElement`] if an element with the same id
    /// is already present; the circuit is unchanged on failure. Adding never
    /// establishes connections — that is a separate explicit step.
    pub fn add_element(&mut self, element: BoxedElement) -> Result<()> {
        let id = element.id().to_string();
        if self.elements.contains_key(&id) {
            return Err(Error::DuplicateElement(id));
        }
        self.elements.insert(id, element);
        Ok(())
    }

    /// Remove an element by id.
    ///
    /// Missing ids are tolerated: deleting a non-existent element is a
    /// no-op. The element is also pruned from every coordinate's occupant
    /// list; coordinates whose list empties are dropped.
    pub fn delete_element(&mut self, id: &str) {
        if self.elements.shift_remove(id).is_none() {
            return;
        }
        for occupants in self.connections.values_mut() {
            occupants.retain(|o| !o.is_element(id));
        }
        self.connections.retain(|_, occupants| !occupants.is_empty());
    }

    /// Validate and establish connections between two elements.
    ///
    /// Two independent passes run in the same call:
    ///
    /// 1. **Terminal-to-terminal** — for every coordinate the two elements'
    ///    terminals share, both elements are recorded as occupants. A shared
    ///    coordinate already occupied by any other element is rejected with
    ///    [`Error::ConnectionConflict`]. Validation and recording happen
    ///    per-terminal in one pass, so a conflict on a later shared terminal
    ///    leaves earlier recordings in place.
    /// 2. **Terminal-to-wire-body** — when exactly one of the two is
    ///    wire-like, the other element's first terminal is tested against
    ///    each wire segment in order; the first segment containing it
    ///    receives the connection and scanning stops. No matching segment is
    ///    not an error.
    pub fn connect(&mut self, a_id: &str, b_id: &str) -> Result<()> {
        let a = self
            .elements
            .get(a_id)
            .ok_or_else(|| Error::ElementNotFound(a_id.to_string()))?;
        let b = self
            .elements
            .get(b_id)
            .ok_or_else(|| Error::ElementNotFound(b_id.to_string()))?;

        // Terminal-to-terminal pass.
        let a_keys: HashSet<String> = a.terminals().iter().map(|p| p.key()).collect();
        let shared: Vec<Position> = b
            .terminals()
            .iter()
            .copied()
            .filter(|node| a_keys.contains(&node.key()))
            .collect();

        for node in shared {
            let key = node.key();
            let occupied_by_other = self
                .connections
                .get(&key)
                .is_some_and(|occupants| {
                    occupants
                        .iter()
                        .any(|o| !o.is_element(a_id) && !o.is_element(b_id))
                });
            if occupied_by_other {
                return Err(Error::ConnectionConflict {
                    x: node.x(),
                    y: node.y(),
                });
            }
            let occupants = self.connections.entry(key).or_default();
            occupants.push(Occupant::Element(a_id.to_string()));
            occupants.push(Occupant::Element(b_id.to_string()));
        }

        // Terminal-to-wire-body pass.
        let a = self.elements.get(a_id).expect("looked up above");
        let b = self.elements.get(b_id).expect("looked up above");
        let wire_and_node = match (a.is_wire_like(), b.is_wire_like()) {
            (true, false) => Some((a_id, a.terminals().to_vec(), b.terminals()[0])),
            (false, true) => Some((b_id, b.terminals().to_vec(), a.terminals()[0])),
            _ => None,
        };

        if let Some((wire_id, wire_terminals, node)) = wire_and_node {
            for segment in wire_terminals.windows(2) {
                if point_on_segment(node, segment[0], segment[1]) {
                    let key = node.key();
                    let already_connected = self
                        .connections
                        .get(&key)
                        .is_some_and(|occupants| {
                            occupants.iter().any(|o| *o == Occupant::Terminal(node))
                        });
                    if already_connected {
                        return Err(Error::ConnectionConflict {
                            x: node.x(),
                            y: node.y(),
                        });
                    }
                    let occupants = self.connections.entry(key).or_default();
                    occupants.push(Occupant::Element(wire_id.to_string()));
                    occupants.push(Occupant::Terminal(node));
                    break;
                }
            }
        }

        Ok(())
    }

    /// Get an element by id.
    pub fn element(&self, id: &str) -> Option<&dyn Element> {
        self.elements.get(id).map(|e| e.as_ref())
    }

    /// Get a mutable element by id.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut (dyn Element + '_)> {
        self.elements.get_mut(id).map(|e| e.as_mut() as &mut (dyn Element + '_))
    }

    /// Whether an element with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Iterate over all elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &dyn Element> {
        self.elements.values().map(|e| e.as_ref())
    }

    /// Number of elements in the circuit.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the circuit has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the connection table in establishment order.
    pub fn connections(&self) -> impl Iterator<Item = (&str, &[Occupant])> {
        self.connections
            .iter()
            .map(|(key, occupants)| (key.as_str(), occupants.as_slice()))
    }

    /// Get the occupants at a coordinate key (e.g. `"10,20"`).
    pub fn occupants(&self, key: &str) -> Option<&[Occupant]> {
        self.connections.get(key).map(|o| o.as_slice())
    }

    /// Render the textual circuit description: one line per element, in
    /// insertion order.
    pub fn describe(&self) -> String {
        self.elements
            .values()
            .map(|e| e.describe())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
