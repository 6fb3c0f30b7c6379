//! CircuitService: use-case orchestration over the circuit aggregate.

use breadboard_core::{BoxedElement, Circuit, Element, Label, Occupant, Position, Properties};
use breadboard_elements::ElementRegistry;
use indexmap::IndexSet;
use log::debug;

use crate::error::Result;
use crate::id::IdGenerator;

/// Orchestrates operations on a [`Circuit`]: adding, deleting, and
/// connecting elements, with validation delegated to the aggregate.
///
/// The aggregate's connection table is coordinate-indexed; the service also
/// keeps an explicit element-pair adjacency so "which elements are linked to
/// X" is answerable without scanning coordinates.
#[derive(Debug, Default)]
pub struct CircuitService {
    circuit: Circuit,
    links: IndexSet<(String, String)>,
    ids: IdGenerator,
}

impl CircuitService {
    /// Create a service over an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service over an existing circuit.
    pub fn with_circuit(circuit: Circuit) -> Self {
        Self {
            circuit,
            links: IndexSet::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Add a pre-built element to the circuit.
    pub fn add_element(&mut self, element: BoxedElement) -> Result<()> {
        let id = element.id().to_string();
        self.circuit.add_element(element)?;
        debug!("added element {id}");
        Ok(())
    }

    /// Create an element through the registry and add it to the circuit,
    /// returning its id.
    ///
    /// When `id` is `None`, one is generated from the type name's first
    /// letter, uppercased (e.g. `R1` for the first resistor).
    pub fn create_element(
        &mut self,
        registry: &ElementRegistry,
        type_name: &str,
        id: Option<String>,
        terminals: Vec<Position>,
        label: Option<Label>,
        properties: Properties,
    ) -> Result<String> {
        let id = match id {
            Some(id) => id,
            None => {
                let prefix: String = type_name.chars().take(1).flat_map(char::to_uppercase).collect();
                self.ids.next_id(&prefix)
            }
        };
        let element = registry.create(type_name, id.clone(), terminals, label, properties)?;
        self.add_element(element)?;
        Ok(id)
    }

    /// Delete an element by id, pruning it from the connection table and the
    /// pair adjacency. Unknown ids are tolerated.
    pub fn delete_element(&mut self, id: &str) {
        self.circuit.delete_element(id);
        self.links.retain(|(a, b)| a != id && b != id);
        debug!("deleted element {id}");
    }

    /// Connect two elements by id.
    ///
    /// Validation and coordinate recording are the aggregate's; on success
    /// the pair is also recorded in the adjacency set (once, regardless of
    /// orientation or how many coordinates the elements share).
    pub fn connect(&mut self, a_id: &str, b_id: &str) -> Result<()> {
        self.circuit.connect(a_id, b_id)?;
        let known = self.links.contains(&(a_id.to_string(), b_id.to_string()))
            || self.links.contains(&(b_id.to_string(), a_id.to_string()));
        if !known {
            self.links.insert((a_id.to_string(), b_id.to_string()));
        }
        debug!("connected {a_id} and {b_id}");
        Ok(())
    }

    /// All elements connected to the given element, derived by scanning the
    /// coordinate table for occupant lists containing it and collecting the
    /// co-occupant elements (self excluded, duplicates removed).
    pub fn find_connections(&self, id: &str) -> Vec<&str> {
        let mut found: IndexSet<&str> = IndexSet::new();
        for (_, occupants) in self.circuit.connections() {
            if !occupants.iter().any(|o| o.is_element(id)) {
                continue;
            }
            for occupant in occupants {
                if let Occupant::Element(other) = occupant {
                    if other != id {
                        found.insert(other.as_str());
                    }
                }
            }
        }
        found.into_iter().collect()
    }

    /// The linked partners of an element, from the pair adjacency.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.links
            .iter()
            .filter_map(|(a, b)| {
                if a == id {
                    Some(b.as_str())
                } else if b == id {
                    Some(a.as_str())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Read access to the underlying circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Get an element by id.
    pub fn element(&self, id: &str) -> Option<&dyn Element> {
        self.circuit.element(id)
    }

    /// Mutable access to an element, for move/rotate/property edits.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut dyn Element> {
        self.circuit.element_mut(id)
    }

    /// Iterate over all elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &dyn Element> {
        self.circuit.elements()
    }

    /// The textual circuit description.
    pub fn describe(&self) -> String {
        self.circuit.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breadboard_elements::standard_registry;

    fn pos(x: f64, y: f64) -> Position {
        Position::new(x, y).unwrap()
    }

    fn service_with(
        parts: &[(&str, &str, Vec<Position>)],
    ) -> (CircuitService, ElementRegistry) {
        let registry = standard_registry();
        let mut service = CircuitService::new();
        for (type_name, id, terminals) in parts {
            service
                .create_element(
                    &registry,
                    type_name,
                    Some(id.to_string()),
                    terminals.clone(),
                    None,
                    Properties::new(),
                )
                .unwrap();
        }
        (service, registry)
    }

    #[test]
    fn test_create_element_with_generated_id() {
        let registry = standard_registry();
        let mut service = CircuitService::new();

        let id = service
            .create_element(
                &registry,
                "resistor",
                None,
                vec![pos(10.0, 20.0), pos(30.0, 40.0)],
                None,
                Properties::new(),
            )
            .unwrap();
        assert_eq!(id, "R1");

        let id = service
            .create_element(
                &registry,
                "wire",
                None,
                vec![pos(30.0, 40.0), pos(60.0, 40.0)],
                None,
                Properties::new(),
            )
            .unwrap();
        assert_eq!(id, "W2");

        assert_eq!(service.elements().count(), 2);
    }

    #[test]
    fn test_connect_records_pair_once() {
        let (mut service, _registry) = service_with(&[
            ("resistor", "R1", vec![pos(10.0, 20.0), pos(30.0, 40.0)]),
            ("capacitor", "C1", vec![pos(10.0, 20.0), pos(50.0, 60.0)]),
        ]);

        service.connect("R1", "C1").unwrap();
        service.connect("C1", "R1").unwrap();

        assert_eq!(service.neighbors("R1"), vec!["C1"]);
        assert_eq!(service.neighbors("C1"), vec!["R1"]);
    }

    #[test]
    fn test_find_connections_scans_coordinates() {
        let (mut service, _registry) = service_with(&[
            ("resistor", "R1", vec![pos(10.0, 20.0), pos(30.0, 40.0)]),
            ("capacitor", "C1", vec![pos(10.0, 20.0), pos(50.0, 60.0)]),
            ("resistor", "R2", vec![pos(30.0, 40.0), pos(70.0, 80.0)]),
        ]);

        service.connect("R1", "C1").unwrap();
        service.connect("R1", "R2").unwrap();

        let connections = service.find_connections("R1");
        assert_eq!(connections, vec!["C1", "R2"]);
        assert_eq!(service.find_connections("C1"), vec!["R1"]);
    }

    #[test]
    fn test_find_connections_empty_for_isolated_element() {
        let (service, _registry) =
            service_with(&[("resistor", "R1", vec![pos(10.0, 20.0), pos(30.0, 40.0)])]);
        assert!(service.find_connections("R1").is_empty());
        assert!(service.neighbors("R1").is_empty());
    }

    #[test]
    fn test_delete_prunes_adjacency() {
        let (mut service, _registry) = service_with(&[
            ("resistor", "R1", vec![pos(10.0, 20.0), pos(30.0, 40.0)]),
            ("capacitor", "C1", vec![pos(10.0, 20.0), pos(50.0, 60.0)]),
        ]);
        service.connect("R1", "C1").unwrap();

        service.delete_element("R1");

        assert!(service.element("R1").is_none());
        assert!(service.neighbors("C1").is_empty());
        assert_eq!(service.circuit().connections().count(), 0);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let (mut service, _registry) =
            service_with(&[("resistor", "R1", vec![pos(10.0, 20.0), pos(30.0, 40.0)])]);
        service.delete_element("ghost");
        assert_eq!(service.elements().count(), 1);
    }

    #[test]
    fn test_conflict_does_not_record_pair() {
        let (mut service, _registry) = service_with(&[
            ("resistor", "R1", vec![pos(10.0, 20.0), pos(30.0, 40.0)]),
            ("capacitor", "C1", vec![pos(10.0, 20.0), pos(50.0, 60.0)]),
            ("resistor", "R2", vec![pos(10.0, 20.0), pos(70.0, 80.0)]),
        ]);

        service.connect("R1", "C1").unwrap();
        assert!(service.connect("R1", "R2").is_err());

        assert_eq!(service.neighbors("R1"), vec!["C1"]);
        assert!(service.neighbors("R2").is_empty());
    }
}
