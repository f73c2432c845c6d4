use super::atom::{Atom, Element};
use super::graph::BondedGraph;
use super::ids::AtomSerial;
use super::topology::Bond;
use std::collections::BTreeMap;

/// A parsed structure: the atom table and its bonded graph.
///
/// Atoms are keyed by serial. Bonds may reference serials that have no atom
/// record; such endpoints simply have no element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    atoms: BTreeMap<AtomSerial, Atom>,
    graph: BondedGraph,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an atom, replacing any earlier atom with the same serial.
    ///
    /// # Return
    ///
    /// Returns the replaced atom, if there was one.
    pub fn insert_atom(&mut self, atom: Atom) -> Option<Atom> {
        self.atoms.insert(atom.serial, atom)
    }

    pub fn add_bond(&mut self, bond: Bond) {
        self.graph.add_bond(bond);
    }

    pub fn atom(&self, serial: AtomSerial) -> Option<&Atom> {
        self.atoms.get(&serial)
    }

    pub fn element_of(&self, serial: AtomSerial) -> Option<Element> {
        self.atoms.get(&serial).and_then(|atom| atom.element)
    }

    /// Returns `true` if the serial has an atom record of the given element.
    pub fn is_element(&self, serial: AtomSerial, element: Element) -> bool {
        self.element_of(serial) == Some(element)
    }

    /// Iterates atoms in ascending serial order.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.values()
    }

    pub fn graph(&self) -> &BondedGraph {
        &self.graph
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.bond_count()
    }
}
