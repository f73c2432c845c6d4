use super::ids::AtomSerial;
use super::topology::{Bond, BondOrder};
use std::collections::{BTreeMap, HashMap};

/// Undirected bonded graph of a structure.
///
/// Every bond is stored twice: once in the neighbor list of each endpoint, and
/// once in a canonical-pair table keyed by `(smaller serial, larger serial)`.
/// Both views are updated together by [`BondedGraph::add_bond`], so they agree
/// for every bond that was ever added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BondedGraph {
    /// Neighbor lists keyed by atom serial, in bond-record order.
    neighbors: HashMap<AtomSerial, Vec<(AtomSerial, BondOrder)>>,
    /// One order per unordered atom pair; a repeated pair keeps the last order seen.
    bond_orders: BTreeMap<(AtomSerial, AtomSerial), BondOrder>,
}

impl BondedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a bond in both the neighbor lists and the canonical-pair table.
    pub fn add_bond(&mut self, bond: Bond) {
        self.neighbors
            .entry(bond.atom1)
            .or_default()
            .push((bond.atom2, bond.order));
        self.neighbors
            .entry(bond.atom2)
            .or_default()
            .push((bond.atom1, bond.order));
        self.bond_orders.insert(bond.canonical_key(), bond.order);
    }

    /// Returns the neighbors of an atom, or an empty slice for an unbonded serial.
    pub fn neighbors(&self, serial: AtomSerial) -> &[(AtomSerial, BondOrder)] {
        self.neighbors
            .get(&serial)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn bond_order(&self, a: AtomSerial, b: AtomSerial) -> Option<BondOrder> {
        self.bond_orders.get(&(a.min(b), a.max(b))).copied()
    }

    /// Iterates the canonical-pair table in ascending pair order.
    pub fn bonds(&self) -> impl Iterator<Item = Bond> + '_ {
        self.bond_orders
            .iter()
            .map(|(&(a, b), &order)| Bond::new(a, b, order))
    }

    /// Number of distinct unordered atom pairs.
    pub fn bond_count(&self) -> usize {
        self.bond_orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bond_orders.is_empty()
    }
}
