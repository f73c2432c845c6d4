//! # Core Models Module
//!
//! Data structures describing a parsed structure and the labels derived from it.
//!
//! ## Key Components
//!
//! - [`atom`] - Atom records and the element lookup derived from atom types
//! - [`topology`] - Integer bond orders and bonds between atom serials
//! - [`graph`] - Undirected bonded graph with symmetric neighbor lists and a canonical-pair table
//! - [`structure`] - Atom table plus bonded graph, as produced by the MOL2 reader
//! - [`label`] - Alpha/beta roles and the hydrogen label map consumed by the peak-list filter
//! - [`ids`] - The atom serial type shared by all of the above
//!
//! ## Usage
//!
//! ```ignore
//! use abfilter::core::models::{atom::Atom, structure::Structure, topology::{Bond, BondOrder}};
//!
//! let mut structure = Structure::new();
//! structure.insert_atom(Atom::new(3, "C", "C.2"));
//! structure.insert_atom(Atom::new(4, "O", "O.2"));
//! structure.add_bond(Bond::new(3, 4, BondOrder::DOUBLE));
//! ```

pub mod atom;
pub mod graph;
pub mod ids;
pub mod label;
pub mod structure;
pub mod topology;
