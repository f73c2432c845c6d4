//! Provides input/output functionality for the files this crate consumes.
//!
//! The structure side is read through the [`traits::TopologyFile`] interface,
//! implemented for Tripos MOL2 by [`mol2::Mol2File`]. The peak-list side is a
//! streaming line filter in [`peaks`] that rewrites the atom column with the
//! labels produced by the engine.

pub mod mol2;
pub mod peaks;
pub mod traits;
