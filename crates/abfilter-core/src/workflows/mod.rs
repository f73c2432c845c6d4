//! # Workflows Module
//!
//! Top-level entry points that tie the [`crate::core`] readers and the
//! [`crate::engine`] inference together into complete runs.
//!
//! - **Filter Workflow** ([`filter`]) - Read a MOL2 residue, label its alpha and beta
//!   hydrogens, and rewrite the companion peak list with those labels.

pub mod filter;
