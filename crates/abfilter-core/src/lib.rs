//! # abfilter Core Library
//!
//! Identifies the alpha and beta hydrogens of a single amino-acid residue from
//! its MOL2 topology, and uses them to filter and relabel an NMR peak list.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure`, `BondedGraph`,
//!   `LabelMap`) and the file readers and writers (`Mol2File`, the peak-list filter).
//!
//! - **[`engine`]: The Logic Core.** Connectivity-based inference: carbonyl, alpha and
//!   beta carbon detection, their attached hydrogens, and the alpha-over-beta label
//!   resolution. Also holds configuration, progress reporting and the error type.
//!
//! - **[`workflows`]: The Public API.** Runs the complete pipeline from structure file
//!   to rewritten peak list in one call.

pub mod core;
pub mod engine;
pub mod workflows;
