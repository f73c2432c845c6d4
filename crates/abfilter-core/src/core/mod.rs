//! # Core Module
//!
//! Stateless building blocks: the data model of a parsed structure and the
//! readers and writers for the two file formats involved.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, the bonded graph, and hydrogen labels
//! - **File I/O** ([`io`]) - MOL2 topology reading and peak-list filtering
//!
//! Nothing in this module performs structural inference; that lives in
//! [`crate::engine`].

pub mod io;
pub mod models;
