//! # Engine Module
//!
//! Structural inference on top of the [`crate::core`] models.
//!
//! - [`roles`] - Carbonyl, alpha and beta carbon detection and their attached hydrogens
//! - [`labels`] - Merging hydrogen sets into the label map with alpha-over-beta precedence
//! - [`config`] - Run configuration and its builder
//! - [`progress`] - Callback-based progress reporting for front ends
//! - [`error`] - The error type shared by the engine and the workflows

pub mod config;
pub mod error;
pub mod labels;
pub mod progress;
pub mod roles;
