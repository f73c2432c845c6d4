use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::mol2::Mol2Error;
use crate::core::io::peaks::PeakListError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No alpha/beta hydrogens detected; check the MOL2 structure file")]
    NoLabeledHydrogens,

    #[error("Failed to read structure file '{path}': {source}", path = path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: Mol2Error,
    },

    #[error("Failed to open peak list '{path}': {source}", path = path.display())]
    PeakListOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write filtered peak list '{path}': {source}", path = path.display())]
    PeakList {
        path: PathBuf,
        #[source]
        source: PeakListError,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
