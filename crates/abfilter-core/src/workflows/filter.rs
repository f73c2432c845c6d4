use crate::core::io::mol2::Mol2File;
use crate::core::io::peaks::{self, FilterStats};
use crate::core::io::traits::TopologyFile;
use crate::core::models::label::{LabelMap, Role};
use crate::core::models::structure::Structure;
use crate::engine::config::FilterConfig;
use crate::engine::error::EngineError;
use crate::engine::labels::resolve_labels;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::roles::RoleSets;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use tracing::{info, instrument};

/// Everything a filter run produced, for reporting by the caller.
#[derive(Debug, Clone)]
pub struct FilterReport {
    pub structure: Structure,
    pub roles: RoleSets,
    pub labels: LabelMap,
    pub stats: FilterStats,
}

/// Classifies the residue in the structure file and rewrites the peak list.
///
/// The output file is created only after the label map has been resolved and
/// the input peak list has been opened, so a structure without alpha or beta
/// hydrogens never truncates an existing output.
///
/// # Errors
///
/// Returns [`EngineError::NoLabeledHydrogens`] if the structure yields no
/// labeled hydrogen, or an I/O-related variant naming the offending path.
#[instrument(skip_all, name = "filter_workflow")]
pub fn run(
    config: &FilterConfig,
    reporter: &ProgressReporter,
) -> Result<FilterReport, EngineError> {
    // === Phase 1: Read the structure ===
    reporter.report(Progress::PhaseStart {
        name: "Reading Structure",
    });
    let structure = Mol2File::read_from_path(&config.structure_path).map_err(|source| {
        EngineError::Structure {
            path: config.structure_path.clone(),
            source,
        }
    })?;
    info!(
        atoms = structure.atom_count(),
        bonds = structure.bond_count(),
        "Structure loaded from {:?}.",
        config.structure_path
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Classify atoms and resolve labels ===
    reporter.report(Progress::PhaseStart {
        name: "Classifying Atoms",
    });
    let roles = RoleSets::classify(&structure);
    info!(
        carbonyl = roles.carbonyl_carbons.len(),
        alpha = roles.alpha_carbons.len(),
        beta = roles.beta_carbons.len(),
        "Backbone and side-chain carbons identified."
    );
    let labels = resolve_labels(&roles)?;
    reporter.report(Progress::Message(format!(
        "{} alpha / {} beta hydrogen(s) labeled",
        labels.count_of(Role::Alpha),
        labels.count_of(Role::Beta)
    )));
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Filter the peak list ===
    reporter.report(Progress::PhaseStart {
        name: "Filtering Peak List",
    });
    let stats = filter_peak_file(config, &labels)?;
    info!(
        labeled = stats.labeled,
        copied = stats.copied,
        dropped = stats.dropped,
        "Peak list written to {:?}.",
        config.peaks_output_path
    );
    reporter.report(Progress::PhaseFinish);

    Ok(FilterReport {
        structure,
        roles,
        labels,
        stats,
    })
}

fn filter_peak_file(
    config: &FilterConfig,
    labels: &LabelMap,
) -> Result<FilterStats, EngineError> {
    let input = File::open(&config.peaks_input_path).map_err(|source| EngineError::PeakListOpen {
        path: config.peaks_input_path.clone(),
        source,
    })?;
    let output_err = |source| EngineError::PeakList {
        path: config.peaks_output_path.clone(),
        source,
    };
    let output = File::create(&config.peaks_output_path)
        .map_err(|e| output_err(peaks::PeakListError::Io(e)))?;

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    peaks::filter_peaks(&mut reader, &mut writer, labels, &config.format).map_err(output_err)
}
