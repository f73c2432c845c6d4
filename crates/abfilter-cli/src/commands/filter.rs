use crate::cli::Cli;
use crate::config::PartialFilterConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use abfilter::{
    core::models::{ids::AtomSerial, structure::Structure},
    engine::progress::ProgressReporter,
    workflows::{self, filter::FilterReport},
};
use std::collections::BTreeSet;
use tracing::info;

pub fn run(cli: &Cli) -> Result<()> {
    let partial_config = PartialFilterConfig::load(cli)?;
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(cli)?;

    let progress_handler = if cli.quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core filter workflow...");
    let report = workflows::filter::run(&final_config, &reporter)?;

    println!(
        "✓ {} of {} line(s) written to {} ({} labeled, {} dropped).",
        report.stats.copied + report.stats.labeled,
        report.stats.lines_read(),
        final_config.peaks_output_path.display(),
        report.stats.labeled,
        report.stats.dropped
    );

    if cli.show_roles {
        print!("{}", render_roles(&report));
    }

    Ok(())
}

fn render_roles(report: &FilterReport) -> String {
    let roles = &report.roles;
    let rows: [(&str, &BTreeSet<AtomSerial>); 5] = [
        ("Carbonyl C", &roles.carbonyl_carbons),
        ("Alpha C", &roles.alpha_carbons),
        ("Beta C", &roles.beta_carbons),
        ("Alpha H", &roles.alpha_hydrogens),
        ("Beta H", &roles.beta_hydrogens),
    ];

    rows.iter()
        .map(|(title, serials)| format!("{title:<12}{}\n", describe(&report.structure, serials)))
        .collect()
}

fn describe(structure: &Structure, serials: &BTreeSet<AtomSerial>) -> String {
    if serials.is_empty() {
        return "-".to_string();
    }
    serials
        .iter()
        .map(|&serial| match structure.atom(serial) {
            Some(atom) => format!("{}({})", serial, atom.name),
            None => serial.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
