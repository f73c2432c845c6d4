pub mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use abfilter::engine::config as core_config;
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialPeakListConfig {
    #[serde(rename = "comment-prefix")]
    comment_prefix: Option<String>,
    #[serde(rename = "atom-id-column")]
    atom_id_column: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialFilterConfig {
    #[serde(rename = "peak-list")]
    peak_list: Option<PartialPeakListConfig>,
}

impl PartialFilterConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or an empty configuration if none was given.
    pub fn load(cli: &Cli) -> Result<Self> {
        match &cli.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<core_config::FilterConfig> {
        self.apply_set_values(&cli.set_values)?;

        let defaults = DefaultsConfig::default();
        let peak_list = self.peak_list.take().unwrap_or_default();

        let comment_prefix = cli
            .comment_prefix
            .clone()
            .or(peak_list.comment_prefix)
            .unwrap_or(defaults.comment_prefix);
        let atom_id_column = cli
            .atom_id_column
            .or(peak_list.atom_id_column)
            .unwrap_or(defaults.atom_id_column);
        if atom_id_column == 0 {
            return Err(CliError::Argument(
                "The atom-id column is 1-based and must be at least 1.".to_string(),
            ));
        }

        core_config::FilterConfigBuilder::new()
            .structure_path(cli.structure.clone())
            .peaks_input_path(cli.data_in.clone())
            .peaks_output_path(cli.data_out.clone())
            .comment_prefix(comment_prefix)
            .atom_id_column(atom_id_column - 1)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "peak-list.comment-prefix" => {
                    self.peak_list
                        .get_or_insert_with(Default::default)
                        .comment_prefix = Some(value_str.to_string());
                }
                "peak-list.atom-id-column" => {
                    self.peak_list
                        .get_or_insert_with(Default::default)
                        .atom_id_column = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let file_path = dir.path().join("abfilter.toml");
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn cli_with(extra: &[&str]) -> Cli {
        let mut args = vec!["abfilter"];
        args.extend_from_slice(extra);
        args.extend_from_slice(&["avg.dat", "res.mol2", "avg_ab.dat"]);
        Cli::parse_from(args)
    }

    #[test]
    fn defaults_apply_without_config_file() {
        let cli = cli_with(&[]);
        let config = PartialFilterConfig::load(&cli)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();

        assert_eq!(config.peaks_input_path, PathBuf::from("avg.dat"));
        assert_eq!(config.structure_path, PathBuf::from("res.mol2"));
        assert_eq!(config.peaks_output_path, PathBuf::from("avg_ab.dat"));
        assert_eq!(config.format.comment_prefix, "#");
        assert_eq!(config.format.atom_id_column, 2);
    }

    #[test]
    fn file_values_are_used() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
        [peak-list]
        comment-prefix = ";"
        atom-id-column = 1
        "#,
        );
        let cli = cli_with(&["-c", path.to_str().unwrap()]);
        let config = PartialFilterConfig::load(&cli)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();

        assert_eq!(config.format.comment_prefix, ";");
        assert_eq!(config.format.atom_id_column, 0);
    }

    #[test]
    fn cli_args_override_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
        [peak-list]
        comment-prefix = ";" # Will be overridden
        atom-id-column = 1
        "#,
        );
        let cli = cli_with(&["-c", path.to_str().unwrap(), "--comment-prefix", "%"]);
        let config = PartialFilterConfig::load(&cli)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();

        assert_eq!(config.format.comment_prefix, "%");
        assert_eq!(config.format.atom_id_column, 0);
    }

    #[test]
    fn set_value_overrides_file_value() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "[peak-list]\natom-id-column = 1\n");
        let cli = cli_with(&[
            "-c",
            path.to_str().unwrap(),
            "-S",
            "peak-list.atom-id-column=4",
        ]);
        let config = PartialFilterConfig::load(&cli)
            .unwrap()
            .merge_with_cli(&cli)
            .unwrap();

        assert_eq!(config.format.atom_id_column, 3);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "[peak-list]\nppm-column = 1\n");
        let result = PartialFilterConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));

        let cli = cli_with(&["-S", "structure.format=sdf"]);
        let result = PartialFilterConfig::default().merge_with_cli(&cli);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        let cli = cli_with(&["-S", "peak-list.atom-id-column"]);
        let result = PartialFilterConfig::default().merge_with_cli(&cli);
        assert!(matches!(result, Err(CliError::Config(_))));

        let cli = cli_with(&["-S", "peak-list.atom-id-column=third"]);
        let result = PartialFilterConfig::default().merge_with_cli(&cli);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn zero_column_is_rejected() {
        let cli = cli_with(&["--atom-id-column", "0"]);
        let result = PartialFilterConfig::default().merge_with_cli(&cli);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn blank_comment_prefix_is_a_config_error() {
        let cli = cli_with(&["--comment-prefix", " "]);
        let result = PartialFilterConfig::default().merge_with_cli(&cli);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = PartialFilterConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
