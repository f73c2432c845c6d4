use crate::core::io::peaks::PeakListFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for {parameter}: {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub structure_path: PathBuf,
    pub peaks_input_path: PathBuf,
    pub peaks_output_path: PathBuf,
    pub format: PeakListFormat,
}

#[derive(Default)]
pub struct FilterConfigBuilder {
    structure_path: Option<PathBuf>,
    peaks_input_path: Option<PathBuf>,
    peaks_output_path: Option<PathBuf>,
    comment_prefix: Option<String>,
    atom_id_column: Option<usize>,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn structure_path(mut self, path: PathBuf) -> Self {
        self.structure_path = Some(path);
        self
    }
    pub fn peaks_input_path(mut self, path: PathBuf) -> Self {
        self.peaks_input_path = Some(path);
        self
    }
    pub fn peaks_output_path(mut self, path: PathBuf) -> Self {
        self.peaks_output_path = Some(path);
        self
    }
    pub fn comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }
    /// Zero-based index of the atom-serial column.
    pub fn atom_id_column(mut self, column: usize) -> Self {
        self.atom_id_column = Some(column);
        self
    }

    pub fn build(self) -> Result<FilterConfig, ConfigError> {
        let defaults = PeakListFormat::default();
        let comment_prefix = self.comment_prefix.unwrap_or(defaults.comment_prefix);
        if comment_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                parameter: "comment_prefix",
                reason: "must contain at least one non-whitespace character".to_string(),
            });
        }

        Ok(FilterConfig {
            structure_path: self
                .structure_path
                .ok_or(ConfigError::MissingParameter("structure_path"))?,
            peaks_input_path: self
                .peaks_input_path
                .ok_or(ConfigError::MissingParameter("peaks_input_path"))?,
            peaks_output_path: self
                .peaks_output_path
                .ok_or(ConfigError::MissingParameter("peaks_output_path"))?,
            format: PeakListFormat {
                comment_prefix,
                atom_id_column: self.atom_id_column.unwrap_or(defaults.atom_id_column),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FilterConfigBuilder {
        FilterConfigBuilder::new()
            .structure_path("res.mol2".into())
            .peaks_input_path("avg.dat".into())
            .peaks_output_path("avg_ab.dat".into())
    }

    #[test]
    fn build_applies_peak_list_defaults() {
        let config = complete().build().unwrap();
        assert_eq!(config.structure_path, PathBuf::from("res.mol2"));
        assert_eq!(config.format, PeakListFormat::default());
        assert_eq!(config.format.comment_prefix, "#");
        assert_eq!(config.format.atom_id_column, 2);
    }

    #[test]
    fn build_keeps_explicit_format() {
        let config = complete()
            .comment_prefix(";")
            .atom_id_column(0)
            .build()
            .unwrap();
        assert_eq!(config.format.comment_prefix, ";");
        assert_eq!(config.format.atom_id_column, 0);
    }

    #[test]
    fn missing_paths_are_reported() {
        let result = FilterConfigBuilder::new()
            .structure_path("res.mol2".into())
            .peaks_input_path("avg.dat".into())
            .build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("peaks_output_path"))
        );
    }

    #[test]
    fn blank_comment_prefix_is_rejected() {
        let result = complete().comment_prefix("  ").build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "comment_prefix",
                ..
            })
        ));
    }
}
