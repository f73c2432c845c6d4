use abfilter::core::io::peaks::PeakListFormat;

pub struct DefaultsConfig {
    pub comment_prefix: String,
    /// 1-based, as written on the command line and in config files.
    pub atom_id_column: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let format = PeakListFormat::default();
        Self {
            comment_prefix: format.comment_prefix,
            atom_id_column: format.atom_id_column + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_core_format_with_one_based_column() {
        let defaults = DefaultsConfig::default();
        let format = PeakListFormat::default();
        assert_eq!(defaults.comment_prefix, format.comment_prefix);
        assert_eq!(defaults.atom_id_column, format.atom_id_column + 1);
        assert_eq!(defaults.atom_id_column, 3);
    }
}
