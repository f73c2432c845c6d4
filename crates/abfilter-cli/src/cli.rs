use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "abfilter",
    author = "NMR Prague Group",
    version,
    about = "abfilter - Filter an NMR peak list to the alpha/beta hydrogens of an amino-acid residue and label them A<id> or B<id>.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input peak list (e.g., avg.dat).
    #[arg(value_name = "DATA_IN")]
    pub data_in: PathBuf,

    /// Path to the MOL2 structure of the residue.
    #[arg(value_name = "STRUCTURE")]
    pub structure: PathBuf,

    /// Path for the filtered peak list (e.g., avg_ab.dat).
    #[arg(value_name = "DATA_OUT")]
    pub data_out: PathBuf,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Peak-List Format Overrides ---
    /// Override the prefix that marks comment lines in the peak list.
    #[arg(long, value_name = "STR")]
    pub comment_prefix: Option<String>,

    /// Override the 1-based column holding the atom serial.
    #[arg(long, value_name = "INT")]
    pub atom_id_column: Option<usize>,

    /// Print the classified carbonyl, alpha and beta atoms after filtering.
    #[arg(long)]
    pub show_roles: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S peak-list.atom-id-column=4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}
