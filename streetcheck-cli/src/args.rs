//! Command-line argument definitions

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Dictionary file used when no `-f` option is given.
pub const DEFAULT_DATABASE: &str = "streets.txt";

/// `addr` tags extracted from OSM data by default.
pub const DEFAULT_ADDR_TAGS: &[&str] = &[
    "addr:street",
    "addr:street1",
    "addr:street2",
    "addr:street3",
    "addr2:street",
    "addr3:street",
];

/// `name` tags extracted from OSM data by default.
pub const DEFAULT_NAME_TAGS: &[&str] = &["name"];

/// Validate street names from OSM or text files against a canonical
/// dictionary.
#[derive(Debug, Parser)]
#[command(name = "streetcheck", version, about)]
pub struct CliArgs {
    /// Display per-street statistics (takes extra memory)
    #[arg(short = 's', long)]
    pub per_street_stats: bool,

    /// Dump per-street candidate lists to FILE (implies per-street stats)
    #[arg(
        short = 'd',
        long,
        value_name = "FILE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "dump.txt"
    )]
    pub dump: Option<PathBuf>,

    /// Include candidate frequencies in dumps
    #[arg(short = 'c', long)]
    pub count_names: bool,

    /// Locale for name normalization
    #[arg(short = 'l', long, default_value = "en_US")]
    pub locale: String,

    /// Spelling check distance
    #[arg(short = 'p', long, value_name = "N", default_value_t = 1)]
    pub spell_distance: usize,

    /// Street-name database file (may be given more than once)
    #[arg(short = 'f', long = "database", value_name = "FILE")]
    pub databases: Vec<PathBuf>,

    /// addr tag to extract from OSM data (may be given more than once)
    #[arg(short = 'a', long = "addr-tag", value_name = "TAG")]
    pub addr_tags: Vec<String>,

    /// name tag to extract from OSM data (may be given more than once)
    #[arg(short = 'n', long = "name-tag", value_name = "TAG")]
    pub name_tags: Vec<String>,

    /// Don't use the default addr tag set
    #[arg(short = 'A', long)]
    pub no_default_addr_tags: bool,

    /// Don't use the default name tag set
    #[arg(short = 'N', long)]
    pub no_default_name_tags: bool,

    /// Classify names in parallel (buffers all extracted names in memory)
    #[arg(long)]
    pub parallel: bool,

    /// Statistics output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: StatsFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Input files: file.osm, file.txt, or "-" for OSM data on stdin
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<String>,
}

/// Statistics output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StatsFormat {
    /// Plain text counters and summaries
    Text,
    /// JSON statistics report
    Json,
}

impl CliArgs {
    /// Database paths to load, falling back to [`DEFAULT_DATABASE`].
    pub fn effective_databases(&self) -> Vec<PathBuf> {
        if self.databases.is_empty() {
            vec![PathBuf::from(DEFAULT_DATABASE)]
        } else {
            self.databases.clone()
        }
    }

    /// addr tags to extract, respecting `-a` and `-A`.
    pub fn effective_addr_tags(&self) -> Vec<String> {
        if !self.addr_tags.is_empty() {
            self.addr_tags.clone()
        } else if self.no_default_addr_tags {
            Vec::new()
        } else {
            DEFAULT_ADDR_TAGS.iter().map(|t| t.to_string()).collect()
        }
    }

    /// name tags to extract, respecting `-n` and `-N`.
    pub fn effective_name_tags(&self) -> Vec<String> {
        if !self.name_tags.is_empty() {
            self.name_tags.clone()
        } else if self.no_default_name_tags {
            Vec::new()
        } else {
            DEFAULT_NAME_TAGS.iter().map(|t| t.to_string()).collect()
        }
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}
