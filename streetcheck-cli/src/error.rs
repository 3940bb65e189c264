//! Error handling for the CLI application

use thiserror::Error;

/// Failure reading one input source. Per-source failures do not abort the
/// run: already aggregated state stays valid and the remaining sources are
/// still processed.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input file not readable
    #[error("cannot read input \"{source_name}\": {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// OSM XML data could not be parsed
    #[error("malformed OSM data in \"{source_name}\": {message}")]
    Xml { source_name: String, message: String },

    /// The input path has no recognized extension
    #[error("{path}: unsupported input format (expected .osm or .txt)")]
    UnsupportedFormat { path: String },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
