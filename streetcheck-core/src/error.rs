//! Error types for the core library

use thiserror::Error;

/// Error constructing a [`Locale`](crate::Locale).
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The locale identifier does not name a built-in locale
    #[error("unknown locale \"{0}\"")]
    UnknownLocale(String),
}

/// Error loading a dictionary source into a
/// [`StreetDatabase`](crate::StreetDatabase).
///
/// A load failure is fatal for the run: a partially loaded database would
/// silently misclassify, so callers must abort before processing any
/// candidate. The I/O and malformed-line cases are kept distinct so the
/// offending source can be reported precisely.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dictionary source could not be read
    #[error("failed to read dictionary \"{source_name}\": {error}")]
    Io {
        /// Name of the dictionary source (file path or stream label)
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    /// A dictionary line is structurally invalid
    #[error("malformed dictionary line {line} in \"{source_name}\": {reason}")]
    Malformed {
        /// Name of the dictionary source (file path or stream label)
        source_name: String,
        /// One-based line number of the offending line
        line: usize,
        reason: String,
    },
}
