//! Street-name validation against a canonical reference dictionary
//!
//! This crate classifies observed street-name strings against a dictionary of
//! known-good names for a locale. Each candidate resolves to an exact match,
//! a close match within a bounded edit distance (a probable misspelling), an
//! ambiguous match (several canonical names tie at the minimal distance), or
//! no match at all. A streaming aggregator accumulates per-candidate and
//! per-street statistics and renders deterministic text reports.
//!
//! # Architecture
//!
//! - **Locale layer**: locale-aware normalization (case folding, punctuation
//!   and whitespace standardization, street-type abbreviation expansion)
//! - **Database layer**: canonical entry storage with an exact index and a
//!   length-bucketed approximate index
//! - **Aggregation layer**: streaming classification driver with global and
//!   per-street counters and report dumps
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use std::sync::Arc;
//! use streetcheck_core::{
//!     AggregatorConfig, Locale, MatchKind, NameAggregator, StreetDatabase,
//! };
//!
//! let locale = Locale::new("en_US").unwrap();
//! let mut database = StreetDatabase::new(locale);
//! database
//!     .load_from_reader("streets", Cursor::new("Main Street\nOak Avenue\n"))
//!     .unwrap();
//!
//! let result = database.classify("Man Street", 1);
//! assert!(matches!(result.kind(), MatchKind::CloseMatch { distance: 1, .. }));
//!
//! let mut aggregator = NameAggregator::new(Arc::new(database), AggregatorConfig::default());
//! aggregator.process_name("Main Street");
//! aggregator.process_name("Pine Road");
//! assert_eq!(aggregator.stats().counters().exact, 1);
//! assert_eq!(aggregator.stats().counters().unmatched, 1);
//! ```

pub mod aggregator;
pub mod database;
pub mod distance;
pub mod error;
pub mod locale;

pub use aggregator::{
    AggregateStats, AggregatorConfig, GlobalCounters, NameAggregator, StatsReport, StreetSummary,
};
pub use database::{CanonicalStreetName, MatchKind, MatchResult, StreetDatabase};
pub use distance::{bounded_edit_distance, edit_distance};
pub use error::{LoadError, LocaleError};
pub use locale::{Locale, LocaleRules};
