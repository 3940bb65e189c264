//! Command-line interface for streetcheck
//!
//! Wires the extraction adapters (OSM XML and line-delimited text) to the
//! core matching engine: loads the canonical dictionaries, feeds every
//! candidate name through the aggregator, and renders the statistics and
//! optional data dumps.

pub mod app;
pub mod args;
pub mod error;
pub mod input;
