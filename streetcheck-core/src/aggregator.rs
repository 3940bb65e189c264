//! Streaming classification and statistics aggregation
//!
//! The aggregator feeds candidate names through the database and keeps
//! running statistics: global counters always, per-street buckets when
//! enabled. All per-street state lives in `BTreeMap`s keyed by normalized
//! form, which makes the final statistics independent of input order and
//! the dump output deterministic.
//!
//! Dumps are read-only projections of the accumulated state: calling them
//! repeatedly with no intervening processing yields byte-identical output.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::Arc;

use serde::Serialize;

use crate::database::{CanonicalStreetName, MatchKind, MatchResult, StreetDatabase};

/// Aggregation options.
#[derive(Debug, Clone, Copy)]
pub struct AggregatorConfig {
    /// Keep per-street buckets (candidate lists, per-street counters).
    /// Off by default to save memory on very large runs.
    pub per_street_stats: bool,
    /// Render candidate frequencies in data dumps instead of listing each
    /// distinct candidate once.
    pub count_names: bool,
    /// Maximum edit distance for close matches, passed through to
    /// [`StreetDatabase::classify`].
    pub spell_distance: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            per_street_stats: false,
            count_names: false,
            spell_distance: 1,
        }
    }
}

/// Global classification counters.
///
/// Invariant: `exact + close_match + unmatched + ambiguous == processed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GlobalCounters {
    pub processed: u64,
    pub exact: u64,
    pub close_match: u64,
    pub unmatched: u64,
    pub ambiguous: u64,
}

/// Per-street bucket: counters plus the multiset of candidate strings
/// that matched this canonical entry.
#[derive(Debug, Clone)]
struct StreetBucket {
    entry: Arc<CanonicalStreetName>,
    exact: u64,
    close_match: u64,
    /// Candidate text -> occurrence count, ordered for deterministic dumps.
    candidates: BTreeMap<String, u64>,
}

impl StreetBucket {
    fn new(entry: Arc<CanonicalStreetName>) -> Self {
        Self {
            entry,
            exact: 0,
            close_match: 0,
            candidates: BTreeMap::new(),
        }
    }

    fn occurrences(&self) -> u64 {
        self.exact + self.close_match
    }
}

/// Accumulated statistics for one aggregation run.
///
/// Grows monotonically while names are processed; reset only by creating
/// a new aggregator.
#[derive(Debug, Clone, Default)]
pub struct AggregateStats {
    counters: GlobalCounters,
    /// Normalized canonical form -> bucket. Populated only with
    /// per-street stats enabled.
    streets: BTreeMap<String, StreetBucket>,
    /// Unmatched candidate text -> occurrence count.
    unmatched: BTreeMap<String, u64>,
    /// Ambiguous candidate text -> occurrence count.
    ambiguous: BTreeMap<String, u64>,
}

impl AggregateStats {
    /// Global counters.
    pub fn counters(&self) -> GlobalCounters {
        self.counters
    }

    /// Number of canonical streets that received at least one match.
    /// Zero unless per-street stats are enabled.
    pub fn matched_street_count(&self) -> usize {
        self.streets.len()
    }
}

/// Serializable summary of one canonical street's statistics.
#[derive(Debug, Clone, Serialize)]
pub struct StreetSummary {
    /// Primary canonical text.
    pub name: String,
    /// Number of distinct candidate strings that matched.
    pub distinct_candidates: usize,
    /// Total matched occurrences (exact + close).
    pub occurrences: u64,
    pub exact: u64,
    pub close_match: u64,
}

/// Serializable statistics report, the structured counterpart of
/// [`NameAggregator::dump_stats`].
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub locale: String,
    #[serde(flatten)]
    pub counters: GlobalCounters,
    /// Present only when per-street stats are enabled; ordered by
    /// normalized canonical form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streets: Option<Vec<StreetSummary>>,
}

/// Drives classification for a stream of candidate names and owns the
/// accumulated statistics.
///
/// Any producer that can call [`process_name`](Self::process_name) once
/// per observed string qualifies as an input adapter; the aggregator is
/// agnostic to where candidates come from.
#[derive(Debug)]
pub struct NameAggregator {
    database: Arc<StreetDatabase>,
    config: AggregatorConfig,
    stats: AggregateStats,
}

impl NameAggregator {
    pub fn new(database: Arc<StreetDatabase>, config: AggregatorConfig) -> Self {
        Self {
            database,
            config,
            stats: AggregateStats::default(),
        }
    }

    /// The aggregation options this aggregator runs with.
    pub fn config(&self) -> AggregatorConfig {
        self.config
    }

    /// The accumulated statistics so far.
    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    /// Classify one candidate and fold the result into the statistics.
    ///
    /// Never fails: an empty or unclassifiable candidate counts as
    /// unmatched. Exactly one global counter is incremented per call.
    pub fn process_name(&mut self, name: &str) {
        let result = self.database.classify(name, self.config.spell_distance);
        self.record(result);
    }

    /// Classify a batch of candidates in parallel, then fold the results
    /// sequentially. Produces the same final statistics as processing the
    /// batch one name at a time, in any order.
    #[cfg(feature = "parallel")]
    pub fn process_batch<S: AsRef<str> + Sync>(&mut self, names: &[S]) {
        use rayon::prelude::*;

        let spell_distance = self.config.spell_distance;
        let database = &self.database;
        let results: Vec<MatchResult> = names
            .par_iter()
            .map(|name| database.classify(name.as_ref(), spell_distance))
            .collect();
        for result in results {
            self.record(result);
        }
    }

    fn record(&mut self, result: MatchResult) {
        let per_street = self.config.per_street_stats;
        let stats = &mut self.stats;
        stats.counters.processed += 1;

        match result.kind() {
            MatchKind::Exact { entry } => {
                stats.counters.exact += 1;
                if per_street {
                    let bucket = stats
                        .streets
                        .entry(entry.normalized().to_string())
                        .or_insert_with(|| StreetBucket::new(Arc::clone(entry)));
                    bucket.exact += 1;
                    *bucket
                        .candidates
                        .entry(result.candidate().to_string())
                        .or_insert(0) += 1;
                }
            }
            MatchKind::CloseMatch { entry, .. } => {
                stats.counters.close_match += 1;
                if per_street {
                    let bucket = stats
                        .streets
                        .entry(entry.normalized().to_string())
                        .or_insert_with(|| StreetBucket::new(Arc::clone(entry)));
                    bucket.close_match += 1;
                    *bucket
                        .candidates
                        .entry(result.candidate().to_string())
                        .or_insert(0) += 1;
                }
            }
            MatchKind::Ambiguous { .. } => {
                stats.counters.ambiguous += 1;
                if per_street {
                    *stats
                        .ambiguous
                        .entry(result.candidate().to_string())
                        .or_insert(0) += 1;
                }
            }
            MatchKind::Unmatched => {
                stats.counters.unmatched += 1;
                if per_street {
                    *stats
                        .unmatched
                        .entry(result.candidate().to_string())
                        .or_insert(0) += 1;
                }
            }
        }
    }

    /// Build the structured statistics report.
    pub fn stats_report(&self) -> StatsReport {
        let streets = self.config.per_street_stats.then(|| {
            self.stats
                .streets
                .values()
                .map(|bucket| StreetSummary {
                    name: bucket.entry.text().to_string(),
                    distinct_candidates: bucket.candidates.len(),
                    occurrences: bucket.occurrences(),
                    exact: bucket.exact,
                    close_match: bucket.close_match,
                })
                .collect()
        });
        StatsReport {
            locale: self.database.locale().id().to_string(),
            counters: self.stats.counters,
            streets,
        }
    }

    /// Write the global counters and, with per-street stats enabled, a
    /// per-street summary. Cheap, read-only, idempotent.
    pub fn dump_stats(&self, writer: &mut dyn Write) -> io::Result<()> {
        let counters = self.stats.counters;
        writeln!(writer, "Total names processed: {}", counters.processed)?;
        writeln!(writer, "  exact matches:       {}", counters.exact)?;
        writeln!(writer, "  close matches:       {}", counters.close_match)?;
        writeln!(writer, "  unmatched:           {}", counters.unmatched)?;
        writeln!(writer, "  ambiguous:           {}", counters.ambiguous)?;

        if self.config.per_street_stats {
            writeln!(writer, "Streets matched: {}", self.stats.streets.len())?;
            for bucket in self.stats.streets.values() {
                let occurrences = bucket.occurrences();
                let exact_ratio = if occurrences == 0 {
                    0.0
                } else {
                    bucket.exact as f64 * 100.0 / occurrences as f64
                };
                writeln!(
                    writer,
                    "  {}: {} distinct, {} total, {:.1}% exact",
                    bucket.entry.text(),
                    bucket.candidates.len(),
                    occurrences,
                    exact_ratio
                )?;
            }
        }
        Ok(())
    }

    /// Write the detailed dump: per canonical street the candidate
    /// strings that matched it, then the unmatched and ambiguous
    /// candidates as separate groups. Streets are ordered by normalized
    /// form, candidates lexicographically. Only meaningful with
    /// per-street stats enabled; cost is proportional to the number of
    /// distinct (street, candidate) pairs. Read-only and idempotent.
    pub fn dump_data(&self, writer: &mut dyn Write) -> io::Result<()> {
        for bucket in self.stats.streets.values() {
            writeln!(writer, "== {} ==", bucket.entry.text())?;
            self.dump_group(writer, &bucket.candidates)?;
        }
        if !self.stats.unmatched.is_empty() {
            writeln!(writer, "== UNMATCHED ==")?;
            self.dump_group(writer, &self.stats.unmatched)?;
        }
        if !self.stats.ambiguous.is_empty() {
            writeln!(writer, "== AMBIGUOUS ==")?;
            self.dump_group(writer, &self.stats.ambiguous)?;
        }
        Ok(())
    }

    fn dump_group(
        &self,
        writer: &mut dyn Write,
        group: &BTreeMap<String, u64>,
    ) -> io::Result<()> {
        for (candidate, count) in group {
            if self.config.count_names {
                writeln!(writer, "\t{candidate} ({count})")?;
            } else {
                writeln!(writer, "\t{candidate}")?;
            }
        }
        Ok(())
    }
}
