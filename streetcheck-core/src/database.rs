//! Canonical street-name database with exact and approximate lookup
//!
//! The database owns the canonical entries for one locale. Loading
//! normalizes every textual form through the locale and indexes it twice:
//! a hash map for exact lookup by normalized form, and length buckets that
//! let approximate lookup skip every form whose length differs from the
//! query by more than the distance bound. The buckets are purely a pruning
//! device; they never change the classification an exhaustive scan would
//! produce, because the length difference is a lower bound on the edit
//! distance.
//!
//! After loading the database is read-only and can be shared freely across
//! threads.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::distance::bounded_edit_distance;
use crate::error::LoadError;
use crate::locale::Locale;

/// One entry of the reference dictionary: a street name considered
/// authoritative, plus any accepted spelling variants for the same
/// physical street. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct CanonicalStreetName {
    text: String,
    normalized: String,
    variants: Vec<String>,
}

impl CanonicalStreetName {
    /// Primary text as it appeared in the dictionary.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Locale-normalized form of the primary text.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Accepted spelling variants (original text, primary excluded).
    pub fn variants(&self) -> &[String] {
        &self.variants
    }
}

/// Classification outcome for one candidate.
#[derive(Debug, Clone)]
pub enum MatchKind {
    /// The candidate's normalized form equals a canonical form.
    Exact { entry: Arc<CanonicalStreetName> },
    /// Exactly one canonical entry sits at the minimal distance within
    /// the bound; a probable misspelling of that entry.
    CloseMatch {
        entry: Arc<CanonicalStreetName>,
        distance: usize,
    },
    /// Several canonical entries tie at the minimal distance. Entries are
    /// sorted by normalized form for reproducible output.
    Ambiguous {
        entries: Vec<Arc<CanonicalStreetName>>,
        distance: usize,
    },
    /// No canonical entry within the distance bound.
    Unmatched,
}

/// Result of classifying one candidate name.
#[derive(Debug, Clone)]
pub struct MatchResult {
    candidate: String,
    kind: MatchKind,
}

impl MatchResult {
    /// The candidate string as it was submitted.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// The classification outcome.
    pub fn kind(&self) -> &MatchKind {
        &self.kind
    }

    /// The uniquely matched entry, for exact and close matches.
    pub fn matched_entry(&self) -> Option<&Arc<CanonicalStreetName>> {
        match &self.kind {
            MatchKind::Exact { entry } | MatchKind::CloseMatch { entry, .. } => Some(entry),
            _ => None,
        }
    }

    /// Measured edit distance: 0 for exact matches, the minimal distance
    /// for close and ambiguous matches, `None` when unmatched.
    pub fn distance(&self) -> Option<usize> {
        match &self.kind {
            MatchKind::Exact { .. } => Some(0),
            MatchKind::CloseMatch { distance, .. } | MatchKind::Ambiguous { distance, .. } => {
                Some(*distance)
            }
            MatchKind::Unmatched => None,
        }
    }
}

/// The canonical street-name database for one locale.
#[derive(Debug)]
pub struct StreetDatabase {
    locale: Locale,
    entries: Vec<Arc<CanonicalStreetName>>,
    /// All normalized forms (primary and variants) with their entry index.
    forms: Vec<(String, usize)>,
    /// Normalized form -> entry index, for exact lookup.
    exact: HashMap<String, usize>,
    /// Form length in chars -> indices into `forms`.
    by_len: HashMap<usize, Vec<usize>>,
}

impl StreetDatabase {
    /// Create an empty database for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            entries: Vec::new(),
            forms: Vec::new(),
            exact: HashMap::new(),
            by_len: HashMap::new(),
        }
    }

    /// The locale this database normalizes with.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Number of canonical entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the database holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a dictionary file. See [`load_from_reader`](Self::load_from_reader)
    /// for the format.
    pub fn load_from_path(&mut self, path: &Path) -> Result<usize, LoadError> {
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|error| LoadError::Io {
            source_name: source_name.clone(),
            error,
        })?;
        self.load_from_reader(&source_name, BufReader::new(file))
    }

    /// Load a line-oriented dictionary source and merge it into the index.
    ///
    /// Each line holds one canonical street name, optionally followed by
    /// `|`-separated accepted spelling variants. Blank lines and lines
    /// starting with `#` are skipped. A name whose normalized form already
    /// exists merges into the existing entry (variants combined), so the
    /// same street appearing in two sources yields one canonical entry.
    ///
    /// Returns the number of lines loaded. Fails with [`LoadError::Io`]
    /// when the source cannot be read and [`LoadError::Malformed`] when a
    /// line has an empty primary name or variant; either failure must
    /// abort the run before any candidate is processed.
    pub fn load_from_reader(
        &mut self,
        source_name: &str,
        reader: impl BufRead,
    ) -> Result<usize, LoadError> {
        let mut loaded = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|error| LoadError::Io {
                source_name: source_name.to_string(),
                error,
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line_number = index + 1;
            let mut parts = line.split('|').map(str::trim);
            let primary = parts.next().unwrap_or_default();
            if primary.is_empty() {
                return Err(LoadError::Malformed {
                    source_name: source_name.to_string(),
                    line: line_number,
                    reason: "missing primary name".to_string(),
                });
            }

            let mut variants = Vec::new();
            for variant in parts {
                if variant.is_empty() {
                    return Err(LoadError::Malformed {
                        source_name: source_name.to_string(),
                        line: line_number,
                        reason: "empty variant".to_string(),
                    });
                }
                variants.push(variant);
            }

            self.insert(primary, &variants, source_name, line_number)?;
            loaded += 1;
        }
        Ok(loaded)
    }

    fn insert(
        &mut self,
        primary: &str,
        variants: &[&str],
        source_name: &str,
        line_number: usize,
    ) -> Result<(), LoadError> {
        let normalized = self.locale.normalize(primary);
        if normalized.is_empty() {
            return Err(LoadError::Malformed {
                source_name: source_name.to_string(),
                line: line_number,
                reason: format!("name \"{primary}\" normalizes to nothing"),
            });
        }

        let entry_index = match self.exact.get(&normalized) {
            Some(&existing) => {
                // Duplicate canonical name: merge variants into one entry.
                let mut merged = (*self.entries[existing]).clone();
                for &variant in variants {
                    if merged.text != variant && !merged.variants.iter().any(|v| v == variant) {
                        merged.variants.push(variant.to_string());
                    }
                }
                self.entries[existing] = Arc::new(merged);
                existing
            }
            None => {
                let index = self.entries.len();
                self.entries.push(Arc::new(CanonicalStreetName {
                    text: primary.to_string(),
                    normalized: normalized.clone(),
                    variants: variants.iter().map(|v| v.to_string()).collect(),
                }));
                self.index_form(normalized, index);
                index
            }
        };

        for &variant in variants {
            let normalized_variant = self.locale.normalize(variant);
            if normalized_variant.is_empty() {
                return Err(LoadError::Malformed {
                    source_name: source_name.to_string(),
                    line: line_number,
                    reason: format!("variant \"{variant}\" normalizes to nothing"),
                });
            }
            self.index_form(normalized_variant, entry_index);
        }
        Ok(())
    }

    /// Register a normalized form for an entry. First registration wins:
    /// a form already claimed by another entry is left in place.
    fn index_form(&mut self, form: String, entry_index: usize) {
        if self.exact.contains_key(&form) {
            return;
        }
        let length = form.chars().count();
        self.exact.insert(form.clone(), entry_index);
        let form_index = self.forms.len();
        self.forms.push((form, entry_index));
        self.by_len.entry(length).or_default().push(form_index);
    }

    /// Classify a candidate against the dictionary.
    ///
    /// The candidate is normalized with the same locale rules applied at
    /// load time, looked up exactly, and otherwise searched within
    /// `max_distance` edits. Classification is deterministic: given the
    /// same database state and candidate it always returns the same
    /// result, and it never fails. A candidate that normalizes to nothing
    /// comparable is unmatched. `max_distance == 0` degrades every
    /// non-exact candidate to unmatched.
    pub fn classify(&self, candidate: &str, max_distance: usize) -> MatchResult {
        let result = |kind| MatchResult {
            candidate: candidate.to_string(),
            kind,
        };

        let normalized = self.locale.normalize(candidate);
        if normalized.is_empty() {
            return result(MatchKind::Unmatched);
        }

        if let Some(&index) = self.exact.get(&normalized) {
            return result(MatchKind::Exact {
                entry: Arc::clone(&self.entries[index]),
            });
        }

        if max_distance == 0 || !self.locale.contains_alphabet(&normalized) {
            return result(MatchKind::Unmatched);
        }

        // Best distance per entry; an entry reachable through several
        // forms counts once at its minimum.
        let mut best: HashMap<usize, usize> = HashMap::new();
        let query_len = normalized.chars().count();
        let longest_form = self.by_len.keys().copied().max().unwrap_or(0);
        let low = query_len.saturating_sub(max_distance);
        let high = query_len.saturating_add(max_distance).min(longest_form);
        for length in low..=high {
            let Some(form_indices) = self.by_len.get(&length) else {
                continue;
            };
            for &form_index in form_indices {
                let (form, entry_index) = &self.forms[form_index];
                if let Some(distance) = bounded_edit_distance(&normalized, form, max_distance) {
                    let slot = best.entry(*entry_index).or_insert(distance);
                    if distance < *slot {
                        *slot = distance;
                    }
                }
            }
        }

        let Some(&minimum) = best.values().min() else {
            return result(MatchKind::Unmatched);
        };
        let mut matched: Vec<Arc<CanonicalStreetName>> = best
            .iter()
            .filter(|&(_, &distance)| distance == minimum)
            .map(|(&index, _)| Arc::clone(&self.entries[index]))
            .collect();

        if matched.len() == 1 {
            let entry = matched.remove(0);
            result(MatchKind::CloseMatch {
                entry,
                distance: minimum,
            })
        } else {
            matched.sort_by(|a, b| a.normalized().cmp(b.normalized()));
            result(MatchKind::Ambiguous {
                entries: matched,
                distance: minimum,
            })
        }
    }
}
