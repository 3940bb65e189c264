//! Locale-aware text normalization
//!
//! A [`Locale`] turns raw street-name strings into comparable normalized
//! forms: case folding, punctuation and whitespace standardization,
//! expansion of common street-type abbreviations ("st" to "street"), and
//! canonicalization of the street-type word's position ("ул. Тверская"
//! and "Тверская улица" normalize identically). The same pipeline runs
//! over dictionary entries at load time and over candidates at
//! classification time, which is what makes exact lookup by normalized
//! form sound.
//!
//! Locale-specific behavior (character folding, alphabet membership, the
//! abbreviation table) lives behind the [`LocaleRules`] trait, with one
//! implementation per built-in locale.

use std::fmt;
use std::sync::Arc;

use crate::error::LocaleError;

mod en;
mod ru;

pub use en::EnglishLocaleRules;
pub use ru::RussianLocaleRules;

/// Locale-specific pieces of the normalization pipeline.
pub trait LocaleRules: fmt::Debug + Send + Sync {
    /// Identifier this rule set was registered under, e.g. `"en_US"`.
    fn locale_id(&self) -> &'static str;

    /// Fold one already-lowercased word into its canonical character form
    /// (accent folding for Latin locales, `ё` to `е` for Russian).
    fn fold_word(&self, word: &str) -> String;

    /// Expand a folded word when it is a recognized street-type
    /// abbreviation, e.g. `"ave"` to `"avenue"`.
    fn canonical_affix(&self, word: &str) -> Option<&'static str>;

    /// Whether a folded, expanded word is a street-type status word
    /// (`"street"`, `"улица"`, ...). Status words are moved to a fixed
    /// position during normalization.
    fn is_status_word(&self, word: &str) -> bool;

    /// Whether `c` belongs to the locale's alphabet after folding.
    fn is_alphabet_char(&self, c: char) -> bool;
}

/// A locale: normalization rules for one language/region.
///
/// Cheap to clone; the underlying rule set is shared.
#[derive(Debug, Clone)]
pub struct Locale {
    rules: Arc<dyn LocaleRules>,
}

impl Locale {
    /// Look up a built-in locale by identifier.
    ///
    /// Recognized identifiers: `en_US` (or `en`) and `ru_RU` (or `ru`).
    pub fn new(id: &str) -> Result<Self, LocaleError> {
        let rules: Arc<dyn LocaleRules> = match id {
            "en_US" | "en" => Arc::new(EnglishLocaleRules),
            "ru_RU" | "ru" => Arc::new(RussianLocaleRules),
            other => return Err(LocaleError::UnknownLocale(other.to_string())),
        };
        Ok(Self { rules })
    }

    /// Build a locale from a custom rule set.
    pub fn from_rules(rules: Arc<dyn LocaleRules>) -> Self {
        Self { rules }
    }

    /// Canonical identifier of this locale.
    pub fn id(&self) -> &'static str {
        self.rules.locale_id()
    }

    /// Normalize a street name into its comparable form.
    ///
    /// Two strings that denote the same name modulo case, punctuation,
    /// whitespace, a recognized abbreviation, or the position of the
    /// street-type word normalize identically.
    /// Returns an empty string when the input contains nothing comparable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use streetcheck_core::Locale;
    ///
    /// let locale = Locale::new("en_US").unwrap();
    /// assert_eq!(locale.normalize("  MAIN  St. "), "main street");
    /// assert_eq!(locale.normalize("Main Street"), "main street");
    /// ```
    pub fn normalize(&self, input: &str) -> String {
        let mut cleaned = String::with_capacity(input.len());
        for c in input.chars() {
            if c == '\'' || c == '\u{2019}' {
                // Apostrophes join rather than split: "King's" stays one word.
                continue;
            } else if c.is_alphanumeric() {
                cleaned.extend(c.to_lowercase());
            } else {
                cleaned.push(' ');
            }
        }

        let mut words: Vec<String> = Vec::new();
        for word in cleaned.split_whitespace() {
            let folded = self.rules.fold_word(word);
            if folded.is_empty() {
                continue;
            }
            match self.rules.canonical_affix(&folded) {
                Some(expanded) => words.push(expanded.to_string()),
                None => words.push(folded),
            }
        }

        // Status-part canonicalization: the street-type word goes to the
        // final slot, so "ул. Тверская" and "Тверская улица" agree.
        if words.len() > 1 {
            if let Some(position) = words.iter().position(|w| self.rules.is_status_word(w)) {
                if position + 1 != words.len() {
                    let status = words.remove(position);
                    words.push(status);
                }
            }
        }

        words.join(" ")
    }

    /// Whether `s` contains at least one character of the locale's
    /// alphabet. Candidates without any are not comparable by distance.
    pub fn contains_alphabet(&self, s: &str) -> bool {
        s.chars().any(|c| self.rules.is_alphabet_char(c))
    }
}
