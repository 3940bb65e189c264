//! English (en_US) locale rules

use super::LocaleRules;

/// Rules for US English street names: ASCII alphabet, accent folding via
/// transliteration, and the usual USPS-style street-type abbreviations.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocaleRules;

impl LocaleRules for EnglishLocaleRules {
    fn locale_id(&self) -> &'static str {
        "en_US"
    }

    fn fold_word(&self, word: &str) -> String {
        // Input is already lowercased; deunicode maps accented Latin to
        // plain ASCII ("café" -> "cafe"). Lowercase again because some
        // transliterations introduce uppercase (e.g. "ß" variants).
        deunicode::deunicode(word).to_lowercase()
    }

    fn canonical_affix(&self, word: &str) -> Option<&'static str> {
        Some(match word {
            "st" | "str" => "street",
            "ave" | "av" => "avenue",
            "blvd" => "boulevard",
            "rd" => "road",
            "dr" => "drive",
            "ln" => "lane",
            "ct" => "court",
            "pl" => "place",
            "sq" => "square",
            "ter" => "terrace",
            "hwy" => "highway",
            "pkwy" => "parkway",
            _ => return None,
        })
    }

    fn is_status_word(&self, word: &str) -> bool {
        matches!(
            word,
            "street"
                | "avenue"
                | "boulevard"
                | "road"
                | "drive"
                | "lane"
                | "court"
                | "place"
                | "square"
                | "terrace"
                | "highway"
                | "parkway"
        )
    }

    fn is_alphabet_char(&self, c: char) -> bool {
        c.is_ascii_alphabetic()
    }
}
