//! Russian (ru_RU) locale rules

use super::LocaleRules;

/// Rules for Russian street names: Cyrillic alphabet, `ё`/`е` folding
/// (the two spellings are interchangeable in practice), and common status
/// part abbreviations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RussianLocaleRules;

impl LocaleRules for RussianLocaleRules {
    fn locale_id(&self) -> &'static str {
        "ru_RU"
    }

    fn fold_word(&self, word: &str) -> String {
        // Input is already lowercased. No transliteration here: the
        // alphabet stays Cyrillic, only yo collapses to ye.
        word.chars().map(|c| if c == 'ё' { 'е' } else { c }).collect()
    }

    fn canonical_affix(&self, word: &str) -> Option<&'static str> {
        Some(match word {
            "ул" => "улица",
            "пер" => "переулок",
            "пр" | "просп" => "проспект",
            "пл" => "площадь",
            "наб" => "набережная",
            "бул" => "бульвар",
            "ш" => "шоссе",
            "туп" => "тупик",
            _ => return None,
        })
    }

    fn is_status_word(&self, word: &str) -> bool {
        matches!(
            word,
            "улица"
                | "переулок"
                | "проспект"
                | "площадь"
                | "набережная"
                | "бульвар"
                | "шоссе"
                | "тупик"
        )
    }

    fn is_alphabet_char(&self, c: char) -> bool {
        matches!(c, 'а'..='я' | 'ё' | 'А'..='Я' | 'Ё')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yo_folds_to_ye() {
        let rules = RussianLocaleRules;
        assert_eq!(rules.fold_word("озёрная"), "озерная");
        assert_eq!(rules.fold_word("тверская"), "тверская");
    }

    #[test]
    fn test_affix_table() {
        let rules = RussianLocaleRules;
        assert_eq!(rules.canonical_affix("ул"), Some("улица"));
        assert_eq!(rules.canonical_affix("просп"), Some("проспект"));
        assert_eq!(rules.canonical_affix("улица"), None);
    }

    #[test]
    fn test_status_words() {
        let rules = RussianLocaleRules;
        assert!(rules.is_status_word("улица"));
        assert!(rules.is_status_word("проспект"));
        assert!(!rules.is_status_word("ул"));
        assert!(!rules.is_status_word("тверская"));
    }

    #[test]
    fn test_alphabet_membership() {
        let rules = RussianLocaleRules;
        assert!(rules.is_alphabet_char('а'));
        assert!(rules.is_alphabet_char('ё'));
        assert!(rules.is_alphabet_char('Т'));
        assert!(rules.is_alphabet_char('Ё'));
        assert!(!rules.is_alphabet_char('a'));
        assert!(!rules.is_alphabet_char('3'));
    }
}
