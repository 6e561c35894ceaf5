//! Character classes shared by detection and translation.
//!
//! Anything that is whitespace, punctuation or a symbol separates words. At the edges of an
//! identifier those characters are decoration and are kept verbatim; between words they mark a
//! boundary.

use std::ops::Range;

use unicode_general_category::{GeneralCategory, get_general_category};

pub fn is_upper(c: char) -> bool {
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

pub fn is_lower(c: char) -> bool {
    get_general_category(c) == GeneralCategory::LowercaseLetter
}

/// Whitespace, punctuation (`Pc Pd Ps Pe Pi Pf Po`) or symbol (`Sm Sc Sk So`).
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            get_general_category(c),
            GeneralCategory::ConnectorPunctuation
                | GeneralCategory::DashPunctuation
                | GeneralCategory::OpenPunctuation
                | GeneralCategory::ClosePunctuation
                | GeneralCategory::InitialPunctuation
                | GeneralCategory::FinalPunctuation
                | GeneralCategory::OtherPunctuation
                | GeneralCategory::MathSymbol
                | GeneralCategory::CurrencySymbol
                | GeneralCategory::ModifierSymbol
                | GeneralCategory::OtherSymbol
        )
}

/// Byte offset of the first character that is not a word separator.
pub fn first_word_char(text: &str) -> Option<usize> {
    text.find(|c: char| !is_word_separator(c))
}

/// Byte offset of the last character that is not a word separator.
pub fn last_word_char(text: &str) -> Option<usize> {
    text.rfind(|c: char| !is_word_separator(c))
}

/// Byte range between the leading and trailing decoration.
///
/// `None` when the text is made only of decoration (or is empty).
pub fn word_region(text: &str) -> Option<Range<usize>> {
    let start = first_word_char(text)?;
    let last = last_word_char(text)?;
    let end = last + text[last..].chars().next().map_or(0, char::len_utf8);
    Some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn separators() {
        for c in [' ', '\t', '-', '_', '~', '@', '¿', '—', '「', '๚', '$', '^', '.'] {
            assert!(is_word_separator(c), "{:?} should separate words", c);
        }
        for c in ['a', 'Z', '0', 'é', 'ß', 'こ'] {
            assert!(!is_word_separator(c), "{:?} should not separate words", c);
        }
    }

    #[test]
    fn case() {
        assert!(is_upper('A'));
        assert!(is_upper('É'));
        assert!(!is_upper('a'));
        assert!(!is_upper('1'));
        assert!(is_lower('a'));
        assert!(is_lower('ß'));
        assert!(!is_lower('A'));
        assert!(!is_lower('こ'));
    }

    #[test]
    fn scans() {
        assert_eq!(Some(2), first_word_char("--abc--"));
        assert_eq!(Some(4), last_word_char("--abc--"));
        assert_eq!(None, first_word_char("_- ~"));
        assert_eq!(None, last_word_char(""));
    }

    #[test]
    fn regions() {
        assert_eq!(Some(0..11), word_region("ThisIsATest"));
        assert_eq!(Some(3..14), word_region("---ThisIsATest---"));
        // multi-byte decoration on both sides
        let text = "๚「—ThisIsATest๚「—";
        let region = word_region(text).expect("has words");
        assert_eq!("ThisIsATest", &text[region]);
        // multi-byte last word char
        assert_eq!(Some(1..4), word_region(" aé "));
        assert_eq!(None, word_region("_____    -----"));
        assert_eq!(None, word_region(""));
    }
}
