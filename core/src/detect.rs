//! # Style Detection
//!
//! Infers the [`Style`] of an identifier from its shape alone.
//!
//! Only the word content is inspected; leading and trailing decoration (see
//! [`crate::classify`]) is ignored. The content is walked once while collecting evidence:
//!
//! - which literal separators (`-`, ` `, `_`) occur
//! - the case of every *word-leading* character (right after a separator run)
//! - the case of every *word-internal* character (right after a word-leading one)
//! - whether an upper-case character follows a non upper-case word character (a case rise)
//!
//! Evidence that contradicts itself yields [`Style::INDETERMINATE`]:
//!
//! | evidence                                        | example         |
//! |-------------------------------------------------|-----------------|
//! | word-leading characters of both cases           | `this-Is_a-test`|
//! | word-internal characters of both cases          | `this-iS-a-test`|
//! | lower-case word-leading characters with a rise  | `this-isATest`  |
//!
//! Identifiers made only of single-letter words are ambiguous by nature (`ABC` may be Pascal
//! `A`,`B`,`C` or a one word Macro). They are not special cased.

use crate::{
    classify::{is_lower, is_upper, is_word_separator, word_region},
    error::CasingError,
    style::{Separator, Style},
};

/// Detects the casing style of an identifier.
///
/// Fails with [`CasingError::EmptyIdentifier`] on an empty string. A string made only of
/// decoration is [`Style::INDETERMINATE`].
///
/// ```rust
/// use identcase::{detect_identifier_casing, style::Style};
///
/// assert_eq!(Style::COBOL, detect_identifier_casing("THIS-IS-A-TEST").unwrap());
/// assert_eq!(Style::CAMEL, detect_identifier_casing("  thisIsATest!").unwrap());
/// assert_eq!(Style::INDETERMINATE, detect_identifier_casing("___").unwrap());
/// ```
pub fn detect_identifier_casing(identifier: &str) -> Result<Style, CasingError> {
    if identifier.is_empty() {
        return Err(CasingError::EmptyIdentifier);
    }

    let style = match word_region(identifier) {
        Some(region) => detect_words(&identifier[region]),
        None => Style::INDETERMINATE,
    };
    tracing::trace!(identifier, %style, "detected casing");
    Ok(style)
}

/// Detects the style of the word content of an identifier (no leading or trailing decoration).
pub(crate) fn detect_words(words: &str) -> Style {
    let mut chars = words.chars();
    let Some(first) = chars.next() else {
        return Style::INDETERMINATE;
    };

    let mut evidence = Evidence::new(first);
    for c in chars {
        evidence.observe(c);
    }
    evidence.conclude()
}

/// Where the previous character sits relative to the last separator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// right after a separator run; the next word character leads a word
    WordLeading,
    /// right after a word-leading character
    WordInternal,
    /// anywhere else
    Body,
}

#[derive(Debug)]
struct Evidence {
    first_char_upper: bool,
    has_lower: bool,
    leading_upper: bool,
    leading_lower: bool,
    internal_upper: bool,
    internal_lower: bool,
    case_rise: bool,
    separators: Style,
    slot: Slot,
    prev_non_upper: bool,
}

impl Evidence {
    fn new(first: char) -> Self {
        let upper = is_upper(first);
        Self {
            first_char_upper: upper,
            has_lower: is_lower(first),
            leading_upper: false,
            leading_lower: false,
            internal_upper: false,
            internal_lower: false,
            case_rise: false,
            separators: Style::new(),
            slot: Slot::Body,
            prev_non_upper: !upper,
        }
    }

    fn observe(&mut self, c: char) {
        if is_word_separator(c) {
            if let Some(separator) = Separator::from_char(c) {
                self.separators = self.separators.with_separator(separator);
            }
            self.slot = Slot::WordLeading;
            self.prev_non_upper = false;
            return;
        }

        let upper = is_upper(c);
        let lower = is_lower(c);

        self.slot = match self.slot {
            Slot::WordLeading => {
                self.leading_upper |= upper;
                self.leading_lower |= lower;
                Slot::WordInternal
            }
            Slot::WordInternal => {
                self.internal_upper |= upper;
                self.internal_lower |= lower;
                Slot::Body
            }
            Slot::Body => Slot::Body,
        };

        self.case_rise |= upper && self.prev_non_upper;
        self.has_lower |= lower;
        self.prev_non_upper = !upper;
    }

    fn conclude(self) -> Style {
        let conflicting = (self.leading_upper && self.leading_lower)
            || (self.internal_upper && self.internal_lower)
            || (self.leading_lower && self.case_rise);
        if conflicting {
            return Style::INDETERMINATE;
        }

        // a rise or an upper-case word start only switches case against lower-case bodies;
        // in `MD5SUM_VALUE` the rise after `5` is just a digit
        let case_switch = self.has_lower && (self.case_rise || self.leading_upper);

        self.separators
            .with_first_char_upper(self.first_char_upper)
            .with_word_body_upper(self.internal_upper)
            .with_word_start_case_switch(case_switch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn detect(identifier: &str) -> Style {
        detect_identifier_casing(identifier).expect("non-empty identifier")
    }

    #[test]
    fn named_styles() {
        assert_eq!(Style::PASCAL, detect("ThisIsATest"));
        assert_eq!(Style::CAMEL, detect("thisIsATest"));
        assert_eq!(Style::KEBAB, detect("this-is-a-test"));
        assert_eq!(Style::SNAKE, detect("this_is_a_test"));
        assert_eq!(Style::COBOL, detect("THIS-IS-A-TEST"));
        assert_eq!(Style::MACRO, detect("THIS_IS_A_TEST"));
        assert_eq!(Style::LOWER, detect("this is a test"));
        assert_eq!(Style::UPPER, detect("THIS IS A TEST"));
        assert_eq!(Style::TRAIN, detect("This-Is-A-Test"));
        assert_eq!(Style::SPREADSHEET, detect("This Is A Test"));
    }

    #[test]
    fn conflicting_evidence() {
        assert_eq!(Style::INDETERMINATE, detect("this-Is_aTest"));
        assert_eq!(Style::INDETERMINATE, detect("this-Is_a-test"));
        assert_eq!(Style::INDETERMINATE, detect("this-iS-a-test"));
        assert_eq!(Style::INDETERMINATE, detect("this-isATest"));
    }

    #[test]
    fn decoration_is_ignored() {
        assert_eq!(Style::PASCAL, detect("ThisIsATest "));
        assert_eq!(Style::PASCAL, detect("---ThisIsATest---"));
        assert_eq!(Style::PASCAL, detect("๚「—ThisIsATest๚「—"));
        assert_eq!(Style::CAMEL, detect("~thisIsATest~"));
        assert_eq!(Style::KEBAB, detect("_this-is-a-test_"));
    }

    #[test]
    fn all_decoration() {
        for identifier in ["-", "---", "_", " ", "   ", "_____    -----", "@¿"] {
            assert_eq!(Style::INDETERMINATE, detect(identifier), "{:?}", identifier);
        }
    }

    #[test]
    fn empty() {
        assert!(matches!(
            detect_identifier_casing(""),
            Err(CasingError::EmptyIdentifier)
        ));
    }

    #[test]
    fn mixed_separators_are_tracked_independently() {
        assert_eq!(
            Style::KEBAB.with_separator(Separator::Underscore),
            detect("this-is_a-test")
        );
        assert_eq!(
            Style::TRAIN.with_separator(Separator::Space),
            detect("This-Is A-Test")
        );
    }

    #[test]
    fn digits_end_a_lower_run() {
        assert_eq!(Style::PASCAL, detect("Version2Update"));
        assert_eq!(Style::SNAKE, detect("version_2_update"));
    }

    #[test]
    fn digits_inside_upper_case_words() {
        assert_eq!(Style::MACRO, detect("VERSION_2X"));
        assert_eq!(Style::MACRO, detect("MD5SUM_VALUE"));
        assert_eq!(Style::COBOL, detect("X11DISPLAY-NAME"));
        assert_eq!(Style::UPPER, detect("MD5SUM VALUE"));
        assert_eq!(Style::PASCAL, detect("Md5sumValue"));
    }

    #[test]
    fn single_words_are_partial() {
        assert_eq!(Style::INDETERMINATE, detect("test"));
        assert_eq!(Style::new().with_first_char_upper(true), detect("Test"));
        assert_eq!(Style::new().with_first_char_upper(true), detect("TEST"));
        assert!(detect("TEST").is_indeterminate());
    }

    /// The scan based detector that predates trait evidence: it only recognises named styles
    /// and reports any string combining two of {mixed case, dashes, spaces, underscores} as
    /// indeterminate. Both must agree on the named renderings.
    fn legacy_detect(identifier: &str) -> Style {
        let Some(region) = word_region(identifier) else {
            return Style::INDETERMINATE;
        };
        let words = &identifier[region];
        let first_upper = words.chars().next().is_some_and(is_upper);

        let (mut upper, mut lower, mut dash, mut space, mut underscore) =
            (false, false, false, false, false);
        let mut dash_before_every_upper = true;
        let mut space_before_every_upper = true;
        let mut prev = None;
        for (idx, c) in words.chars().enumerate() {
            upper |= is_upper(c);
            lower |= is_lower(c);
            dash |= c == '-';
            space |= c == ' ';
            underscore |= c == '_';
            if idx > 0 && is_upper(c) {
                dash_before_every_upper &= prev == Some('-');
                space_before_every_upper &= prev == Some(' ');
            }
            prev = Some(c);
        }

        if !dash && !underscore && !space {
            return match (upper && lower, first_upper) {
                (true, true) => Style::PASCAL,
                (true, false) => Style::CAMEL,
                (false, _) if upper => Style::COBOL,
                (false, _) => Style::KEBAB,
            };
        }
        if !underscore && !space && dash && lower && upper && dash_before_every_upper {
            return Style::TRAIN;
        }
        if !underscore && space && !dash && lower && upper && space_before_every_upper {
            return Style::SPREADSHEET;
        }
        if !underscore && space && !dash && lower != upper {
            return match upper {
                true => Style::UPPER,
                false => Style::LOWER,
            };
        }
        let conditions = [upper && lower, dash, space, underscore]
            .into_iter()
            .filter(|c| *c)
            .count();
        if conditions >= 2 {
            return Style::INDETERMINATE;
        }
        match (dash, lower) {
            (true, true) => Style::KEBAB,
            (true, false) => Style::COBOL,
            (false, true) => Style::SNAKE,
            (false, false) => Style::MACRO,
        }
    }

    #[test]
    fn agrees_with_legacy_detector() {
        let identifiers = [
            "ThisIsATest",
            "thisIsATest",
            "this-is-a-test",
            "this_is_a_test",
            "THIS-IS-A-TEST",
            "THIS_IS_A_TEST",
            "this is a test",
            "THIS IS A TEST",
            "This-Is-A-Test",
            "This Is A Test",
            "this-Is_aTest",
            "-ThisIsATest-",
            "@@this_is_a_test@@",
            "¿¿¿This Is A Test¿¿¿",
        ];
        for identifier in identifiers {
            assert_eq!(
                legacy_detect(identifier),
                detect(identifier),
                "detectors disagree on {:?}",
                identifier
            );
        }
    }
}
