//! # Style Translation
//!
//! Re-segments an identifier into words using the rules of its *detected* style and writes the
//! words back out with the rules of the *target* style.
//!
//! Leading and trailing decoration is copied verbatim. Inside the word content a boundary is
//! either a run of separator characters (dropped, replaced by the target's separators) or an
//! upper-case character when the source style switches case at word starts. A source that is
//! [`Style::INDETERMINATE`] only breaks on an upper-case character once a non upper-case
//! character was seen since the last boundary, so `this-Is_aTEST` ends in the single word
//! `TEST` instead of four one-letter words.

use std::borrow::Cow;

use crate::{
    classify::{is_lower, is_upper, is_word_separator, word_region},
    detect::detect_words,
    error::CasingError,
    style::Style,
};

/// Translates an identifier into the `target` style.
///
/// The input is returned as [`Cow::Borrowed`] when it is empty, made only of decoration, or
/// already in the target style. Fails with [`CasingError::UnsupportedTargetStyle`] when the
/// target can't mark word boundaries.
///
/// ```rust
/// use identcase::{style::Style, translate};
///
/// assert_eq!("this-is-a-test", translate("ThisIsATest", Style::KEBAB).unwrap());
/// assert_eq!(" thisIsATest", translate(" ThisIsATest", Style::CAMEL).unwrap());
/// assert_eq!("THIS_IS_A_TEST—", translate("this is a test—", Style::MACRO).unwrap());
/// ```
pub fn translate(identifier: &str, target: Style) -> Result<Cow<'_, str>, CasingError> {
    ensure_target(target)?;
    Ok(translate_words(identifier, target))
}

/// [`translate`] for an identifier that may be absent. `None` stays `None`.
pub fn translate_optional(
    identifier: Option<&str>,
    target: Style,
) -> Result<Option<Cow<'_, str>>, CasingError> {
    identifier
        .map(|identifier| translate(identifier, target))
        .transpose()
}

/// Translates an identifier into the canonical style ([`Style::CANONICAL`]).
pub fn normalize_identifier_casing(identifier: &str) -> Cow<'_, str> {
    translate_words(identifier, Style::CANONICAL)
}

/// [`normalize_identifier_casing`] for an identifier that may be absent.
pub fn normalize_identifier_casing_optional(identifier: Option<&str>) -> Option<Cow<'_, str>> {
    identifier.map(normalize_identifier_casing)
}

pub(crate) fn ensure_target(target: Style) -> Result<(), CasingError> {
    match target.is_indeterminate() {
        true => Err(CasingError::UnsupportedTargetStyle(target)),
        false => Ok(()),
    }
}

/// Translation proper. `target` must be able to mark word boundaries.
pub(crate) fn translate_words(identifier: &str, target: Style) -> Cow<'_, str> {
    let Some(region) = word_region(identifier) else {
        return Cow::Borrowed(identifier);
    };

    let words = &identifier[region.clone()];
    let source = detect_words(words);
    if source == target {
        return Cow::Borrowed(identifier);
    }

    let mut output = String::with_capacity(identifier.len() * 4 / 3);
    output.push_str(&identifier[..region.start]);
    Rewriter::new(source, target, &mut output).rewrite(words);
    output.push_str(&identifier[region.end..]);

    tracing::debug!(identifier, %source, %target, %output, "translated identifier");
    Cow::Owned(output)
}

struct Rewriter<'out> {
    source: Style,
    target: Style,
    output: &'out mut String,
    /// a non upper-case character was written since the last boundary
    non_upper_since_boundary: bool,
}

impl<'out> Rewriter<'out> {
    fn new(source: Style, target: Style, output: &'out mut String) -> Self {
        Self {
            source,
            target,
            output,
            non_upper_since_boundary: false,
        }
    }

    /// Rewrites the word content. `words` starts and ends with a word character.
    fn rewrite(mut self, words: &str) {
        let mut chars = words.chars();
        let Some(first) = chars.next() else {
            return;
        };
        push_cased(self.output, first, self.target.first_char_upper());
        self.non_upper_since_boundary = !is_upper(first);

        while let Some(c) = chars.next() {
            let (c, boundary) = match is_word_separator(c) {
                // the whole separator run is one boundary; the run can't reach the end
                true => match chars.by_ref().find(|c| !is_word_separator(*c)) {
                    Some(next) => (next, true),
                    None => break,
                },
                false => (c, self.is_case_boundary(c)),
            };

            if boundary {
                self.non_upper_since_boundary = false;
                for separator in self.target.separators() {
                    self.output.push(separator.as_char());
                }
                push_cased(self.output, c, self.target.word_start_upper());
            } else {
                push_cased(self.output, c, self.target.word_body_upper());
            }

            if !is_upper(c) {
                self.non_upper_since_boundary = true;
            }
        }
    }

    fn is_case_boundary(&self, c: char) -> bool {
        is_upper(c)
            && ((self.source.word_start_case_switch() && !self.source.word_body_upper())
                || (self.source.is_indeterminate() && self.non_upper_since_boundary))
    }
}

/// Pushes `c` in the requested case. Characters without case are pushed as they are.
pub(crate) fn push_cased(output: &mut String, c: char, upper: bool) {
    match upper {
        true if is_lower(c) => output.extend(c.to_uppercase()),
        false if is_upper(c) => output.extend(c.to_lowercase()),
        _ => output.push(c),
    }
}
