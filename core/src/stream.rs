//! Streaming adapters: writing a canonical identifier straight to an [`std::io::Write`] sink in a
//! target style, and reading one identifier off a character iterator in canonical form.

use std::{
    io::{self, Write},
    iter::Peekable,
};

use crate::{
    classify::{is_lower, is_upper},
    error::CasingError,
    style::Style,
    translate::{ensure_target, normalize_identifier_casing},
};

/// Writes a canonically cased ([`Style::CANONICAL`]) identifier to `out` in the `target` style.
///
/// Nothing is buffered: every character goes straight to `out`. The identifier is trusted to
/// be canonical, so every upper-case character starts a word. Writing an empty identifier is a
/// no-op.
///
/// ```rust
/// use identcase::{style::Style, write_cased_identifier};
///
/// let mut out: Vec<u8> = Vec::new();
/// write_cased_identifier(&mut out, Style::TRAIN, "ContentType").unwrap();
/// assert_eq!("Content-Type", String::from_utf8(out).unwrap());
/// ```
pub fn write_cased_identifier(
    out: &mut dyn Write,
    target: Style,
    canonical: &str,
) -> Result<(), CasingError> {
    ensure_target(target)?;

    if canonical.is_empty() {
        return Ok(());
    }
    if target == Style::CANONICAL {
        out.write_all(canonical.as_bytes())?;
        return Ok(());
    }

    let mut chars = canonical.chars();
    if let Some(first) = chars.next() {
        write_cased(out, first, target.first_char_upper())?;
    }
    for c in chars {
        if is_upper(c) {
            for separator in target.separators() {
                write!(out, "{}", separator.as_char())?;
            }
            write_cased(out, c, target.word_start_upper())?;
        } else if is_lower(c) {
            write_cased(out, c, target.word_body_upper())?;
        } else {
            write!(out, "{}", c)?;
        }
    }
    Ok(())
}

fn write_cased(out: &mut dyn Write, c: char, upper: bool) -> io::Result<()> {
    match upper {
        true if is_lower(c) => write!(out, "{}", c.to_uppercase()),
        false if is_upper(c) => write!(out, "{}", c.to_lowercase()),
        _ => write!(out, "{}", c),
    }
}

/// Reads one identifier from `source` and returns it in the canonical style.
///
/// Letters, digits, `-`, `_` and spaces are consumed; the first other character is left in
/// `source`.
///
/// ```rust
/// use identcase::read_normalized_case_identifier;
///
/// let mut source = "content-type: text/plain".chars().peekable();
/// assert_eq!("ContentType", read_normalized_case_identifier(&mut source));
/// assert_eq!(Some(':'), source.next());
/// ```
pub fn read_normalized_case_identifier<I>(source: &mut Peekable<I>) -> String
where
    I: Iterator<Item = char>,
{
    let mut identifier = String::new();
    while let Some(c) = source.next_if(|c| is_identifier_char(*c)) {
        identifier.push(c);
    }
    normalize_identifier_casing(&identifier).into_owned()
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | ' ')
}
