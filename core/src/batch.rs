//! Translation over many identifiers at once.

use std::io::{BufRead, Write};

use crate::{
    error::CasingError,
    style::Style,
    translate::{ensure_target, translate_words},
};

/// Translates the keys of key/value pairs, keeping values and order.
///
/// ```rust
/// use identcase::{batch::translate_pairs, style::Style};
///
/// let pairs = [("ContentType", "text/plain"), ("ContentLength", "42")];
/// let translated = translate_pairs(pairs, Style::TRAIN).unwrap();
/// assert_eq!(
///     vec![
///         ("Content-Type".to_string(), "text/plain"),
///         ("Content-Length".to_string(), "42"),
///     ],
///     translated
/// );
/// ```
pub fn translate_pairs<I, K, V>(pairs: I, target: Style) -> Result<Vec<(String, V)>, CasingError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    ensure_target(target)?;
    Ok(pairs
        .into_iter()
        .map(|(key, value)| (translate_words(key.as_ref(), target).into_owned(), value))
        .collect())
}

/// Translates one identifier per line from `input` to `out`. Returns the number of lines.
pub fn translate_lines<R: BufRead>(
    input: R,
    out: &mut dyn Write,
    target: Style,
) -> Result<usize, CasingError> {
    ensure_target(target)?;

    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        writeln!(out, "{}", translate_words(&line, target))?;
        count += 1;
    }
    tracing::debug!(count, %target, "translated lines");
    Ok(count)
}
