//! Line classification for META II listings.

use metaii_common::lex;

/// The shape of one listing line, before mnemonic lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Empty, or whitespace only.
    Blank,
    /// Starts in column 0: defines a label.
    Label(&'a str),
    /// Starts with whitespace: a mnemonic and its raw argument text.
    Instruction { mnemonic: &'a str, argument: &'a str },
}

/// Classify a single line of a listing.
///
/// Leading whitespace makes an instruction line. Otherwise the first word
/// is a label name and the rest of the line is ignored.
pub(crate) fn classify_line(line: &str) -> Line<'_> {
    let Some((word, rest)) = lex::first_word(line) else {
        return Line::Blank;
    };
    let indented = line.as_bytes().first().copied().is_some_and(lex::is_space);
    if indented {
        Line::Instruction {
            mnemonic: word,
            argument: rest,
        }
    } else {
        Line::Label(word)
    }
}

/// Normalize an argument: trim surrounding whitespace, then strip one
/// enclosing single quote from each end.
pub(crate) fn normalize_argument(raw: &str) -> &str {
    let trimmed = raw.trim_matches(|c: char| c.is_ascii() && lex::is_space(c as u8));
    let unquoted = trimmed.strip_prefix('\'').unwrap_or(trimmed);
    unquoted.strip_suffix('\'').unwrap_or(unquoted)
}
