//! Lexical primitives shared by the loader and the recognition opcodes.
//!
//! All positions are byte offsets. Classification is ASCII-only, so every
//! position these functions return falls on a `char` boundary.

/// ASCII whitespace: space, tab, newline, vertical tab, form feed, carriage return.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Letter or digit: the continuation class of an identifier.
pub fn is_alnum(b: u8) -> bool {
    is_letter(b) || is_digit(b)
}

/// Advance `pos` past any whitespace. Never moves beyond `text.len()`.
pub fn skip_whitespace(text: &str, pos: usize) -> usize {
    scan_while(text, pos, is_space)
}

/// Advance `pos` while `pred` holds, returning the first position where it fails.
pub fn scan_while(text: &str, pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    let bytes = text.as_bytes();
    let mut end = pos.min(bytes.len());
    while end < bytes.len() && pred(bytes[end]) {
        end += 1;
    }
    end
}

/// Scan a single-quoted string whose opening quote is at `pos`.
///
/// Returns the position just past the closing quote, or `None` when the
/// text ends first. The caller has already checked the opening quote.
pub fn scan_quoted(text: &str, pos: usize) -> Option<usize> {
    let rest = text.as_bytes().get(pos + 1..)?;
    rest.iter()
        .position(|&b| b == b'\'')
        .map(|offset| pos + 1 + offset + 1)
}

/// Split off the first whitespace-delimited word of `line`.
///
/// Returns the word and everything after it, or `None` for a blank line.
pub fn first_word(line: &str) -> Option<(&str, &str)> {
    let start = skip_whitespace(line, 0);
    if start == line.len() {
        return None;
    }
    let end = scan_while(line, start, |b| !is_space(b));
    Some((&line[start..end], &line[end..]))
}
