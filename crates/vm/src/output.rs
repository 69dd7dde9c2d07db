//! Output assembler: builds generated text one line at a time.
//!
//! Text accumulates in a bounded line buffer and only reaches the sink
//! when OUT flushes it.

use metaii_common::{BoundedString, Buffer, CapacityExceeded, Limits};

/// Receives each completed output line, without its terminator.
pub trait LineSink {
    fn write_line(&mut self, line: &str);
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

/// Line buffer plus the column it will be printed at.
#[derive(Debug)]
pub struct OutputAssembler<S> {
    buffer: BoundedString,
    column: usize,
    indent: usize,
    sink: S,
}

impl<S: LineSink> OutputAssembler<S> {
    /// Output starts at the indent column.
    pub fn new(sink: S, limits: &Limits) -> Self {
        Self {
            buffer: BoundedString::new(Buffer::OutputLine, limits.output_len),
            column: limits.indent,
            indent: limits.indent,
            sink,
        }
    }

    /// Append text to the current line.
    pub fn emit(&mut self, text: &str) -> Result<(), CapacityExceeded> {
        self.buffer.push_str(text)
    }

    /// Append the token, then clear it. On overflow the token is kept.
    pub fn emit_token_and_clear(&mut self, token: &mut BoundedString) -> Result<(), CapacityExceeded> {
        self.buffer.push_str(token.as_str())?;
        token.clear();
        Ok(())
    }

    /// Move the output column to the label field.
    pub fn set_margin(&mut self) {
        self.column = 0;
    }

    /// Send the line to the sink, indented to the current column, then
    /// start a fresh line at the indent column.
    pub fn flush_line(&mut self) {
        let text = self.buffer.take();
        let line = format!("{:width$}{text}", "", width = self.column);
        self.sink.write_line(&line);
        self.column = self.indent;
    }

    /// Text emitted since the last flush.
    pub fn pending(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn column(&self) -> usize {
        self.column
    }

    #[cfg(test)]
    pub(crate) fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembler() -> OutputAssembler<Vec<String>> {
        OutputAssembler::new(Vec::new(), &Limits::default())
    }

    #[test]
    fn nothing_escapes_before_flush() {
        let mut out = assembler();
        out.emit("TST").unwrap();
        out.emit(" 'x'").unwrap();
        assert_eq!(out.pending(), "TST 'x'");
        assert!(out.sink().is_empty());
    }

    #[test]
    fn flush_indents_to_column() {
        let mut out = assembler();
        out.emit("BE").unwrap();
        out.flush_line();
        assert_eq!(out.into_sink(), vec!["        BE".to_string()]);
    }

    #[test]
    fn margin_applies_to_one_line() {
        let mut out = assembler();
        out.set_margin();
        out.emit("A0").unwrap();
        out.flush_line();
        out.emit("R").unwrap();
        out.flush_line();
        assert_eq!(
            out.into_sink(),
            vec!["A0".to_string(), "        R".to_string()]
        );
    }

    #[test]
    fn flush_clears_buffer() {
        let mut out = assembler();
        out.emit("x").unwrap();
        out.flush_line();
        assert_eq!(out.pending(), "");
        assert_eq!(out.column(), 8);
    }

    #[test]
    fn token_moves_into_line() {
        let mut out = assembler();
        let mut token = BoundedString::with_text(Buffer::Token, 8, "'abc'").unwrap();
        out.emit("TST ").unwrap();
        out.emit_token_and_clear(&mut token).unwrap();
        assert_eq!(out.pending(), "TST 'abc'");
        assert!(token.is_empty());
    }

    #[test]
    fn line_overflow() {
        let limits = Limits {
            output_len: 4,
            ..Limits::default()
        };
        let mut out = OutputAssembler::new(Vec::new(), &limits);
        out.emit("abc").unwrap();
        let mut token = BoundedString::with_text(Buffer::Token, 8, "de").unwrap();
        let err = out.emit_token_and_clear(&mut token).unwrap_err();
        assert_eq!(err.buffer, Buffer::OutputLine);
        assert_eq!(token.as_str(), "de");
        assert_eq!(out.pending(), "abc");
    }

    #[test]
    fn writes_through_mutable_reference() {
        let mut lines = Vec::new();
        let mut out = OutputAssembler::new(&mut lines, &Limits::default());
        out.set_margin();
        out.emit("L").unwrap();
        out.flush_line();
        drop(out);
        assert_eq!(lines, vec!["L".to_string()]);
    }
}
