//! Capacity errors shared by the loader and the interpreter.

use std::fmt;
use thiserror::Error;

/// Names one of the machine's bounded containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Buffer {
    /// The string argument of an instruction.
    Argument,
    /// The name of a label.
    LabelName,
    /// The token buffer filled by ID, NUM and SR.
    Token,
    /// The output line assembled by CL, CI, GN1 and GN2.
    OutputLine,
    /// Instruction memory.
    Instructions,
    /// The label table.
    Labels,
}

impl Buffer {
    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Buffer::Argument => "argument",
            Buffer::LabelName => "label name",
            Buffer::Token => "token buffer",
            Buffer::OutputLine => "output line",
            Buffer::Instructions => "instruction memory",
            Buffer::Labels => "label table",
        }
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bounded container was asked to hold more than its capacity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{buffer} capacity of {capacity} exceeded")]
pub struct CapacityExceeded {
    /// Which container overflowed.
    pub buffer: Buffer,
    /// Its fixed capacity.
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_capacity_exceeded() {
        let e = CapacityExceeded {
            buffer: Buffer::Token,
            capacity: 64,
        };
        assert_eq!(e.to_string(), "token buffer capacity of 64 exceeded");
    }

    #[test]
    fn display_buffer_names() {
        assert_eq!(Buffer::Argument.to_string(), "argument");
        assert_eq!(Buffer::LabelName.to_string(), "label name");
        assert_eq!(Buffer::OutputLine.to_string(), "output line");
        assert_eq!(Buffer::Instructions.to_string(), "instruction memory");
        assert_eq!(Buffer::Labels.to_string(), "label table");
    }
}
