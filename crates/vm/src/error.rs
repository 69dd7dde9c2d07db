//! Runtime errors for the META II machine.
//!
//! Every error is fatal to the run. Each variant carries the index of the
//! instruction that failed (`at`) for diagnostics.

use metaii_common::Buffer;
use thiserror::Error;

/// Errors that abort execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A CLL, B, BT or BF named a label the program never defines.
    #[error("undefined label '{name}' at instruction {at}")]
    UndefinedLabel { at: usize, name: String },

    /// CLL pushed more frames than the call stack holds.
    #[error("call stack overflow (capacity {capacity}) at instruction {at}")]
    StackOverflow { at: usize, capacity: usize },

    /// R executed with no pushed frame.
    #[error("call stack underflow at instruction {at}")]
    StackUnderflow { at: usize },

    /// SR found an opening quote with no closing quote before end of input.
    #[error("unterminated string at input offset {position} (instruction {at})")]
    UnterminatedString { at: usize, position: usize },

    /// BE executed while the switch was false: the input does not match.
    #[error("parse failure at input offset {position} (instruction {at})")]
    ParseFailure { at: usize, position: usize },

    /// The token buffer or the output line would exceed its capacity.
    #[error("{buffer} capacity of {capacity} exceeded at instruction {at}")]
    BufferOverflow {
        at: usize,
        buffer: Buffer,
        capacity: usize,
    },

    /// The instruction pointer left the program while input remained.
    #[error("unexpected end of program at instruction {at}")]
    UnexpectedEndOfProgram { at: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            RuntimeError::UndefinedLabel {
                at: 4,
                name: "NOWHERE".to_string()
            }
            .to_string(),
            "undefined label 'NOWHERE' at instruction 4"
        );
        assert_eq!(
            RuntimeError::ParseFailure { at: 1, position: 0 }.to_string(),
            "parse failure at input offset 0 (instruction 1)"
        );
        assert_eq!(
            RuntimeError::BufferOverflow {
                at: 9,
                buffer: Buffer::Token,
                capacity: 64
            }
            .to_string(),
            "token buffer capacity of 64 exceeded at instruction 9"
        );
        assert_eq!(
            RuntimeError::StackUnderflow { at: 0 }.to_string(),
            "call stack underflow at instruction 0"
        );
    }
}
