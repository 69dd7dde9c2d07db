//! Error types for the META II loader.

use metaii_common::Buffer;
use thiserror::Error;

/// Errors produced while loading a program listing.
///
/// Any of these aborts the whole load; there is no partial program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// An instruction line started with a token that is not a mnemonic.
    #[error("line {line}: unrecognized opcode '{token}'")]
    UnrecognizedOpcode { line: usize, token: String },

    /// A label or literal opcode had nothing after its mnemonic.
    #[error("line {line}: {opcode} requires an argument")]
    MissingArgument { line: usize, opcode: &'static str },

    /// The label named by ADR is never defined.
    #[error("undefined start label '{name}'")]
    UndefinedLabel { name: String },

    /// A bounded container would grow past its capacity.
    #[error("line {line}: {buffer} exceeds capacity of {capacity}")]
    BufferOverflow {
        line: usize,
        buffer: Buffer,
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unrecognized_opcode() {
        let e = LoadError::UnrecognizedOpcode {
            line: 3,
            token: "FOO".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: unrecognized opcode 'FOO'");
    }

    #[test]
    fn error_display_missing_argument() {
        let e = LoadError::MissingArgument {
            line: 7,
            opcode: "CLL",
        };
        assert_eq!(e.to_string(), "line 7: CLL requires an argument");
    }

    #[test]
    fn error_display_undefined_label() {
        let e = LoadError::UndefinedLabel {
            name: "PROGRAM".to_string(),
        };
        assert_eq!(e.to_string(), "undefined start label 'PROGRAM'");
    }

    #[test]
    fn error_display_buffer_overflow() {
        let e = LoadError::BufferOverflow {
            line: 2,
            buffer: Buffer::Argument,
            capacity: 64,
        };
        assert_eq!(e.to_string(), "line 2: argument exceeds capacity of 64");
    }

    #[test]
    fn error_clone_and_eq() {
        let e1 = LoadError::UnrecognizedOpcode {
            line: 1,
            token: "X".to_string(),
        };
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }
}
