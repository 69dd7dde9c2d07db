//! Parser turning classified listing lines into loader directives.

use crate::error::LoadError;
use crate::lexer::{classify_line, normalize_argument, Line};
use metaii_common::{lex, Buffer, Instruction, Limits, Opcode};

/// What one listing line asks the loader to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Directive {
    /// Append an instruction to instruction memory.
    Instruction(Instruction),
    /// Bind a label to the next instruction's address.
    Label(String),
    /// `ADR`: name the starting label.
    Start(String),
    /// `END`: stop loading.
    End,
}

/// Parse a single listing line.
///
/// Returns `Ok(None)` for blank lines.
pub(crate) fn parse_line(
    line: &str,
    line_num: usize,
    limits: &Limits,
) -> Result<Option<Directive>, LoadError> {
    match classify_line(line) {
        Line::Blank => Ok(None),
        Line::Label(name) => {
            check_len(name, limits.label_len, Buffer::LabelName, line_num)?;
            Ok(Some(Directive::Label(name.to_string())))
        }
        Line::Instruction { mnemonic, argument } => {
            let opcode =
                Opcode::from_mnemonic(mnemonic).ok_or_else(|| LoadError::UnrecognizedOpcode {
                    line: line_num,
                    token: mnemonic.to_string(),
                })?;
            parse_instruction(opcode, argument, line_num, limits).map(Some)
        }
    }
}

fn parse_instruction(
    opcode: Opcode,
    raw_argument: &str,
    line_num: usize,
    limits: &Limits,
) -> Result<Directive, LoadError> {
    // Presence is judged before quote stripping: `CL ''` is an empty literal.
    if opcode.takes_argument() && is_blank(raw_argument) {
        return Err(LoadError::MissingArgument {
            line: line_num,
            opcode: opcode.mnemonic(),
        });
    }

    let argument = normalize_argument(raw_argument);

    // A label reference that normalizes to nothing can never resolve.
    if opcode.takes_argument() && !opcode.quotes_argument() && is_blank(argument) {
        return Err(LoadError::MissingArgument {
            line: line_num,
            opcode: opcode.mnemonic(),
        });
    }

    match opcode {
        Opcode::End => Ok(Directive::End),
        Opcode::Adr => {
            check_len(argument, limits.label_len, Buffer::LabelName, line_num)?;
            Ok(Directive::Start(argument.to_string()))
        }
        _ => {
            if opcode.takes_argument() {
                check_len(argument, limits.argument_len, Buffer::Argument, line_num)?;
            }
            Instruction::from_parts(opcode, argument)
                .map(Directive::Instruction)
                .ok_or_else(|| LoadError::UnrecognizedOpcode {
                    line: line_num,
                    token: opcode.mnemonic().to_string(),
                })
        }
    }
}

fn is_blank(raw: &str) -> bool {
    raw.bytes().all(lex::is_space)
}

fn check_len(text: &str, capacity: usize, buffer: Buffer, line_num: usize) -> Result<(), LoadError> {
    if text.len() > capacity {
        return Err(LoadError::BufferOverflow {
            line: line_num,
            buffer,
            capacity,
        });
    }
    Ok(())
}
