//! META II loader: turns a program listing into instruction memory.
//!
//! A listing has one directive per line. Lines that begin with whitespace
//! hold an order code and its argument; lines that begin in column 0
//! define a label bound to the next instruction. `ADR` names the starting
//! label and `END` stops loading.
//!
//! # Usage
//!
//! ```
//! use metaii_assembler::assemble;
//!
//! let text = "        ADR MAIN\nMAIN\n        TST 'x'\n        BE\n        R\n        END\n";
//! let program = assemble(text).unwrap();
//! assert_eq!(program.len(), 3);
//! assert_eq!(program.start, 0);
//! assert_eq!(program.labels.lookup("MAIN"), Some(0));
//! ```
//!
//! # Roundtrip Guarantee
//!
//! `assemble(&disassemble(&program)) == program` holds for every program
//! the loader produces.

pub mod error;

mod disassembler;
mod lexer;
mod parser;

pub use error::LoadError;

use log::debug;
use metaii_common::{Buffer, LabelTable, Limits, Program};
use parser::{parse_line, Directive};

/// Load a listing with the default [`Limits`].
pub fn assemble(text: &str) -> Result<Program, LoadError> {
    assemble_with(text, &Limits::default())
}

/// Load a listing, enforcing `limits` on every bounded container.
///
/// Loading is a single pass. The start label is resolved after the whole
/// label table is built, so `ADR` may name a label defined further down.
/// Returns the first error encountered.
pub fn assemble_with(text: &str, limits: &Limits) -> Result<Program, LoadError> {
    let mut instructions = Vec::new();
    let mut labels = LabelTable::new();
    let mut start_label = None;

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let Some(directive) = parse_line(line, line_num, limits)? else {
            continue;
        };
        debug!("line {line_num}: {directive:?}");

        match directive {
            Directive::Instruction(instr) => {
                if instructions.len() >= limits.max_instructions {
                    return Err(LoadError::BufferOverflow {
                        line: line_num,
                        buffer: Buffer::Instructions,
                        capacity: limits.max_instructions,
                    });
                }
                instructions.push(instr);
            }
            Directive::Label(name) => {
                if labels.len() >= limits.max_labels {
                    return Err(LoadError::BufferOverflow {
                        line: line_num,
                        buffer: Buffer::Labels,
                        capacity: limits.max_labels,
                    });
                }
                labels.define(&name, instructions.len());
            }
            Directive::Start(name) => start_label = Some(name),
            Directive::End => break,
        }
    }

    let start = match &start_label {
        Some(name) => labels
            .lookup(name)
            .ok_or_else(|| LoadError::UndefinedLabel { name: name.clone() })?,
        None => 0,
    };

    debug!(
        "loaded {} instructions, {} labels, start at {start}",
        instructions.len(),
        labels.len()
    );

    Ok(Program {
        instructions,
        labels,
        start_label,
        start,
    })
}

/// Render a program as a listing that loads back to the same program.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}
