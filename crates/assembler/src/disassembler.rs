//! Disassembler: renders a loaded program as canonical listing text.
//!
//! Labels sit in column 0 on their own line, instructions are indented,
//! literal arguments are quoted. `ADR` comes first when the program has a
//! start label and `END` comes last.

use metaii_common::{listing_form, Program};

const INDENT: &str = "        ";

/// Disassemble a program into a listing.
///
/// The output is guaranteed to reload to an identical program
/// (`assemble(disassemble(program)) == program`).
pub fn disassemble(program: &Program) -> String {
    let mut lines = Vec::new();

    if let Some(start) = &program.start_label {
        lines.push(format!("{INDENT}ADR {}", listing_form(start)));
    }

    for address in 0..=program.len() {
        for label in program.labels.at(address) {
            lines.push(label.name.clone());
        }
        if let Some(instr) = program.get(address) {
            lines.push(format!("{INDENT}{instr}"));
        }
    }

    lines.push(format!("{INDENT}END"));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
