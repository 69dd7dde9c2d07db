//! Program representation: instruction memory plus label table.

use crate::instruction::Instruction;
use crate::label::LabelTable;

/// A loaded META II program. Read-only while it runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction memory.
    pub instructions: Vec<Instruction>,
    /// Label definitions in listing order.
    pub labels: LabelTable,
    /// Label named by `ADR`, if the listing had one.
    pub start_label: Option<String>,
    /// Index of the first instruction to execute.
    pub start: usize,
}

impl Program {
    /// Create a program that starts at instruction 0.
    pub fn new(instructions: Vec<Instruction>, labels: LabelTable) -> Self {
        Self {
            instructions,
            labels,
            start_label: None,
            start: 0,
        }
    }

    /// The instruction at `address`, if it is inside the program.
    pub fn get(&self, address: usize) -> Option<&Instruction> {
        self.instructions.get(address)
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_program() {
        let program = Program::default();
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
        assert_eq!(program.start, 0);
        assert_eq!(program.get(0), None);
    }

    #[test]
    fn get_in_bounds() {
        let mut labels = LabelTable::new();
        labels.define("S", 0);
        let program = Program::new(vec![Instruction::Set, Instruction::R], labels);
        assert_eq!(program.get(1), Some(&Instruction::R));
        assert_eq!(program.get(2), None);
        assert_eq!(program.labels.lookup("S"), Some(0));
    }
}
