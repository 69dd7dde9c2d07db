//! VM state: instruction pointer, switch, input cursor, token, call stack, output.

use crate::error::RuntimeError;
use crate::gensym::SymbolGenerator;
use crate::output::{LineSink, OutputAssembler};
use crate::stack::CallStack;
use metaii_common::{BoundedString, Buffer, CapacityExceeded, Instruction, Limits, Program};

/// The META II machine, bound to one program and one input text.
pub struct Machine<'a, S> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    /// The text being recognized.
    pub(crate) input: &'a str,
    /// Byte offset into `input`. Only moves forward.
    pub(crate) cursor: usize,
    /// Index of the next instruction to fetch.
    pub(crate) ip: usize,
    /// Parse success flag.
    pub(crate) switch: bool,
    /// Most recently recognized lexeme.
    pub(crate) token: BoundedString,
    pub(crate) stack: CallStack,
    pub(crate) output: OutputAssembler<S>,
    pub(crate) symbols: SymbolGenerator,
}

impl<'a, S: LineSink> Machine<'a, S> {
    /// Create a machine positioned at the program's start address.
    pub fn new(program: &'a Program, input: &'a str, limits: &Limits, sink: S) -> Self {
        Self {
            program,
            input,
            cursor: 0,
            ip: program.start,
            switch: false,
            token: BoundedString::new(Buffer::Token, limits.token_len),
            stack: CallStack::new(limits.call_depth),
            output: OutputAssembler::new(sink, limits),
            symbols: SymbolGenerator::new(),
        }
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn switch(&self) -> bool {
        self.switch
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Number of frames pushed by CLL and not yet returned from.
    pub fn call_depth(&self) -> usize {
        self.stack.depth()
    }

    /// Output emitted since the last OUT.
    pub fn pending_output(&self) -> &str {
        self.output.pending()
    }

    /// Consume the machine and hand back the sink.
    pub fn into_sink(self) -> S {
        self.output.into_sink()
    }

    /// True once the cursor has consumed every byte of input.
    pub fn input_exhausted(&self) -> bool {
        self.cursor >= self.input.len()
    }

    /// Fetch the instruction at the current ip.
    pub(crate) fn fetch(&self) -> Result<&'a Instruction, RuntimeError> {
        let program: &'a Program = self.program;
        program
            .get(self.ip)
            .ok_or(RuntimeError::UnexpectedEndOfProgram { at: self.ip })
    }

    /// Index of the instruction being executed (ip has already advanced).
    pub(crate) fn at(&self) -> usize {
        self.ip.saturating_sub(1)
    }

    /// Resolve a label to its address.
    pub(crate) fn lookup(&self, name: &str) -> Result<usize, RuntimeError> {
        self.program
            .labels
            .lookup(name)
            .ok_or_else(|| RuntimeError::UndefinedLabel {
                at: self.at(),
                name: name.to_string(),
            })
    }

    /// The unconsumed input.
    pub(crate) fn remaining(&self) -> &'a str {
        let input: &'a str = self.input;
        &input[self.cursor..]
    }

    pub(crate) fn overflow(&self, e: CapacityExceeded) -> RuntimeError {
        RuntimeError::BufferOverflow {
            at: self.at(),
            buffer: e.buffer,
            capacity: e.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaii_common::LabelTable;

    #[test]
    fn starts_at_program_start() {
        let mut labels = LabelTable::new();
        labels.define("MAIN", 1);
        let mut program = Program::new(vec![Instruction::R, Instruction::Set], labels);
        program.start = 1;
        let vm = Machine::new(&program, "x", &Limits::default(), Vec::new());
        assert_eq!(vm.ip(), 1);
        assert!(!vm.switch());
        assert_eq!(vm.cursor(), 0);
        assert_eq!(vm.call_depth(), 0);
    }

    #[test]
    fn fetch_past_end() {
        let program = Program::default();
        let vm = Machine::new(&program, "x", &Limits::default(), Vec::new());
        assert_eq!(
            vm.fetch(),
            Err(RuntimeError::UnexpectedEndOfProgram { at: 0 })
        );
    }

    #[test]
    fn empty_input_is_exhausted() {
        let program = Program::default();
        let vm = Machine::new(&program, "", &Limits::default(), Vec::new());
        assert!(vm.input_exhausted());
    }
}
