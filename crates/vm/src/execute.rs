//! Main execution loop and opcode dispatch for the META II machine.

use crate::error::RuntimeError;
use crate::machine::Machine;
use crate::output::LineSink;
use crate::stack::StackFault;
use log::{debug, trace};
use metaii_common::{lex, Instruction};

impl<'a, S: LineSink> Machine<'a, S> {
    /// Run until the input is exhausted or an error occurs.
    ///
    /// Reaching any particular instruction does not stop the machine; a
    /// well-formed program consumes the last of its input as the top-level
    /// rule completes.
    pub fn execute(&mut self) -> Result<(), RuntimeError> {
        while !self.input_exhausted() {
            self.step()?;
        }
        if !self.output.pending().is_empty() {
            debug!("discarding unflushed output {:?}", self.output.pending());
        }
        debug!(
            "input exhausted at instruction {}, {} symbols generated",
            self.ip,
            self.symbols.issued()
        );
        Ok(())
    }

    /// Fetch, advance and dispatch a single instruction.
    pub fn step(&mut self) -> Result<(), RuntimeError> {
        let instr = self.fetch()?;
        trace!(
            "{:>5}  {:<20} cursor={} switch={}",
            self.ip,
            instr.to_string(),
            self.cursor,
            self.switch
        );
        self.ip += 1;

        match instr {
            // Recognition
            Instruction::Tst(literal) => self.exec_tst(literal),
            Instruction::Id => self.exec_id(),
            Instruction::Num => self.exec_num(),
            Instruction::Sr => self.exec_sr(),

            // Control transfer
            Instruction::Cll(label) => self.exec_cll(label),
            Instruction::R => self.exec_r(),
            Instruction::Set => {
                self.switch = true;
                Ok(())
            }
            Instruction::B(label) => {
                self.ip = self.lookup(label)?;
                Ok(())
            }
            Instruction::Bt(label) => self.exec_branch_if(label, true),
            Instruction::Bf(label) => self.exec_branch_if(label, false),
            Instruction::Be => self.exec_be(),

            // Output
            Instruction::Cl(literal) => self.output.emit(literal).map_err(|e| self.overflow(e)),
            Instruction::Ci => self.exec_ci(),
            Instruction::Gn1 => self.exec_gn(Slot::First),
            Instruction::Gn2 => self.exec_gn(Slot::Second),
            Instruction::Lb => {
                self.output.set_margin();
                Ok(())
            }
            Instruction::Out => {
                trace!("OUT at column {}", self.output.column());
                self.output.flush_line();
                Ok(())
            }
        }
    }

    // ---- Recognition ----

    fn skip_whitespace(&mut self) {
        self.cursor = lex::skip_whitespace(self.input, self.cursor);
    }

    fn exec_tst(&mut self, literal: &str) -> Result<(), RuntimeError> {
        self.skip_whitespace();
        self.switch = self.remaining().starts_with(literal);
        if self.switch {
            self.cursor += literal.len();
        }
        Ok(())
    }

    fn exec_id(&mut self) -> Result<(), RuntimeError> {
        self.skip_whitespace();
        if !self.at_byte(lex::is_letter) {
            self.switch = false;
            return Ok(());
        }
        let end = lex::scan_while(self.input, self.cursor, lex::is_alnum);
        self.accept_token(end)
    }

    fn exec_num(&mut self) -> Result<(), RuntimeError> {
        self.skip_whitespace();
        if !self.at_byte(lex::is_digit) {
            self.switch = false;
            return Ok(());
        }
        let end = lex::scan_while(self.input, self.cursor, lex::is_digit);
        self.accept_token(end)
    }

    fn exec_sr(&mut self) -> Result<(), RuntimeError> {
        self.skip_whitespace();
        if !self.at_byte(|b| b == b'\'') {
            self.switch = false;
            return Ok(());
        }
        let end = lex::scan_quoted(self.input, self.cursor).ok_or(
            RuntimeError::UnterminatedString {
                at: self.at(),
                position: self.cursor,
            },
        )?;
        self.accept_token(end)
    }

    fn at_byte(&self, pred: impl Fn(u8) -> bool) -> bool {
        self.input
            .as_bytes()
            .get(self.cursor)
            .is_some_and(|&b| pred(b))
    }

    /// Replace the token with `input[cursor..end]`, consume it and set the switch.
    fn accept_token(&mut self, end: usize) -> Result<(), RuntimeError> {
        let input: &'a str = self.input;
        let lexeme = &input[self.cursor..end];
        self.token.clear();
        self.token.push_str(lexeme).map_err(|e| self.overflow(e))?;
        self.cursor = end;
        self.switch = true;
        Ok(())
    }

    // ---- Control transfer ----

    fn exec_cll(&mut self, label: &str) -> Result<(), RuntimeError> {
        let target = self.lookup(label)?;
        self.stack.push(self.ip).map_err(|fault| self.stack_fault(fault))?;
        self.ip = target;
        Ok(())
    }

    fn exec_r(&mut self) -> Result<(), RuntimeError> {
        self.ip = self
            .stack
            .pop()
            .map_err(|fault| self.stack_fault(fault))?;
        Ok(())
    }

    fn stack_fault(&self, fault: StackFault) -> RuntimeError {
        debug!("{fault} at instruction {} (depth {})", self.at(), self.stack.depth());
        match fault {
            StackFault::Overflow => RuntimeError::StackOverflow {
                at: self.at(),
                capacity: self.stack.capacity(),
            },
            StackFault::Underflow => RuntimeError::StackUnderflow { at: self.at() },
        }
    }

    /// BT / BF. The label is resolved whether or not the branch is taken.
    fn exec_branch_if(&mut self, label: &str, when: bool) -> Result<(), RuntimeError> {
        let target = self.lookup(label)?;
        if self.switch == when {
            self.ip = target;
        }
        Ok(())
    }

    fn exec_be(&mut self) -> Result<(), RuntimeError> {
        if !self.switch {
            return Err(RuntimeError::ParseFailure {
                at: self.at(),
                position: self.cursor,
            });
        }
        Ok(())
    }

    // ---- Output ----

    fn exec_ci(&mut self) -> Result<(), RuntimeError> {
        self.output
            .emit_token_and_clear(&mut self.token)
            .map_err(|e| self.overflow(e))
    }

    fn exec_gn(&mut self, slot: Slot) -> Result<(), RuntimeError> {
        let frame = self.stack.current_frame();
        let cell = match slot {
            Slot::First => &mut frame.label1,
            Slot::Second => &mut frame.label2,
        };
        let symbol = cell.get_or_insert_with(|| self.symbols.fresh()).clone();
        self.output.emit(&symbol).map_err(|e| self.overflow(e))
    }
}

/// Which generated-label cell of the current frame GN1/GN2 use.
#[derive(Debug, Clone, Copy)]
enum Slot {
    First,
    Second,
}
