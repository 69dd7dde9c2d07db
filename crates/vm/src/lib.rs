//! META II virtual machine: runs recognizer/translator object code.
//!
//! The machine holds:
//! - An instruction pointer into a loaded [`Program`]
//! - A switch flag set by the recognition opcodes and tested by branches
//! - An input cursor that only moves forward over the input text
//! - A token buffer holding the last recognized lexeme
//! - A bounded call stack whose frames carry two generated-label slots
//! - An output assembler that emits whole lines to a [`LineSink`]
//!
//! # Usage
//!
//! ```
//! use metaii_assembler::assemble;
//! use metaii_vm::run;
//!
//! let listing = [
//!     "        ADR LIST",
//!     "LIST",
//!     "        ID",
//!     "        BE",
//!     "        CL 'ITEM '",
//!     "        CI",
//!     "        OUT",
//!     "        B LIST",
//! ]
//! .join("\n");
//! let program = assemble(&listing).unwrap();
//! let lines = run(&program, "alpha beta\n").unwrap();
//! assert_eq!(lines, vec!["        ITEM alpha", "        ITEM beta"]);
//! ```
//!
//! The machine stops as soon as the input cursor reaches the end of the
//! input, whatever instruction comes next. Output that should follow the
//! last token must be flushed before that token is consumed.

pub mod error;
pub mod execute;
pub mod gensym;
pub mod machine;
pub mod output;
pub mod stack;

pub use error::RuntimeError;
pub use machine::Machine;
pub use output::{LineSink, OutputAssembler};

use metaii_common::{Limits, Program};

/// Run a program over `input` with the default [`Limits`] and collect the
/// generated lines.
///
/// # Errors
///
/// Returns [`RuntimeError`] if execution fails (parse failure, undefined
/// label, stack overflow, etc.). Lines flushed before the failure are
/// discarded.
pub fn run(program: &Program, input: &str) -> Result<Vec<String>, RuntimeError> {
    let mut lines = Vec::new();
    run_with(program, input, &Limits::default(), &mut lines)?;
    Ok(lines)
}

/// Run a program over `input`, writing each flushed line to `sink` as soon
/// as OUT produces it.
///
/// Every run starts with a fresh symbol generator, so repeated runs of the
/// same program over the same input produce identical output.
pub fn run_with<S: LineSink>(
    program: &Program,
    input: &str,
    limits: &Limits,
    sink: S,
) -> Result<(), RuntimeError> {
    let mut vm = Machine::new(program, input, limits, sink);
    vm.execute()
}
