//! META II common types and lexical primitives.
//!
//! This crate provides the foundational data structures shared by the
//! loader and the interpreter:
//!
//! - [`Opcode`]: the 17 order codes plus the `ADR` / `END` pseudo-ops
//! - [`Instruction`]: an order code together with its string argument
//! - [`LabelTable`]: symbolic names bound to instruction addresses
//! - [`Program`]: instruction memory, label table and start address
//! - [`BoundedString`]: a string that refuses to grow past its capacity
//! - [`Limits`]: every fixed capacity of the machine in one place
//! - [`lex`]: character classification and cursor scanning
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod bounded;
pub mod error;
pub mod instruction;
pub mod label;
pub mod lex;
pub mod limits;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use bounded::BoundedString;
pub use error::{Buffer, CapacityExceeded};
pub use instruction::Instruction;
pub use label::{listing_form, Label, LabelTable};
pub use limits::Limits;
pub use opcode::Opcode;
pub use program::Program;
