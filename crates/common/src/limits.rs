//! Fixed capacities of the machine.
//!
//! The loader and the interpreter never grow a container past these
//! values; exceeding one is a distinct error rather than truncation.

/// Maximum length in bytes of an instruction argument, label name or token.
pub const DEFAULT_STRING_CAPACITY: usize = 64;

/// Maximum length in bytes of one output line, indentation excluded.
pub const DEFAULT_OUTPUT_CAPACITY: usize = 256;

/// Maximum number of instructions in a program.
pub const DEFAULT_MAX_INSTRUCTIONS: usize = 4_096;

/// Maximum number of label definitions in a program.
pub const DEFAULT_MAX_LABELS: usize = 1_024;

/// Maximum number of frames pushed by CLL before a matching R.
pub const DEFAULT_CALL_DEPTH: usize = 256;

/// Column that OUT returns the output to. LB moves it to column 0.
pub const DEFAULT_INDENT: usize = 8;

/// Capacities and layout settings for one load or run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub argument_len: usize,
    pub label_len: usize,
    pub token_len: usize,
    pub output_len: usize,
    pub max_instructions: usize,
    pub max_labels: usize,
    pub call_depth: usize,
    pub indent: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            argument_len: DEFAULT_STRING_CAPACITY,
            label_len: DEFAULT_STRING_CAPACITY,
            token_len: DEFAULT_STRING_CAPACITY,
            output_len: DEFAULT_OUTPUT_CAPACITY,
            max_instructions: DEFAULT_MAX_INSTRUCTIONS,
            max_labels: DEFAULT_MAX_LABELS,
            call_depth: DEFAULT_CALL_DEPTH,
            indent: DEFAULT_INDENT,
        }
    }
}
