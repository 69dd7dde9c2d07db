//! CLI command implementation.

use std::fs;
use std::io::{self, Write};

use log::info;
use metaii_common::Limits;
use metaii_vm::{LineSink, RuntimeError};

/// Load `program_path` and run it over the contents of `input_path`.
pub fn run(program_path: &str, input_path: &str) -> Result<(), i32> {
    let text = read_text(program_path)?;
    let input = read_text(input_path)?;

    let program = metaii_assembler::assemble(&text).map_err(|e| {
        eprintln!("error: {program_path}: {e}");
        1
    })?;
    info!(
        "loaded {} instructions, {} labels from {program_path}",
        program.len(),
        program.labels.len()
    );

    let mut sink = StdoutSink::new();
    let result = metaii_vm::run_with(&program, &input, &Limits::default(), &mut sink);
    sink.finish()?;

    match result {
        Ok(()) => Ok(()),
        Err(e @ RuntimeError::ParseFailure { .. }) => {
            eprintln!("error: {e}");
            Err(2)
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Writes each generated line to stdout as soon as it is flushed.
///
/// The first write error is kept and reported once the run is over.
struct StdoutSink {
    out: io::StdoutLock<'static>,
    error: Option<io::Error>,
}

impl StdoutSink {
    fn new() -> Self {
        Self {
            out: io::stdout().lock(),
            error: None,
        }
    }

    fn finish(mut self) -> Result<(), i32> {
        if self.error.is_none() {
            if let Err(e) = self.out.flush() {
                self.error = Some(e);
            }
        }
        match self.error {
            Some(e) => {
                eprintln!("error: cannot write output: {e}");
                Err(1)
            }
            None => Ok(()),
        }
    }
}

impl LineSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            self.error = Some(e);
        }
    }
}

// --- Helpers ---

fn read_text(path: &str) -> Result<String, i32> {
    fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })
}
