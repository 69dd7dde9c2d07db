//! META II CLI: load a program listing and run it over an input file.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage, read or load error
//! - 2: Parse failure (the input does not match the grammar)
//! - 3: Any other runtime error

mod commands;

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if matches!(args.first().map(String::as_str), Some("--help" | "-h" | "help")) {
        print_usage();
        process::exit(0);
    }

    let [program, input] = args.as_slice() else {
        eprintln!("error: expected 2 arguments, found {}", args.len());
        eprintln!();
        print_usage();
        process::exit(1);
    };

    if let Err(code) = commands::run(program, input) {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: metaii <program> <input>");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <program>   META II object code listing");
    eprintln!("  <input>     Text to recognize and translate");
    eprintln!();
    eprintln!("Generated lines are written to stdout. Set RUST_LOG=trace to");
    eprintln!("trace every executed instruction on stderr.");
}
