// rankbuddy-cli: shared utilities for the command-line tools.

use std::io::{self, BufRead};
use std::process;

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Remove a boolean flag from the args, returning whether it was present.
pub fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

/// Remove a `--name VALUE` pair from the args, returning the value.
/// Exits with an error if the flag is present without a value.
pub fn take_value(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let i = args.iter().position(|a| a == flag)?;
    if i + 1 >= args.len() {
        fatal(&format!("{flag} requires a value"));
    }
    let value = args.remove(i + 1);
    args.remove(i);
    Some(value)
}

/// Read non-empty lines from stdin.
pub fn read_stdin_lines() -> Vec<String> {
    io::stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .filter(|line| !line.trim().is_empty())
        .collect()
}
