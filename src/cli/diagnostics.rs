//! Diagnostics printed for an invalid command line

use std::io::{self, Write};

pub const INVALID_COMMAND_LINE: &str = "Invalid command line";

/// `Usage: <program> --filter=my-pattern`
pub fn usage_line(program: &str) -> String {
    format!("Usage: {program} --filter=my-pattern")
}

/// Both diagnostic lines, in print order.
pub fn usage_lines(program: &str) -> [String; 2] {
    [INVALID_COMMAND_LINE.to_string(), usage_line(program)]
}

pub fn print_usage<W: Write + ?Sized>(out: &mut W, program: &str) -> io::Result<()> {
    for line in usage_lines(program) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
