// ============================================================================
// cuecmd-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Plain results on stdout, styled messages on stderr
//
// `cue` output is forwarded untouched so it can be piped. Only messages that
// cuecmd itself writes get colors, and only when stderr supports them.
//
// AI-ASSISTANT-INFO: Terminal output helpers for the CLI

use owo_colors::OwoColorize;
use std::io::{self, Write};
use supports_color::Stream;

pub const ERROR_SYMBOL: &str = "✗";

/// Whether stderr is a color-capable terminal.
pub fn stderr_supports_color() -> bool {
    supports_color::on(Stream::Stderr).is_some()
}

/// Writes `cue` output verbatim.
pub fn print_output(output: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()
}

/// Prints an error message on stderr.
pub fn print_error(message: &str) {
    if stderr_supports_color() {
        eprintln!("{} {}", ERROR_SYMBOL.bright_red().bold(), message.bright_red());
    } else {
        eprintln!("{ERROR_SYMBOL} {message}");
    }
}

/// Prints a table heading, bold when stdout supports color.
pub fn print_heading(text: &str) {
    if supports_color::on(Stream::Stdout).is_some() {
        println!("{}", text.bold());
    } else {
        println!("{text}");
    }
}
