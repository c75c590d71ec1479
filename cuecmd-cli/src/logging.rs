// ============================================================================
// cuecmd-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger backend for the `log` facade
//
// The core library only emits `log` records; this module decides where they
// go. Defaults:
// - normal:   warnings and errors (failed `cue` runs are logged at error)
// - verbose:  debug, which includes every argument vector that is executed
// RUST_LOG, when set, refines the default.
//
// AI-ASSISTANT-INFO: Logger initialization for the CLI

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use std::io::Write;

/// Target of the record logged for every failed `cue` run.
pub const FAILURE_TARGET: &str = "cuecmd_core::outcome";

/// Initializes the logger for the given verbosity.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    init_with_level(level);
}

/// Initializes the logger with an explicit default level.
pub fn init_with_level(level: LevelFilter) {
    let colored = crate::terminal::stderr_supports_color();

    let _ = env_logger::Builder::new()
        .filter(None, level)
        .parse_env("RUST_LOG")
        .format(move |buf, record| {
            let label = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN ",
                Level::Info => "INFO ",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            if !colored {
                return writeln!(buf, "{label} {}", record.args());
            }
            match record.level() {
                Level::Error => writeln!(buf, "{} {}", label.bright_red(), record.args()),
                Level::Warn => writeln!(buf, "{} {}", label.yellow(), record.args()),
                Level::Info => writeln!(buf, "{} {}", label.green(), record.args()),
                Level::Debug => writeln!(buf, "{} {}", label.blue(), record.args()),
                Level::Trace => writeln!(buf, "{} {}", label.magenta(), record.args()),
            }
        })
        .try_init();

    log::debug!("Logger initialized with level: {level}");
}

/// Whether failed runs already reach the user through the logger.
pub fn failures_are_logged() -> bool {
    log::log_enabled!(target: FAILURE_TARGET, Level::Error)
}
