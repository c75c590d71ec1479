//! Configuration utility functions
//!
//! Helpers for reading settings from environment variables.

use std::path::PathBuf;

/// Get a path value from an environment variable or use the default
///
/// An empty variable counts as unset.
pub fn get_env_path(key: &str, default: PathBuf) -> PathBuf {
    match std::env::var_os(key) {
        Some(val) if !val.is_empty() => PathBuf::from(val),
        _ => default,
    }
}

/// Get a boolean value from an environment variable or use the default
pub fn get_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => val.to_lowercase() == "true" || val == "1",
        Err(_) => default,
    }
}
