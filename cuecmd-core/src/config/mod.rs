//! Configuration for the cuecmd core library.
//!
//! Settings come from three places, later ones winning: the defaults below,
//! environment variables (see [`CoreConfig::from_env`]), and explicit values
//! set through [`CoreConfigBuilder`].

mod builder;
mod utils;

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

pub use builder::CoreConfigBuilder;
pub use utils::{get_env_bool, get_env_path};

// Default constants

/// Name of the `cue` binary, resolved through `PATH`.
pub const DEFAULT_CUE_BINARY: &str = "cue";

/// Whether to verify that the binary can be started before first use.
pub const DEFAULT_CHECK_BINARY: bool = false;

/// Environment variable overriding the binary path.
pub const ENV_CUE_BINARY: &str = "CUECMD_BINARY";

/// Environment variable enabling the startup binary check (`true` or `1`).
pub const ENV_CHECK_BINARY: &str = "CUECMD_CHECK_BINARY";

/// Main configuration structure for the cuecmd core library.
///
/// # Examples
///
/// ```rust
/// use cuecmd_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .cue_binary("/usr/local/bin/cue")
///     .check_binary(true)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Path or name of the `cue` executable
    pub cue_binary: PathBuf,

    /// Run `cue version` once when the runner is created
    pub check_binary: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            cue_binary: PathBuf::from(DEFAULT_CUE_BINARY),
            check_binary: DEFAULT_CHECK_BINARY,
        }
    }
}

impl CoreConfig {
    /// Defaults overridden by `CUECMD_BINARY` and `CUECMD_CHECK_BINARY`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cue_binary: get_env_path(ENV_CUE_BINARY, defaults.cue_binary),
            check_binary: get_env_bool(ENV_CHECK_BINARY, defaults.check_binary),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.cue_binary.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "cue binary path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoreConfig::default();
        assert_eq!(config.cue_binary, PathBuf::from("cue"));
        assert!(!config.check_binary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_binary_is_invalid() {
        let config = CoreConfig {
            cue_binary: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
