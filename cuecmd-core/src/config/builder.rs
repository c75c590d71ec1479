// ============================================================================
// cuecmd-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Starts from the environment-aware defaults and lets callers override
// individual settings with a fluent API.
//
// AI-ASSISTANT-INFO: Builder pattern implementation for CoreConfig

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::CoreConfig;

/// Builder for creating CoreConfig instances.
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a builder seeded from [`CoreConfig::from_env`].
    pub fn new() -> Self {
        Self {
            config: CoreConfig::from_env(),
        }
    }

    /// Sets the `cue` executable.
    #[must_use]
    pub fn cue_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.config.cue_binary = binary.into();
        self
    }

    /// Sets whether the binary is verified before first use.
    #[must_use]
    pub fn check_binary(mut self, check: bool) -> Self {
        self.config.check_binary = check;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
