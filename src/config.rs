//! Configuration for the bookstore
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a Bookstore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Validation Configuration
    // -------------------------------------------------------------------------
    /// Validate author records the same way book records are validated
    /// (non-empty name, non-negative book count).
    ///
    /// Off by default: author adds and updates accept any input.
    pub strict_author_validation: bool,

    // -------------------------------------------------------------------------
    // Capacity Configuration
    // -------------------------------------------------------------------------
    /// Capacity hint for the author and book sequences. Not a limit.
    pub initial_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_author_validation: false,
            initial_capacity: 16,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Enable or disable author field validation
    pub fn strict_author_validation(mut self, enabled: bool) -> Self {
        self.config.strict_author_validation = enabled;
        self
    }

    /// Set the capacity hint for both sequences
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
