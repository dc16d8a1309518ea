//! Configuration types for Flow emission.

/// Configuration for Flow emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to export types
    pub(crate) export: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { export: true }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to export types.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }
}
