//! Configuration types for tree walkers

use super::filter::{DEFAULT_EXTENSIONS, DEFAULT_IGNORED_NAMES, PathClassifier};

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directory names that are skipped wherever they are found below a root.
    pub ignored_names: Vec<String>,
    /// File extensions, leading dot included, that are collected.
    pub extensions: Vec<String>,
}

impl WalkerConfig {
    pub fn classifier(&self) -> PathClassifier {
        PathClassifier::new(self.ignored_names.iter().cloned(), self.extensions.iter().cloned())
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignored_names: DEFAULT_IGNORED_NAMES.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
