//! Name and extension filtering for tree walking

use std::collections::HashSet;

/// Directory names that are never recorded or descended into.
pub const DEFAULT_IGNORED_NAMES: &[&str] = &[
    "$RECYCLE.BIN",
    "System Volume Information",
    "found.000",
    ".vs",
    "bin",
    "obj",
    "__MACOSX",
    ".git",
    ".idea",
    "node_modules",
    "__1",
];

/// File extensions (with leading dot) that are collected.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".docx", ".doc", ".xlsx", ".xls", ".csv", ".pdf", ".zip", ".rar", ".iso", ".exe", ".mp4",
    ".epub", ".fb2", ".m4v",
];

/// Decides which directories are skipped and which files are collected.
///
/// Both checks are exact, case-sensitive set lookups: `.PDF` is not `.pdf`
/// and `Bin` is not `bin`.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    ignored_names: HashSet<String>,
    extensions: HashSet<String>,
}

impl PathClassifier {
    pub fn new<I, E>(ignored_names: I, extensions: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            ignored_names: ignored_names.into_iter().map(Into::into).collect(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// True if a directory with this name must not be recorded or walked.
    pub fn is_ignored_name(&self, name: &str) -> bool {
        self.ignored_names.contains(name)
    }

    /// True if files with this extension (leading dot included) are collected.
    pub fn is_collected_extension(&self, ext: &str) -> bool {
        self.extensions.contains(ext)
    }
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_IGNORED_NAMES.iter().copied(),
            DEFAULT_EXTENSIONS.iter().copied(),
        )
    }
}
