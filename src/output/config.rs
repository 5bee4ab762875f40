//! Output configuration types

/// Configuration for outline rendering.
#[derive(Debug, Clone, Default)]
pub struct OutlineConfig {
    /// Drop the files of sub-containers that have no sub-containers of their
    /// own. Older notes were produced this way; off by default.
    pub hide_leaf_files: bool,
}

/// How outline documents are split across files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutlineMode {
    /// One document for the whole forest.
    #[default]
    Combined,
    /// One document per root container.
    PerRoot,
}
