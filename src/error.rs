//! Error types for walking and report output

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Non-fatal error hit while listing a directory.
///
/// These never abort a walk. They are collected in the run-wide error log
/// and written out alongside the notes.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The directory listing could not be opened at all.
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The listing failed part-way through; entries read so far are kept.
    #[error("cannot read entry in '{}': {source}", path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// Directory the error was raised for.
    pub fn path(&self) -> &PathBuf {
        match self {
            WalkError::ReadDir { path, .. } | WalkError::ReadEntry { path, .. } => path,
        }
    }
}

/// Errors that stop a run from producing its output files.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("structured export failed: {0}")]
    Export(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
