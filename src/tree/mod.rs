//! Directory tree walking logic
//!
//! `TreeWalker` turns a root directory into a `Container` tree holding the
//! collected files, skipping directories on the ignore list. Listing goes
//! through a `DirSource` so the filesystem can be swapped out in tests.

mod config;
mod filter;
mod model;
mod source;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::{DEFAULT_EXTENSIONS, DEFAULT_IGNORED_NAMES, PathClassifier};
pub use model::{Container, File, Forest};
pub use source::{DirSource, Entry, EntryKind, FsSource};
pub use utils::{container_name, file_extension};
pub use walker::TreeWalker;
