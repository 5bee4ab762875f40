//! Test utilities: temporary directory trees and an in-memory listing source.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::tree::{DirSource, Entry, EntryKind};

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add an empty file, creating parent directories as needed.
    pub fn add_file(&self, path: &str) -> PathBuf {
        self.add_file_with(path, "")
    }

    /// Add a file with content, creating parent directories as needed.
    pub fn add_file_with(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory and any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory `DirSource` with scripted failures.
///
/// Entries are listed in the order they were added, which makes enumeration
/// order deterministic. Adding a path adds all of its missing parents.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    children: HashMap<PathBuf, Vec<(String, EntryKind)>>,
    unreadable: HashMap<PathBuf, io::ErrorKind>,
    interrupted: HashMap<PathBuf, usize>,
    seen: HashSet<PathBuf>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.insert(Path::new(path), EntryKind::Dir);
        self
    }

    pub fn file(mut self, path: &str) -> Self {
        self.insert(Path::new(path), EntryKind::File);
        self
    }

    /// Make opening the listing of `path` fail with `kind`.
    pub fn unreadable(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.unreadable.insert(PathBuf::from(path), kind);
        self
    }

    /// Make the listing of `path` fail after `count` entries.
    pub fn interrupt_after(mut self, path: &str, count: usize) -> Self {
        self.interrupted.insert(PathBuf::from(path), count);
        self
    }

    fn insert(&mut self, path: &Path, kind: EntryKind) {
        if kind == EntryKind::Dir {
            self.children.entry(path.to_path_buf()).or_default();
        }
        if !self.seen.insert(path.to_path_buf()) {
            return;
        }
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };
        if !self.children.contains_key(parent) {
            self.insert(parent, EntryKind::Dir);
        }
        self.children
            .entry(parent.to_path_buf())
            .or_default()
            .push((name.to_string_lossy().into_owned(), kind));
    }
}

impl DirSource for MemorySource {
    fn is_dir(&self, path: &Path) -> bool {
        self.children.contains_key(path)
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<io::Result<Entry>>> {
        if let Some(kind) = self.unreadable.get(dir) {
            return Err(io::Error::new(*kind, format!("{} denied", dir.display())));
        }
        let listing = self
            .children
            .get(dir)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))?;

        let limit = self.interrupted.get(dir).copied();
        let mut entries: Vec<io::Result<Entry>> = listing
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|(name, kind)| {
                Ok(Entry {
                    name: name.clone(),
                    path: dir.join(name),
                    kind: *kind,
                })
            })
            .collect();
        if limit.is_some() {
            entries.push(Err(io::Error::other("listing interrupted")));
        }
        Ok(entries)
    }
}
