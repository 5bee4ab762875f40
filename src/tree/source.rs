//! Directory listing backends
//!
//! `TreeWalker` only sees directories through `DirSource`, so listing
//! failures can be produced on demand in tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What kind of filesystem object an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Anything that is neither collected nor walked (directory symlinks,
    /// broken links, sockets).
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Source of directory listings.
pub trait DirSource {
    /// True if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the immediate entries of `dir` in enumeration order.
    ///
    /// The outer error means the listing could not be opened. An inner error
    /// means enumeration broke off at that point.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<io::Result<Entry>>>;
}

/// `DirSource` backed by `std::fs`. Entries come back in OS order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DirSource for FsSource {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<io::Result<Entry>>> {
        let entries = fs::read_dir(dir)?;
        Ok(entries.map(|entry| entry.and_then(to_entry)).collect())
    }
}

fn to_entry(entry: fs::DirEntry) -> io::Result<Entry> {
    let file_type = entry.file_type()?;
    let path = entry.path();

    // Directory symlinks are never walked so a link back up the tree cannot
    // loop. File symlinks are collected like the files they point at.
    let kind = if file_type.is_symlink() {
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        }
    } else if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };

    Ok(Entry {
        name: entry.file_name().to_string_lossy().into_owned(),
        path,
        kind,
    })
}
