//! TreeWalker - builds the inventory tree in memory

use std::path::{Path, PathBuf};
use std::vec;

use tracing::{debug, warn};

use crate::error::WalkError;

use super::config::WalkerConfig;
use super::filter::PathClassifier;
use super::model::{Container, File};
use super::source::{DirSource, EntryKind, FsSource};
use super::utils::{container_name, file_extension};

/// Tree walker that builds the full tree in memory.
///
/// Walking is depth-first and pre-order: each directory's files are collected
/// before any of its subdirectories are entered. An explicit stack is used
/// instead of recursion, so very deep trees cannot exhaust the call stack.
pub struct TreeWalker<S = FsSource> {
    classifier: PathClassifier,
    source: S,
}

/// A directory whose files are collected but whose subdirectories are still
/// waiting to be walked.
struct Frame {
    container: Container,
    pending: vec::IntoIter<(PathBuf, String)>,
}

impl TreeWalker<FsSource> {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            classifier: config.classifier(),
            source: FsSource,
        }
    }
}

impl<S: DirSource> TreeWalker<S> {
    /// Use a different listing backend.
    pub fn with_source<T: DirSource>(self, source: T) -> TreeWalker<T> {
        TreeWalker {
            classifier: self.classifier,
            source,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn classifier(&self) -> &PathClassifier {
        &self.classifier
    }

    /// Build the container tree for one root.
    ///
    /// The root itself is always walked, even if its name is on the ignore
    /// list. Listing failures are appended to `errors` in the order they
    /// happen and never stop the walk.
    pub fn build(&self, root: &Path, errors: &mut Vec<WalkError>) -> Container {
        let root_frame = self.open(root.to_path_buf(), container_name(root), errors);
        let mut stack = vec![root_frame];

        while let Some(mut frame) = stack.pop() {
            if let Some((path, name)) = frame.pending.next() {
                let child = self.open(path, name, errors);
                stack.push(frame);
                stack.push(child);
                continue;
            }

            match stack.last_mut() {
                Some(parent) => parent.container.sub_containers.push(frame.container),
                None => return frame.container,
            }
        }

        unreachable!("the root frame is always the last one finished")
    }

    /// List one directory: collect its files, queue its subdirectories.
    fn open(&self, path: PathBuf, name: String, errors: &mut Vec<WalkError>) -> Frame {
        let mut container = Container::new(path.to_string_lossy(), name);
        let mut pending = Vec::new();

        match self.source.read_dir(&path) {
            Ok(entries) => {
                let mut subdirs = Vec::new();
                for entry in entries {
                    let entry = match entry {
                        Ok(e) => e,
                        Err(source) => {
                            let err = WalkError::ReadEntry {
                                path: path.clone(),
                                source,
                            };
                            warn!("{}", err);
                            errors.push(err);
                            break;
                        }
                    };

                    match entry.kind {
                        EntryKind::File => {
                            if let Some(ext) = file_extension(&entry.name) {
                                if self.classifier.is_collected_extension(ext) {
                                    debug!("Processed file '{}'", entry.path.display());
                                    container.files.push(File::new(entry.name.as_str(), ext));
                                }
                            }
                        }
                        EntryKind::Dir => subdirs.push(entry),
                        EntryKind::Other => {}
                    }
                }

                for dir in subdirs {
                    if self.classifier.is_ignored_name(&dir.name) {
                        debug!("Skipping ignored directory '{}'", dir.path.display());
                        continue;
                    }
                    pending.push((dir.path, dir.name));
                }
            }
            Err(source) => {
                let err = WalkError::ReadDir {
                    path: path.clone(),
                    source,
                };
                warn!("{}", err);
                errors.push(err);
            }
        }

        Frame {
            container,
            pending: pending.into_iter(),
        }
    }
}
