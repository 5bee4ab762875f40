//! dirnotes - inventory document and archive files across directory trees

pub mod error;
pub mod output;
pub mod report;
pub mod system;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result, WalkError};
pub use output::{OutlineConfig, OutlineMetadata, OutlineMode, OutlineRenderer, render_error_log};
pub use report::{Inventory, ReportWriter, report_file_name, run_timestamp};
pub use system::SystemInfo;
pub use tree::{
    Container, DirSource, File, Forest, FsSource, PathClassifier, TreeWalker, WalkerConfig,
};
