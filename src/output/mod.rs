//! Rendering of the inventory
//!
//! - `config` - Output configuration types
//! - `outline` - Markdown outline documents
//! - `json` - Structured export and its parser
//! - `errors` - The non-fatal error log

mod config;
mod errors;
pub mod json;
mod outline;

// Re-export public types and functions
pub use config::{OutlineConfig, OutlineMode};
pub use errors::render_error_log;
pub use outline::{FRONT_MATTER_DATE_FORMAT, OutlineMetadata, OutlineRenderer};
