//! Structured (JSON) export of a forest

use serde::Deserialize;

use crate::error::Result;
use crate::tree::{Container, Forest};

/// Serialize the forest as pretty-printed JSON.
pub fn export(forest: &[Container]) -> Result<String> {
    Ok(serde_json::to_string_pretty(forest)?)
}

/// Read a forest back from its structured export.
///
/// Trees nest one JSON level per directory, so the parser has no depth
/// limit and grows its stack on demand instead.
pub fn parse(text: &str) -> Result<Forest> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let forest = Forest::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(forest)
}
