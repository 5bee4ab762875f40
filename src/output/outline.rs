//! Outline document rendering
//!
//! This module provides `OutlineRenderer` which renders a forest as a
//! markdown note: front matter, a system-info block, one section per root
//! with a tab-indented bullet outline, and a closing keyword block.

use chrono::Local;

use crate::system::SystemInfo;
use crate::tree::{Container, File};

use super::config::OutlineConfig;

/// Timestamp format of the `date created` / `date updated` fields.
pub const FRONT_MATTER_DATE_FORMAT: &str = "%Y-%-m-%d %H:%M";

const FIXED_TAGS: &[&str] = &["notes", "explorer"];

/// Caller-supplied values for the parts of the document that are not
/// derived from the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineMetadata {
    pub title: String,
    pub created: String,
    pub updated: String,
    pub system: SystemInfo,
    /// Identity tag added after the fixed tags.
    pub tag: String,
}

impl OutlineMetadata {
    /// Metadata for a note written now.
    ///
    /// `created` and `updated` are read from the clock separately.
    pub fn capture(system: SystemInfo) -> Self {
        let created = Local::now().format(FRONT_MATTER_DATE_FORMAT).to_string();
        let updated = Local::now().format(FRONT_MATTER_DATE_FORMAT).to_string();
        Self {
            title: format!("{}-explorer", system.domain.to_lowercase()),
            created,
            updated,
            tag: system.domain.clone(),
            system,
        }
    }
}

/// Renders forests as outline documents.
pub struct OutlineRenderer {
    config: OutlineConfig,
}

impl OutlineRenderer {
    pub fn new(config: OutlineConfig) -> Self {
        Self { config }
    }

    /// One document covering every root of the forest.
    pub fn render(&self, forest: &[Container], meta: &OutlineMetadata) -> String {
        let mut output = String::new();
        push_header(&mut output, meta);
        for root in forest {
            self.push_section(&mut output, root);
        }
        push_keywords(&mut output, meta);
        output
    }

    /// A document for a single root container.
    pub fn render_root(&self, root: &Container, meta: &OutlineMetadata) -> String {
        self.render(std::slice::from_ref(root), meta)
    }

    fn push_section(&self, output: &mut String, root: &Container) {
        output.push_str("### ==");
        output.push_str(&root.name);
        output.push_str("==\n\n> ");
        output.push_str(&root.path);
        output.push_str("\n\n");

        push_files(output, &root.files, 0);
        self.push_containers(output, &root.sub_containers, 0);

        output.push_str("\n---\n\n");
    }

    /// Bullet lines for `containers` and everything below them, pre-order.
    fn push_containers(&self, output: &mut String, containers: &[Container], depth: usize) {
        let mut stack: Vec<(&Container, usize)> =
            containers.iter().rev().map(|c| (c, depth)).collect();

        while let Some((container, depth)) = stack.pop() {
            push_indent(output, depth);
            output.push_str("- !");
            output.push_str(&container.name);
            output.push('\n');

            if self.config.hide_leaf_files && container.sub_containers.is_empty() {
                continue;
            }

            push_files(output, &container.files, depth + 1);
            stack.extend(
                container
                    .sub_containers
                    .iter()
                    .rev()
                    .map(|sub| (sub, depth + 1)),
            );
        }
    }
}

fn push_header(output: &mut String, meta: &OutlineMetadata) {
    output.push_str("---\n");
    output.push_str(&format!("title: {}\n", meta.title));
    output.push_str(&format!("date created: {}\n", meta.created));
    output.push_str(&format!("date updated: {}\n", meta.updated));
    output.push_str("---\n\n");

    output.push_str("# System Info:\n\n");
    output.push_str(&format!("> UserDomainName: {}.\n", meta.system.domain));
    output.push_str(&format!("> UserName: {}.\n", meta.system.user));
    output.push_str(&format!("> Version: {}.\n", meta.system.version));
    output.push('\n');
}

fn push_keywords(output: &mut String, meta: &OutlineMetadata) {
    output.push_str("`**keywords:**`\n\n");
    for tag in FIXED_TAGS {
        output.push('#');
        output.push_str(tag);
        output.push('\n');
    }
    output.push('#');
    output.push_str(&meta.tag);
    output.push_str("\n\n");
}

fn push_files(output: &mut String, files: &[File], depth: usize) {
    for file in files {
        push_indent(output, depth);
        output.push_str("- `");
        output.push_str(&file.name);
        output.push_str("`\n");
    }
}

fn push_indent(output: &mut String, depth: usize) {
    output.extend(std::iter::repeat_n('\t', depth));
}
