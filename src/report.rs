//! A complete run: walk every root, then write the notes to disk

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::info;

use crate::error::{Error, Result, WalkError};
use crate::output::{OutlineMetadata, OutlineMode, OutlineRenderer, json, render_error_log};
use crate::tree::{DirSource, Forest, TreeWalker};

/// Timestamp format used in output file names (year-day-month-hour-minute).
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%d-%-m-%H-%M";

/// Everything one run collected.
#[derive(Debug, Default)]
pub struct Inventory {
    /// One container per accepted root, in the order given.
    pub forest: Forest,
    /// Non-fatal listing errors, in the order they occurred.
    pub errors: Vec<WalkError>,
    /// Roots that were not existing directories and were skipped.
    pub rejected: Vec<PathBuf>,
}

impl Inventory {
    /// Walk every root that is an existing directory.
    pub fn collect<S, P>(walker: &TreeWalker<S>, roots: &[P]) -> Self
    where
        S: DirSource,
        P: AsRef<Path>,
    {
        let mut inventory = Inventory::default();
        for root in roots {
            let root = root.as_ref();
            if !walker.source().is_dir(root) {
                inventory.rejected.push(root.to_path_buf());
                continue;
            }
            info!("Walking '{}'", root.display());
            let container = walker.build(root, &mut inventory.errors);
            inventory.forest.push(container);
        }
        inventory
    }

    pub fn dir_count(&self) -> usize {
        self.forest.iter().map(|root| 1 + root.dir_count()).sum()
    }

    pub fn file_count(&self) -> usize {
        self.forest.iter().map(|root| root.file_count()).sum()
    }
}

/// Format the timestamp that ties one run's output files together.
pub fn run_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format(FILE_TIMESTAMP_FORMAT).to_string()
}

/// `<kind>[-<scope>]-<timestamp>.<ext>`
pub fn report_file_name(kind: &str, scope: Option<&str>, timestamp: &str, ext: &str) -> String {
    match scope.map(sanitize_scope).filter(|s| !s.is_empty()) {
        Some(scope) => format!("{}-{}-{}.{}", kind, scope, timestamp, ext),
        None => format!("{}-{}.{}", kind, timestamp, ext),
    }
}

fn sanitize_scope(scope: &str) -> String {
    scope
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect()
}

/// Writes a run's error log, structured export and outline notes.
pub struct ReportWriter {
    out_dir: PathBuf,
    timestamp: String,
    renderer: OutlineRenderer,
    mode: OutlineMode,
}

impl ReportWriter {
    pub fn new(
        out_dir: impl Into<PathBuf>,
        timestamp: impl Into<String>,
        renderer: OutlineRenderer,
        mode: OutlineMode,
    ) -> Self {
        Self {
            out_dir: out_dir.into(),
            timestamp: timestamp.into(),
            renderer,
            mode,
        }
    }

    /// Write every output file and return their paths in write order.
    ///
    /// Files are written even when the forest is empty.
    pub fn write(&self, inventory: &Inventory, meta: &OutlineMetadata) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        let log = render_error_log(&inventory.errors);
        written.push(self.write_file("errors", None, "md", &log)?);

        let export = json::export(&inventory.forest)?;
        written.push(self.write_file("notes", None, "json", &export)?);

        let domain = meta.system.domain.to_lowercase();
        match self.mode {
            OutlineMode::Combined => {
                let doc = self.renderer.render(&inventory.forest, meta);
                written.push(self.write_file("notes", Some(&domain), "md", &doc)?);
            }
            OutlineMode::PerRoot => {
                let mut used = HashSet::new();
                for root in &inventory.forest {
                    let doc = self.renderer.render_root(root, meta);
                    let base = format!("{}-{}", domain, root.name);
                    let scope = self.unique_scope(&base, &mut used);
                    written.push(self.write_file("notes", Some(&scope), "md", &doc)?);
                }
            }
        }

        Ok(written)
    }

    /// Roots with the same name (`/x/docs`, `/y/docs`) get `-2`, `-3`, ...
    /// appended so no document overwrites another from the same run.
    fn unique_scope(&self, base: &str, used: &mut HashSet<String>) -> String {
        let mut scope = base.to_string();
        let mut n = 1;
        while !used.insert(report_file_name("notes", Some(&scope), &self.timestamp, "md")) {
            n += 1;
            scope = format!("{}-{}", base, n);
        }
        scope
    }

    fn write_file(
        &self,
        kind: &str,
        scope: Option<&str>,
        ext: &str,
        contents: &str,
    ) -> Result<PathBuf> {
        let path = self
            .out_dir
            .join(report_file_name(kind, scope, &self.timestamp, ext));
        fs::write(&path, contents).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        info!("Wrote '{}'", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::output::OutlineConfig;
    use crate::system::SystemInfo;
    use crate::test_utils::MemorySource;
    use crate::tree::WalkerConfig;

    fn meta() -> OutlineMetadata {
        OutlineMetadata {
            title: "box-explorer".to_string(),
            created: "2026-3-05 07:08".to_string(),
            updated: "2026-3-05 07:08".to_string(),
            system: SystemInfo::new("Box", "eve", "0.1.0"),
            tag: "Box".to_string(),
        }
    }

    fn walker(source: MemorySource) -> TreeWalker<MemorySource> {
        TreeWalker::new(WalkerConfig::default()).with_source(source)
    }

    #[test]
    fn test_run_timestamp_is_year_day_month_hour_minute() {
        let now = NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(7, 8, 0)
            .unwrap()
            .and_utc();
        assert_eq!(run_timestamp(&now), "2026-05-3-07-08");
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name("errors", None, "2026-05-3-07-08", "md"),
            "errors-2026-05-3-07-08.md"
        );
        assert_eq!(
            report_file_name("notes", Some("box"), "T", "md"),
            "notes-box-T.md"
        );
        assert_eq!(
            report_file_name("notes", Some("box-C:\\"), "T", "md"),
            "notes-box-C__-T.md"
        );
        assert_eq!(report_file_name("notes", Some(""), "T", "json"), "notes-T.json");
    }

    #[test]
    fn test_collect_rejects_missing_roots() {
        let source = MemorySource::new().file("/a/x.pdf").file("/b/y.pdf");
        let inventory = Inventory::collect(&walker(source), &["/a", "/missing", "/b"]);

        let names: Vec<_> = inventory.forest.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(inventory.rejected, vec![PathBuf::from("/missing")]);
        assert!(inventory.errors.is_empty());
        assert_eq!(inventory.file_count(), 2);
        assert_eq!(inventory.dir_count(), 2);
    }

    #[test]
    fn test_collect_shares_one_error_log() {
        let source = MemorySource::new()
            .dir("/a/locked")
            .dir("/b/locked")
            .unreadable("/a/locked", io::ErrorKind::PermissionDenied)
            .unreadable("/b/locked", io::ErrorKind::PermissionDenied);
        let inventory = Inventory::collect(&walker(source), &["/a", "/b"]);

        let paths: Vec<_> = inventory.errors.iter().map(|e| e.path().clone()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("/a/locked"), PathBuf::from("/b/locked")]
        );
    }

    #[test]
    fn test_write_combined() {
        let out = TempDir::new().unwrap();
        let source = MemorySource::new()
            .file("/a/x.pdf")
            .dir("/a/locked")
            .unreadable("/a/locked", io::ErrorKind::PermissionDenied);
        let inventory = Inventory::collect(&walker(source), &["/a"]);
        let writer = ReportWriter::new(
            out.path(),
            "T",
            OutlineRenderer::new(OutlineConfig::default()),
            OutlineMode::Combined,
        );

        let written = writer.write(&inventory, &meta()).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["errors-T.md", "notes-T.json", "notes-box-T.md"]);

        let log = fs::read_to_string(&written[0]).unwrap();
        assert_eq!(log.lines().count(), 1);
        assert!(log.contains("/a/locked"));

        let parsed = json::parse(&fs::read_to_string(&written[1]).unwrap()).unwrap();
        assert_eq!(parsed, inventory.forest);

        let doc = fs::read_to_string(&written[2]).unwrap();
        assert!(doc.contains("### ==a=="));
        assert!(doc.contains("- `x.pdf`"));
    }

    #[test]
    fn test_write_per_root() {
        let out = TempDir::new().unwrap();
        let source = MemorySource::new().file("/a/x.pdf").file("/b/y.pdf");
        let inventory = Inventory::collect(&walker(source), &["/a", "/b"]);
        let writer = ReportWriter::new(
            out.path(),
            "T",
            OutlineRenderer::new(OutlineConfig::default()),
            OutlineMode::PerRoot,
        );

        let written = writer.write(&inventory, &meta()).unwrap();
        assert_eq!(written.len(), 4);
        let b_doc = fs::read_to_string(out.path().join("notes-box-b-T.md")).unwrap();
        assert!(b_doc.contains("y.pdf"));
        assert!(!b_doc.contains("x.pdf"));
        assert!(out.path().join("notes-box-a-T.md").exists());
    }

    #[test]
    fn test_write_per_root_same_names() {
        let out = TempDir::new().unwrap();
        let source = MemorySource::new()
            .file("/x/docs/first.pdf")
            .file("/y/docs/second.pdf")
            .file("/z/docs-2/third.pdf");
        let roots = ["/x/docs", "/y/docs", "/z/docs-2"];
        let inventory = Inventory::collect(&walker(source), &roots);
        let writer = ReportWriter::new(
            out.path(),
            "T",
            OutlineRenderer::new(OutlineConfig::default()),
            OutlineMode::PerRoot,
        );

        let written = writer.write(&inventory, &meta()).unwrap();
        let names: Vec<_> = written[2..]
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["notes-box-docs-T.md", "notes-box-docs-2-T.md", "notes-box-docs-2-2-T.md"]
        );

        let first = fs::read_to_string(&written[2]).unwrap();
        let second = fs::read_to_string(&written[3]).unwrap();
        let third = fs::read_to_string(&written[4]).unwrap();
        assert!(first.contains("first.pdf") && !first.contains("second.pdf"));
        assert!(second.contains("second.pdf") && !second.contains("first.pdf"));
        assert!(third.contains("third.pdf"));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 5);
    }

    #[test]
    fn test_write_empty_inventory() {
        let out = TempDir::new().unwrap();
        let writer = ReportWriter::new(
            out.path(),
            "T",
            OutlineRenderer::new(OutlineConfig::default()),
            OutlineMode::Combined,
        );

        let written = writer.write(&Inventory::default(), &meta()).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(fs::read_to_string(&written[0]).unwrap(), "");
        assert_eq!(fs::read_to_string(&written[1]).unwrap(), "[]");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let out = TempDir::new().unwrap();
        let writer = ReportWriter::new(
            out.path().join("nope"),
            "T",
            OutlineRenderer::new(OutlineConfig::default()),
            OutlineMode::Combined,
        );
        let err = writer.write(&Inventory::default(), &meta()).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
