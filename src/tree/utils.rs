//! Shared naming helpers for tree walking

use std::path::Path;

/// Display name of a directory.
///
/// The last path segment. A drive root such as `C:\` has no segment of its
/// own, so the text before the first `:` is used instead (`C`). Anything else
/// without a final segment (`/`, `..`) keeps the path as supplied.
pub fn container_name(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim_end_matches(['/', '\\']);
    // Paths are split on both separators so Windows-style roots behave the
    // same on every platform.
    let last = trimmed.rsplit(['/', '\\']).next().unwrap_or_default();

    if let Some(drive) = bare_drive(last) {
        return drive.to_string();
    }
    if last.is_empty() || last == "." || last == ".." {
        return raw.into_owned();
    }
    last.to_string()
}

/// `C` for a segment that is only a drive designator such as `C:`.
fn bare_drive(segment: &str) -> Option<&str> {
    let drive = segment.strip_suffix(':')?;
    if drive.is_empty() || drive.contains(':') {
        None
    } else {
        Some(drive)
    }
}

/// Extension of a file name, leading dot included and case preserved.
///
/// Everything from the last `.` on. A name without a dot, or one that ends
/// in a dot, has no extension. A dot-file such as `.hidden` is all extension.
pub fn file_extension(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => Some(&name[idx..]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_name_last_segment() {
        assert_eq!(container_name(Path::new("/data/sub")), "sub");
        assert_eq!(container_name(Path::new("/data/sub/")), "sub");
        assert_eq!(container_name(Path::new("relative/dir")), "dir");
        assert_eq!(container_name(Path::new("relative")), "relative");
    }

    #[test]
    fn test_container_name_drive_root() {
        assert_eq!(container_name(Path::new("C:\\")), "C");
        assert_eq!(container_name(Path::new("d:")), "d");
    }

    #[test]
    fn test_container_name_windows_segment() {
        assert_eq!(container_name(Path::new("C:\\Users\\me")), "me");
    }

    #[test]
    fn test_container_name_keeps_colon_in_segment() {
        assert_eq!(container_name(Path::new("/data/backup:2024")), "backup:2024");
        assert_eq!(container_name(Path::new("/data/backup:2024/")), "backup:2024");
        assert_eq!(container_name(Path::new("C:\\photos:raw")), "photos:raw");
    }

    #[test]
    fn test_container_name_unix_root() {
        assert_eq!(container_name(Path::new("/")), "/");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("a.pdf"), Some(".pdf"));
        assert_eq!(file_extension("archive.tar.gz"), Some(".gz"));
        assert_eq!(file_extension("Report.DOCX"), Some(".DOCX"));
        assert_eq!(file_extension(".hidden"), Some(".hidden"));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension("trailing."), None);
    }
}
