use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{SiteError, SiteResult};

/// Check whether a file or directory name is hidden (dot-prefixed)
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| SiteError::io(path, e))
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    let path = path.as_ref();
    if path.is_dir() {
        fs::remove_dir_all(path).map_err(|e| SiteError::io(path, e))?;
    }
    Ok(())
}

/// Read a whole file as raw bytes
pub fn read_bytes<P: AsRef<Path>>(path: P) -> SiteResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| SiteError::io(path, e))
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> SiteResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        create_directory(parent)?;
    }
    fs::write(path, contents.as_bytes()).map_err(|e| SiteError::io(path, e))
}

/// Copy every non-hidden file under `source` into `destination`, keeping
/// relative paths. Returns the number of files copied.
pub fn copy_tree(source: &Path, destination: &Path) -> SiteResult<usize> {
    let mut copied = 0;

    let walker = WalkDir::new(source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(&e.file_name().to_string_lossy()));

    for entry in walker {
        let entry = entry.map_err(|e| SiteError::walk(source, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(source).unwrap_or(path);
        let target = destination.join(relative);

        if let Some(parent) = target.parent() {
            create_directory(parent)?;
        }
        fs::copy(path, &target).map_err(|e| SiteError::io(path, e))?;
        debug!("Copied asset: {} -> {}", path.display(), target.display());
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a/b/index.html");

        write_file(&target, "<p>hi</p>").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_copy_tree_skips_hidden_entries() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        write_file(src.path().join("css/site.css"), "body{}").unwrap();
        write_file(src.path().join(".cache/blob"), "x").unwrap();
        write_file(src.path().join(".DS_Store"), "x").unwrap();

        let copied = copy_tree(src.path(), dst.path()).unwrap();

        assert_eq!(copied, 1);
        assert!(dst.path().join("css/site.css").is_file());
        assert!(!dst.path().join(".cache").exists());
        assert!(!dst.path().join(".DS_Store").exists());
    }

    #[test]
    fn test_read_missing_file_is_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let err = read_bytes(dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, SiteError::FileSystem { .. }));
    }
}
