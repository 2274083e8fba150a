//! In-memory file set.
//!
//! # Examples
//!
//! ```
//! use scaffold_vfs::Vfs;
//!
//! let mut vfs = Vfs::new();
//! vfs.add_file("/swot/Swot.tsx", "class Swot {}").unwrap();
//!
//! assert!(vfs.exists("/swot/Swot.tsx"));
//! assert!(vfs.dir_exists("/swot"));
//! ```

use crate::types::{Result, VfsFile, VfsPath};
use std::collections::BTreeMap;
use std::path::Path;

/// An in-memory filesystem holding the generated files of a run.
///
/// Files are kept sorted by path. Directories are implicit: they exist
/// exactly when a file lies below them.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`.
#[derive(Debug, Clone, Default)]
pub struct Vfs {
    files: BTreeMap<VfsPath, VfsFile>,
}

impl Vfs {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, replacing any file already at that path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid (not absolute, contains '..').
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Result<()> {
        let vfs_path = VfsPath::new(path)?;
        self.files.insert(vfs_path, VfsFile::new(content));
        Ok(())
    }

    /// Checks if a file exists at the given path.
    ///
    /// Returns `false` if the path is invalid.
    #[must_use]
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        VfsPath::new(path)
            .ok()
            .is_some_and(|p| self.files.contains_key(&p))
    }

    /// Returns `true` if any file lies below `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_vfs::Vfs;
    ///
    /// let mut vfs = Vfs::new();
    /// vfs.add_file("/swot/steps/A/A.ts", "").unwrap();
    ///
    /// assert!(vfs.dir_exists("/swot/steps"));
    /// assert!(!vfs.dir_exists("/swot/export"));
    /// ```
    #[must_use]
    pub fn dir_exists(&self, path: impl AsRef<Path>) -> bool {
        let Ok(dir) = VfsPath::new(path) else {
            return false;
        };
        let prefix = if dir.as_str().ends_with('/') {
            dir.as_str().to_string()
        } else {
            format!("{}/", dir.as_str())
        };
        self.files.keys().any(|p| p.as_str().starts_with(&prefix))
    }

    /// Returns the number of files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Iterates over files in path order.
    pub fn files(&self) -> impl Iterator<Item = (&VfsPath, &VfsFile)> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vfs_new() {
        let vfs = Vfs::new();
        assert_eq!(vfs.file_count(), 0);
    }

    fn content<'a>(vfs: &'a Vfs, path: &str) -> Option<&'a str> {
        vfs.files()
            .find(|(p, _)| p.as_str() == path)
            .map(|(_, file)| file.content())
    }

    #[test]
    fn test_add_file() {
        let mut vfs = Vfs::new();
        vfs.add_file("/tool/Tool.tsx", "hello world").unwrap();
        assert_eq!(content(&vfs, "/tool/Tool.tsx"), Some("hello world"));
        assert_eq!(vfs.file_count(), 1);
    }

    #[test]
    fn test_add_file_invalid_path() {
        let mut vfs = Vfs::new();
        assert!(vfs.add_file("relative/path", "content").is_err());
        assert!(vfs.add_file("/tool/../x", "content").is_err());
    }

    #[test]
    fn test_exists() {
        let mut vfs = Vfs::new();
        vfs.add_file("/exists.ts", "").unwrap();

        assert!(vfs.exists("/exists.ts"));
        assert!(!vfs.exists("/missing.ts"));
        assert!(!vfs.exists("relative/path"));
    }

    #[test]
    fn test_dir_exists_requires_a_file_below() {
        let mut vfs = Vfs::new();
        vfs.add_file("/tool/extraWindow-notes.txt", "").unwrap();

        assert!(vfs.dir_exists("/tool"));
        assert!(!vfs.dir_exists("/tool/extraWindow"));
    }

    #[test]
    fn test_files_sorted_by_path() {
        let mut vfs = Vfs::new();
        vfs.add_file("/b.ts", "").unwrap();
        vfs.add_file("/a.ts", "").unwrap();

        let paths: Vec<_> = vfs.files().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["/a.ts", "/b.ts"]);
    }

    #[test]
    fn test_replace_file() {
        let mut vfs = Vfs::new();
        vfs.add_file("/test.ts", "original").unwrap();
        vfs.add_file("/test.ts", "updated").unwrap();

        assert_eq!(content(&vfs, "/test.ts"), Some("updated"));
        assert_eq!(vfs.file_count(), 1);
    }

    #[test]
    fn test_vfs_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vfs>();
    }
}
