//! Core types for the virtual filesystem.
//!
//! # Examples
//!
//! ```
//! use scaffold_vfs::{VfsFile, VfsPath};
//!
//! let path = VfsPath::new("/swot-analysis/steps/Matrix/Matrix.ts").unwrap();
//! let file = VfsFile::new("export class Matrix {}");
//!
//! assert_eq!(path.relative(), "swot-analysis/steps/Matrix/Matrix.ts");
//! assert_eq!(file.content(), "export class Matrix {}");
//! ```

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during VFS operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    /// Path is empty or not valid UTF-8
    #[error("Invalid path: {path}")]
    InvalidPath {
        /// The invalid path
        path: String,
    },

    /// Path is not absolute (must start with '/')
    #[error("Path must be absolute: {path}")]
    PathNotAbsolute {
        /// The relative path
        path: String,
    },

    /// Path contains '..'
    #[error("Path contains invalid components: {path}")]
    InvalidPathComponent {
        /// The path with invalid components
        path: String,
    },

    /// Export target directory does not exist
    #[error("Export root does not exist: {path}")]
    ExportRootMissing {
        /// The missing directory
        path: String,
    },

    /// Writing a file to disk failed
    #[error("Failed to write {path}: {message}")]
    ExportFailed {
        /// Disk path of the file
        path: String,
        /// Underlying I/O error
        message: String,
    },
}

impl VfsError {
    /// Returns `true` if this is any kind of invalid path error.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_vfs::VfsError;
    ///
    /// let error = VfsError::PathNotAbsolute {
    ///     path: "relative.ts".to_string(),
    /// };
    ///
    /// assert!(error.is_invalid_path());
    /// ```
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            Self::InvalidPath { .. }
                | Self::PathNotAbsolute { .. }
                | Self::InvalidPathComponent { .. }
        )
    }

    /// Returns `true` if this error comes from writing to disk.
    #[must_use]
    pub const fn is_export_error(&self) -> bool {
        matches!(
            self,
            Self::ExportRootMissing { .. } | Self::ExportFailed { .. }
        )
    }
}

/// A validated virtual filesystem path.
///
/// Paths use Unix conventions on every platform: absolute (leading '/'),
/// '/'-separated, and free of '..'.
///
/// # Examples
///
/// ```
/// use scaffold_vfs::VfsPath;
///
/// assert!(VfsPath::new("/tool/Tool.tsx").is_ok());
/// assert!(VfsPath::new("relative/path").is_err());
/// assert!(VfsPath::new("/parent/../escape").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VfsPath(String);

impl VfsPath {
    /// Creates a new `VfsPath`.
    ///
    /// Windows separators are normalized to '/'.
    ///
    /// # Errors
    ///
    /// Returns `VfsError::PathNotAbsolute` if the path does not start with '/',
    /// `VfsError::InvalidPathComponent` if it contains '..', and
    /// `VfsError::InvalidPath` if it is empty or not UTF-8.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let path_str = path.to_str().ok_or_else(|| VfsError::InvalidPath {
            path: path.display().to_string(),
        })?;

        let normalized = if cfg!(target_os = "windows") {
            path_str.replace(std::path::MAIN_SEPARATOR, "/")
        } else {
            path_str.to_string()
        };

        if normalized.is_empty() {
            return Err(VfsError::InvalidPath {
                path: String::new(),
            });
        }

        if !normalized.starts_with('/') {
            return Err(VfsError::PathNotAbsolute { path: normalized });
        }

        if normalized.contains("..") {
            return Err(VfsError::InvalidPathComponent { path: normalized });
        }

        Ok(Self(normalized))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path without its leading '/', for joining onto a disk root.
    #[must_use]
    pub fn relative(&self) -> &str {
        self.0.trim_start_matches('/')
    }
}

impl fmt::Display for VfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content of a file in the virtual filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsFile {
    content: String,
}

impl VfsFile {
    /// Creates a file with the given content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the file content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Result type for VFS operations.
pub type Result<T> = std::result::Result<T, VfsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vfs_path_valid() {
        let path = VfsPath::new("/swot/steps/A/A.ts").unwrap();
        assert_eq!(path.as_str(), "/swot/steps/A/A.ts");
        assert_eq!(path.to_string(), "/swot/steps/A/A.ts");
        assert_eq!(path.relative(), "swot/steps/A/A.ts");
    }

    #[test]
    fn test_vfs_path_not_absolute() {
        let err = VfsPath::new("swot/A.ts").unwrap_err();
        assert!(matches!(err, VfsError::PathNotAbsolute { .. }));
        assert!(err.is_invalid_path());
    }

    #[test]
    fn test_vfs_path_parent_reference() {
        let err = VfsPath::new("/swot/../etc").unwrap_err();
        assert!(matches!(err, VfsError::InvalidPathComponent { .. }));
    }

    #[test]
    fn test_vfs_path_empty() {
        assert!(VfsPath::new("").unwrap_err().is_invalid_path());
    }

    #[test]
    fn test_vfs_file() {
        let file = VfsFile::new("abc");
        assert_eq!(file.content(), "abc");
        assert_eq!(VfsFile::new(String::new()).content(), "");
    }

    #[test]
    fn test_error_classification() {
        let export = VfsError::ExportFailed {
            path: "/tmp/x".to_string(),
            message: "denied".to_string(),
        };
        assert!(export.is_export_error());
        assert!(!export.is_invalid_path());
        assert_eq!(export.to_string(), "Failed to write /tmp/x: denied");

        let missing = VfsError::ExportRootMissing {
            path: "/nope".to_string(),
        };
        assert!(missing.is_export_error());
        assert!(!missing.is_invalid_path());
    }
}
