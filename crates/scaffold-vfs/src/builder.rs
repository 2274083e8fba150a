//! Builder for virtual filesystems.
//!
//! # Examples
//!
//! ```
//! use scaffold_vfs::VfsBuilder;
//!
//! let vfs = VfsBuilder::new()
//!     .add_file("/swot/swot.scss", "")
//!     .add_file("/swot/Swot.tsx", "class Swot {}")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(vfs.file_count(), 2);
//! ```

use crate::types::{Result, VfsError};
use crate::vfs::Vfs;
use scaffold_codegen::GeneratedCode;
use std::path::Path;

/// Builder collecting files into a [`Vfs`].
///
/// Invalid paths are collected and reported by [`VfsBuilder::build`].
///
/// # Examples
///
/// ```
/// use scaffold_codegen::{GeneratedCode, GeneratedFile};
/// use scaffold_vfs::VfsBuilder;
///
/// let mut code = GeneratedCode::new();
/// code.add_file(GeneratedFile::new("steps/A/A.ts", "export class A {}"));
///
/// let vfs = VfsBuilder::from_generated_code(code, "/swot")
///     .build()
///     .unwrap();
///
/// assert!(vfs.exists("/swot/steps/A/A.ts"));
/// ```
#[derive(Debug, Default)]
pub struct VfsBuilder {
    vfs: Vfs,
    errors: Vec<VfsError>,
}

impl VfsBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder holding every generated file under `base_path`.
    ///
    /// `base_path` is an absolute VFS path such as `/<tool-name>`.
    #[must_use]
    pub fn from_generated_code(code: GeneratedCode, base_path: &str) -> Self {
        let base = base_path.trim_end_matches('/');
        code.files.into_iter().fold(Self::new(), |builder, file| {
            let full_path = format!("{base}/{}", file.path);
            builder.add_file(full_path, file.content)
        })
    }

    /// Adds a file to the VFS being built.
    #[must_use]
    pub fn add_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Err(e) = self.vfs.add_file(path, content) {
            self.errors.push(e);
        }
        self
    }

    /// Returns the number of files added so far.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.vfs.file_count()
    }

    /// Consumes the builder and returns the filesystem.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while adding files.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_vfs::VfsBuilder;
    ///
    /// let result = VfsBuilder::new()
    ///     .add_file("invalid/relative/path", "content")
    ///     .build();
    ///
    /// assert!(result.is_err());
    /// ```
    pub fn build(self) -> Result<Vfs> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        Ok(self.vfs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_codegen::GeneratedFile;

    fn content<'a>(vfs: &'a Vfs, path: &str) -> Option<&'a str> {
        vfs.files()
            .find(|(p, _)| p.as_str() == path)
            .map(|(_, file)| file.content())
    }

    #[test]
    fn test_builder_new() {
        let vfs = VfsBuilder::new().build().unwrap();
        assert_eq!(vfs.file_count(), 0);
    }

    #[test]
    fn test_add_file() {
        let builder = VfsBuilder::new().add_file("/test.ts", "content");
        assert_eq!(builder.file_count(), 1);

        let vfs = builder.build().unwrap();
        assert_eq!(content(&vfs, "/test.ts"), Some("content"));
    }

    #[test]
    fn test_first_error_is_reported() {
        let err = VfsBuilder::new()
            .add_file("/ok.ts", "")
            .add_file("bad.ts", "")
            .add_file("/also/../bad.ts", "")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            VfsError::PathNotAbsolute {
                path: "bad.ts".to_string()
            }
        );
    }

    #[test]
    fn test_from_generated_code() {
        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile::new("swot-analysis.scss", ""));
        code.add_file(GeneratedFile::new("steps/Matrix/Matrix.ts", "m"));

        let vfs = VfsBuilder::from_generated_code(code, "/swot-analysis/")
            .build()
            .unwrap();

        assert!(vfs.exists("/swot-analysis/swot-analysis.scss"));
        assert_eq!(
            content(&vfs, "/swot-analysis/steps/Matrix/Matrix.ts"),
            Some("m")
        );
    }

    #[test]
    fn test_from_empty_generated_code() {
        let vfs = VfsBuilder::from_generated_code(GeneratedCode::new(), "/tool")
            .build()
            .unwrap();
        assert_eq!(vfs.file_count(), 0);
    }
}
