//! Output types of tool generation.
//!
//! # Examples
//!
//! ```
//! use scaffold_codegen::{GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile::new("swot.scss", "#a {\n\t\n}"));
//!
//! assert_eq!(code.file_count(), 1);
//! assert!(code.get("swot.scss").is_some());
//! ```

use crate::template::TemplateName;
use serde::Serialize;
use std::fmt;

/// Generated files of one tool, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedCode {
    /// Generated files with paths relative to the tool folder
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates an empty file set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a generated file.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the generated files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Looks up a file by its relative path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }
}

/// A single generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Path relative to the tool folder, `/`-separated
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Creates a generated file.
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A template that could not be read under the continue policy, with every
/// output skipped because of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationWarning {
    /// Template that could not be read
    pub template: TemplateName,
    /// Relative paths of the skipped outputs, in generation order
    pub outputs: Vec<String>,
    /// Human-readable cause
    pub message: String,
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, skipped {}", self.message, self.outputs.join(", "))
    }
}

/// Result of a generation run: the files produced and what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationOutcome {
    /// Files ready to be exported
    pub code: GeneratedCode,
    /// One entry per unavailable template
    pub warnings: Vec<GenerationWarning>,
}

impl GenerationOutcome {
    /// Returns `true` if every output was produced.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}
