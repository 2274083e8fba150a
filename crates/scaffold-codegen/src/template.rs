//! Template resources.
//!
//! Templates are plain text with placeholder markers. They are read by name
//! from a [`TemplateSource`]: either the set compiled into the binary or a
//! directory holding files with the same names.

use crate::placeholder::Placeholder;
use scaffold_core::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names of the template resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TemplateName {
    /// Main tool definition
    Tool,
    /// Step form component
    StepComponent,
    /// Step definition
    Step,
    /// Sub-step code inserted into step definitions
    SubStepCode,
    /// Extra window component
    ExtraWindow,
    /// JSON importer
    JsonImporter,
    /// Excel exporter
    ExcelExporter,
    /// Per-step Excel export method
    ExcelExportFunction,
    /// Per-step Excel export snippet
    ExcelExportSnippet,
}

impl TemplateName {
    /// Every template name.
    pub const ALL: [Self; 9] = [
        Self::Tool,
        Self::StepComponent,
        Self::Step,
        Self::SubStepCode,
        Self::ExtraWindow,
        Self::JsonImporter,
        Self::ExcelExporter,
        Self::ExcelExportFunction,
        Self::ExcelExportSnippet,
    ];

    /// File name of the template inside a template directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Tool => "template.txt",
            Self::StepComponent => "templateStepComponent.txt",
            Self::Step => "templateStep.txt",
            Self::SubStepCode => "templateSubstepCode.txt",
            Self::ExtraWindow => "templateExtraWindow.txt",
            Self::JsonImporter => "templateImport.txt",
            Self::ExcelExporter => "templateExcelExport.txt",
            Self::ExcelExportFunction => "excelExportFunction.txt",
            Self::ExcelExportSnippet => "excelExportCodeSnippet.txt",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A loaded template. Never modified after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: TemplateName,
    text: String,
}

impl Template {
    /// Wraps loaded template text.
    #[must_use]
    pub fn new(name: TemplateName, text: impl Into<String>) -> Self {
        Self {
            name,
            text: text.into(),
        }
    }

    /// Returns the template name.
    #[must_use]
    pub const fn name(&self) -> TemplateName {
        self.name
    }

    /// Returns the raw template text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the known placeholders that occur in the text.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_codegen::{Placeholder, Template, TemplateName};
    ///
    /// let template = Template::new(TemplateName::Tool, "class <EPHAFPJMNO> {}");
    /// assert_eq!(template.placeholders(), vec![Placeholder::NamePascal]);
    /// ```
    #[must_use]
    pub fn placeholders(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|p| self.text.contains(p.token()))
            .collect()
    }
}

/// Source of template text, addressed by name.
pub trait TemplateSource: fmt::Debug + Send + Sync {
    /// Reads the template with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateUnavailable`] if the template cannot be read.
    fn load(&self, name: TemplateName) -> Result<Template>;
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    const fn text(name: TemplateName) -> &'static str {
        match name {
            TemplateName::Tool => include_str!("../templates/template.txt"),
            TemplateName::StepComponent => include_str!("../templates/templateStepComponent.txt"),
            TemplateName::Step => include_str!("../templates/templateStep.txt"),
            TemplateName::SubStepCode => include_str!("../templates/templateSubstepCode.txt"),
            TemplateName::ExtraWindow => include_str!("../templates/templateExtraWindow.txt"),
            TemplateName::JsonImporter => include_str!("../templates/templateImport.txt"),
            TemplateName::ExcelExporter => include_str!("../templates/templateExcelExport.txt"),
            TemplateName::ExcelExportFunction => {
                include_str!("../templates/excelExportFunction.txt")
            }
            TemplateName::ExcelExportSnippet => {
                include_str!("../templates/excelExportCodeSnippet.txt")
            }
        }
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn load(&self, name: TemplateName) -> Result<Template> {
        Ok(Template::new(name, Self::text(name)))
    }
}

/// Templates read from files in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    /// Reads templates from `dir` using [`TemplateName::file_name`].
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the template directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TemplateSource for DirectoryTemplates {
    fn load(&self, name: TemplateName) -> Result<Template> {
        let path = self.dir.join(name.file_name());
        debug!("Reading template {}", path.display());
        let text = std::fs::read_to_string(&path).map_err(|source| Error::TemplateUnavailable {
            template: name.file_name().to_string(),
            source,
        })?;
        Ok(Template::new(name, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_names_are_unique() {
        let mut names: Vec<_> = TemplateName::ALL.iter().map(|n| n.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TemplateName::ALL.len());
    }

    #[test]
    fn test_embedded_templates_load() {
        for name in TemplateName::ALL {
            let template = EmbeddedTemplates.load(name).unwrap();
            assert_eq!(template.name(), name);
            assert!(!template.text().is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn test_embedded_tool_template_uses_global_placeholders() {
        let template = EmbeddedTemplates.load(TemplateName::Tool).unwrap();
        let used = template.placeholders();
        for expected in [
            Placeholder::Name,
            Placeholder::NamePascal,
            Placeholder::DisplayName,
            Placeholder::Maintenance,
            Placeholder::StepsCode,
            Placeholder::StepsImports,
        ] {
            assert!(used.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_directory_templates_read_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("template.txt"), "tool <GQGAKTYFMU>").unwrap();

        let source = DirectoryTemplates::new(dir.path());
        let template = source.load(TemplateName::Tool).unwrap();
        assert_eq!(template.text(), "tool <GQGAKTYFMU>");
        assert_eq!(source.dir(), dir.path());
    }

    #[test]
    fn test_directory_templates_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = DirectoryTemplates::new(dir.path());

        let err = source.load(TemplateName::Step).unwrap_err();
        assert!(err.is_template_unavailable());
        assert!(err.to_string().contains("templateStep.txt"));
    }
}
