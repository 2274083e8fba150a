//! Generate command implementation.
//!
//! A run:
//! 1. Resolves settings and checks the output and template directories
//! 2. Asks for the steps and the export option
//! 3. Renders every file into a virtual filesystem
//! 4. Writes the filesystem below the output directory
//! 5. Reports what was written and what was skipped

use crate::config::Settings;
use crate::formatters::format_report;
use crate::prompt::{DialoguerPrompt, ToolPrompt, collect_tool_spec};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use scaffold_codegen::{GenerationWarning, ToolGenerator};
use scaffold_core::cli::{ExitCode, OutputFormat};
use scaffold_core::{Error, FailurePolicy, GeneratorConfig, ToolName, ToolSpec};
use scaffold_vfs::{ExportReport, Vfs, VfsBuilder, VfsError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line input for a run.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Tool name, used for the folder and the stylesheet
    pub name: ToolName,
    /// Human-readable tool title
    pub display_name: String,
    /// Start the tool in maintenance mode
    pub maintenance: bool,
    /// Output directory override
    pub path: Option<PathBuf>,
    /// Template directory override
    pub templates: Option<PathBuf>,
    /// Failure policy override
    pub on_error: Option<FailurePolicy>,
    /// Report format override
    pub format: Option<OutputFormat>,
    /// Settings file
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Creates arguments with no overrides.
    #[must_use]
    pub fn new(name: ToolName, display_name: impl Into<String>) -> Self {
        Self {
            name,
            display_name: display_name.into(),
            maintenance: false,
            path: None,
            templates: None,
            on_error: None,
            format: None,
            config: None,
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Tool name as entered
    pub tool: String,
    /// PascalCase tool name
    pub pascal_name: String,
    /// Folder the tool was written to
    pub folder: PathBuf,
    /// Written files, relative to `folder`
    pub files: Vec<String>,
    /// Skipped outputs and failed writes
    pub warnings: Vec<String>,
    /// When the run finished
    pub generated_at: DateTime<Utc>,
}

impl GenerationReport {
    fn new(
        spec: &ToolSpec,
        folder: PathBuf,
        skipped: &[GenerationWarning],
        export: &ExportReport,
    ) -> Self {
        let files = export
            .written
            .iter()
            .map(|path| relative_display(path, &folder))
            .collect();
        let warnings = skipped
            .iter()
            .map(ToString::to_string)
            .chain(export.failures.iter().map(|failure| {
                format!("failed to write {}: {}", failure.path.display(), failure.message)
            }))
            .collect();

        Self {
            tool: spec.name().to_string(),
            pascal_name: spec.name().pascal_case().to_string(),
            folder,
            files,
            warnings,
            generated_at: Utc::now(),
        }
    }

    /// Returns `true` if nothing was skipped or failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns the process exit code for this run.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_complete() {
            ExitCode::SUCCESS
        } else {
            ExitCode::PARTIAL_OUTPUT
        }
    }
}

/// Rendered files waiting to be written.
#[derive(Debug)]
pub struct PendingExport {
    spec: ToolSpec,
    config: GeneratorConfig,
    vfs: Vfs,
    skipped: Vec<GenerationWarning>,
}

impl PendingExport {
    /// Returns the collected tool description.
    #[must_use]
    pub const fn spec(&self) -> &ToolSpec {
        &self.spec
    }

    /// Returns the rendered files.
    #[must_use]
    pub const fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    /// Writes the files and builds the report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutputFailed`] on the first failed write under the
    /// abort policy.
    pub async fn export(self) -> Result<GenerationReport> {
        let root = &self.config.output_root;
        let export = self
            .vfs
            .export_to(root, self.config.failure_policy)
            .await
            .map_err(output_error)?;

        let folder = root.join(self.spec.name().as_str());
        info!(
            "Wrote {} file(s) to {}",
            export.written.len(),
            folder.display()
        );
        Ok(GenerationReport::new(
            &self.spec,
            folder,
            &self.skipped,
            &export,
        ))
    }
}

/// Runs the generate command against the terminal.
///
/// # Errors
///
/// Returns an error if settings are invalid, the terminal fails, or the
/// run is aborted.
pub async fn run(args: &GenerateArgs) -> Result<ExitCode> {
    let settings = Settings::load(args.config.as_deref())?;
    let format = settings.output_format(args.format);

    let pending = prepare(args, &settings, &DialoguerPrompt::new())?;
    let report = pending.export().await?;

    println!("{}", format_report(&report, format)?);
    Ok(report.exit_code())
}

/// Collects the tool description and renders its files.
///
/// Directories are checked before the first question so that a bad
/// path never costs the user a full round of answers.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the output or template directory
/// does not exist, any error from `prompt`, and generation errors.
pub fn prepare(
    args: &GenerateArgs,
    settings: &Settings,
    prompt: &dyn ToolPrompt,
) -> Result<PendingExport> {
    let config = settings.generator_config(
        args.path.clone(),
        args.templates.clone(),
        args.on_error,
    );
    require_dir(&config.output_root, "output path")?;
    if let Some(dir) = &config.template_dir {
        require_dir(dir, "template directory")?;
    }

    let spec = collect_tool_spec(
        prompt,
        args.name.clone(),
        args.display_name.as_str(),
        args.maintenance,
    )?;

    let generator = ToolGenerator::from_config(&config)?;
    let outcome = generator
        .generate(&spec)
        .with_context(|| format!("failed to generate {}", spec.name()))?;

    let vfs = VfsBuilder::from_generated_code(outcome.code, &format!("/{}", spec.name())).build()?;

    Ok(PendingExport {
        spec,
        config,
        vfs,
        skipped: outcome.warnings,
    })
}

fn require_dir(path: &Path, what: &str) -> Result<(), Error> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "{what} '{}' is not an existing directory",
            path.display()
        )))
    }
}

fn output_error(err: VfsError) -> anyhow::Error {
    match err {
        VfsError::ExportFailed { path, message } => Error::OutputFailed {
            path: path.into(),
            message,
        }
        .into(),
        VfsError::ExportRootMissing { path } => {
            Error::InvalidArgument(format!("output path '{path}' is not an existing directory")).into()
        }
        other => other.into(),
    }
}

fn relative_display(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).map_or_else(
        |_| path.display().to_string(),
        |relative| {
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        },
    )
}
