//! Output formatters for the generation report.
//!
//! Provides JSON, text, and pretty renderings of a [`GenerationReport`].

use crate::commands::generate::GenerationReport;
use anyhow::Result;
use colored::Colorize;
use scaffold_core::cli::OutputFormat;

/// Formats a report according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_report(report: &GenerationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(report),
        OutputFormat::Text => Ok(text::format(report)),
        OutputFormat::Pretty => Ok(pretty::format(report)),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{GenerationReport, Result};

    /// Formats the report as JSON with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format(report: &GenerationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Plain text output formatting.
///
/// One `key: value` line per field, then one line per file and warning.
/// Suitable for piping to other commands or scripts.
pub mod text {
    use super::GenerationReport;

    /// Formats the report as plain text.
    #[must_use]
    pub fn format(report: &GenerationReport) -> String {
        let mut lines = vec![
            format!("tool: {}", report.tool),
            format!("class: {}", report.pascal_name),
            format!("folder: {}", report.folder.display()),
            format!("generated_at: {}", report.generated_at.to_rfc3339()),
        ];
        lines.extend(report.files.iter().map(|file| format!("file: {file}")));
        lines.extend(
            report
                .warnings
                .iter()
                .map(|warning| format!("warning: {warning}")),
        );
        lines.join("\n")
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, GenerationReport};

    /// Formats the report with colors for terminal output.
    #[must_use]
    pub fn format(report: &GenerationReport) -> String {
        let headline = format!(
            "Created {} in {}",
            report.pascal_name,
            report.folder.display()
        );

        let mut result = if report.is_complete() {
            format!("{} {}", "✓".green().bold(), headline.bold())
        } else {
            format!(
                "{} {} {}",
                "!".yellow().bold(),
                headline.bold(),
                format!("({} warning(s))", report.warnings.len()).yellow()
            )
        };
        result.push('\n');

        for file in &report.files {
            result.push_str(&format!("  {} {file}\n", "+".green()));
        }
        for warning in &report.warnings {
            result.push_str(&format!("  {} {}\n", "⚠".yellow(), warning.yellow()));
        }

        let footer = format!(
            "{} file(s), {}",
            report.files.len(),
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        result.push_str(&footer.dimmed().to_string());
        result
    }
}
