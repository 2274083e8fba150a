//! `create-tool` library.
//!
//! Exposes the command, settings, prompting and formatting layers of the
//! binary so they can be tested without a terminal.

pub mod commands;
pub mod config;
pub mod formatters;
pub mod prompt;

pub use commands::generate::{GenerateArgs, GenerationReport, PendingExport};
pub use config::Settings;
pub use prompt::{DialoguerPrompt, ScriptedPrompt, ToolPrompt, collect_tool_spec};
