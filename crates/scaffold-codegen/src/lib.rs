//! Code generation for scaffolded tools.
//!
//! Turns a collected [`scaffold_core::ToolSpec`] into the source files of a
//! new tool by substituting placeholder tokens in a fixed set of text
//! templates.
//!
//! # Architecture
//!
//! - [`Placeholder`]: the token table shared with the template files
//! - [`TemplateSource`]: reads templates by name ([`EmbeddedTemplates`],
//!   [`DirectoryTemplates`])
//! - [`TemplateEngine`]: single-pass, non-recursive substitution
//! - [`fragments`]: bindings and optional fragments assembled from a `ToolSpec`
//! - [`ToolGenerator`]: renders every output into a [`GeneratedCode`] set
//!
//! # Examples
//!
//! ```
//! use scaffold_codegen::ToolGenerator;
//! use scaffold_core::{StepId, ToolName, ToolSpec};
//!
//! let spec = ToolSpec::builder(ToolName::new("swot-analysis")?, "SWOT-Analyse")
//!     .step(StepId::new("matrix")?, "Matrix", true, None)?
//!     .build();
//!
//! let outcome = ToolGenerator::embedded()?.generate(&spec)?;
//! let step = outcome.code.get("steps/Matrix/Matrix.ts").unwrap();
//! assert!(step.content().contains("SubStepDefinition"));
//! # Ok::<(), scaffold_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod fragments;
pub mod generator;
pub mod placeholder;
pub mod template;
pub mod template_engine;
pub mod types;

pub use fragments::{
    ExcelExportParts, StepFeatureFragments, StepListings, ToolFileFragments, global_replacements,
    step_replacements,
};
pub use generator::ToolGenerator;
pub use placeholder::Placeholder;
pub use template::{DirectoryTemplates, EmbeddedTemplates, Template, TemplateName, TemplateSource};
pub use template_engine::{Replacements, TemplateEngine};
pub use types::{GeneratedCode, GeneratedFile, GenerationOutcome, GenerationWarning};
