//! Tool generator.
//!
//! Turns a [`ToolSpec`] into the complete set of files of a new tool. All
//! replacement fragments are assembled before any template is rendered, and
//! each output is rendered independently, so a template that cannot be read
//! only affects the outputs that need it.
//!
//! Generated paths are relative to the tool folder:
//!
//! ```text
//! <name>.scss
//! <Pascal>.tsx
//! steps/<P>/<P>Component.tsx
//! steps/<P>/<P>.ts
//! extraWindow/<P>ExtraWindow.tsx          (steps with an extra window)
//! extraWindow/<id>-extra-window.scss
//! import/<Pascal>JSONImporter.ts
//! export/<Pascal>ExcelExporter.ts         (with Excel export)
//! ```
//!
//! # Examples
//!
//! ```
//! use scaffold_codegen::ToolGenerator;
//! use scaffold_core::{StepId, ToolName, ToolSpec};
//!
//! let spec = ToolSpec::builder(ToolName::new("swot-analysis")?, "SWOT-Analyse")
//!     .step(StepId::new("criterias")?, "Kriterien", false, None)?
//!     .build();
//!
//! let outcome = ToolGenerator::embedded()?.generate(&spec)?;
//! assert!(outcome.code.get("SwotAnalysis.tsx").is_some());
//! assert!(outcome.code.get("steps/Criterias/CriteriasComponent.tsx").is_some());
//! # Ok::<(), scaffold_core::Error>(())
//! ```

use crate::fragments::{
    ExcelExportParts, StepFeatureFragments, StepListings, ToolFileFragments, extra_window_dom_id,
    global_replacements, step_replacements,
};
use crate::placeholder::Placeholder;
use crate::template::{DirectoryTemplates, EmbeddedTemplates, Template, TemplateName, TemplateSource};
use crate::template_engine::{Replacements, TemplateEngine};
use crate::types::{GeneratedFile, GenerationOutcome, GenerationWarning};
use scaffold_core::{FailurePolicy, GeneratorConfig, Result, StepSpec, ToolSpec};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, info, warn};

/// Generator for the files of a tool.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; a single generator can serve several
/// runs.
#[derive(Debug)]
pub struct ToolGenerator {
    source: Box<dyn TemplateSource>,
    engine: TemplateEngine,
    policy: FailurePolicy,
}

impl ToolGenerator {
    /// Creates a generator reading templates from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the substitution engine cannot be built.
    pub fn new(source: impl TemplateSource + 'static) -> Result<Self> {
        Ok(Self {
            source: Box::new(source),
            engine: TemplateEngine::new()?,
            policy: FailurePolicy::default(),
        })
    }

    /// Creates a generator using the templates compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the substitution engine cannot be built.
    pub fn embedded() -> Result<Self> {
        Self::new(EmbeddedTemplates)
    }

    /// Creates a generator from resolved run settings.
    ///
    /// Uses the configured template directory if there is one, the embedded
    /// templates otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the substitution engine cannot be built.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let generator = match &config.template_dir {
            Some(dir) => {
                debug!("Using templates from {}", dir.display());
                Self::new(DirectoryTemplates::new(dir))?
            }
            None => Self::embedded()?,
        };
        Ok(generator.with_failure_policy(config.failure_policy))
    }

    /// Sets how unavailable templates are handled.
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the active failure policy.
    #[must_use]
    pub const fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Generates every file of the tool described by `spec`.
    ///
    /// Under [`FailurePolicy::Continue`] an unavailable template skips the
    /// outputs that need it and records one warning listing them; everything
    /// else is still generated. Under [`FailurePolicy::Abort`] it fails the run.
    ///
    /// # Errors
    ///
    /// Returns [`scaffold_core::Error::TemplateUnavailable`] under the abort
    /// policy, and [`scaffold_core::Error::UnboundPlaceholder`] whenever a
    /// template uses a placeholder that has no value for it.
    pub fn generate(&self, spec: &ToolSpec) -> Result<GenerationOutcome> {
        info!(
            "Generating tool '{}' with {} step(s)",
            spec.name(),
            spec.steps().len()
        );

        let listings = StepListings::from_steps(spec.steps());
        let globals = global_replacements(spec, &listings);
        let mut run = Run::new(self);

        run.write(format!("{}.scss", spec.name()), listings.stylesheet.clone());
        run.emit_tool_file(spec, &globals)?;
        for step in spec.steps() {
            run.emit_step(spec, step, &globals)?;
        }
        run.emit(
            TemplateName::JsonImporter,
            format!("import/{}JSONImporter.ts", spec.name().pascal_case()),
            &globals,
        )?;
        if spec.use_excel_export() {
            run.emit_exporter(spec, &globals)?;
        }

        let outcome = run.finish();
        info!(
            "Generated {} file(s), {} skipped",
            outcome.code.file_count(),
            outcome.warnings.len()
        );
        Ok(outcome)
    }
}

/// State of one generation run.
struct Run<'g> {
    generator: &'g ToolGenerator,
    loaded: HashMap<TemplateName, std::result::Result<Template, String>>,
    outcome: GenerationOutcome,
}

impl<'g> Run<'g> {
    fn new(generator: &'g ToolGenerator) -> Self {
        Self {
            generator,
            loaded: HashMap::new(),
            outcome: GenerationOutcome::default(),
        }
    }

    fn finish(self) -> GenerationOutcome {
        self.outcome
    }

    /// Loads a template once per run.
    ///
    /// Returns `None` if it is unavailable under the continue policy, after
    /// recording that `output` was skipped.
    fn template(&mut self, name: TemplateName, output: &str) -> Result<Option<Template>> {
        let loaded = match self.loaded.entry(name) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let loaded = match self.generator.source.load(name) {
                    Ok(template) => Ok(template),
                    Err(err) if err.is_template_unavailable() && !self.generator.policy.is_abort() => {
                        Err(err.to_string())
                    }
                    Err(err) => return Err(err),
                };
                entry.insert(loaded).clone()
            }
        };

        match loaded {
            Ok(template) => Ok(Some(template)),
            Err(message) => {
                warn!("Skipping {output}: {message}");
                self.record_skip(name, output, message);
                Ok(None)
            }
        }
    }

    fn record_skip(&mut self, template: TemplateName, output: &str, message: String) {
        let warnings = &mut self.outcome.warnings;
        match warnings.iter_mut().find(|w| w.template == template) {
            Some(warning) => warning.outputs.push(output.to_string()),
            None => warnings.push(GenerationWarning {
                template,
                outputs: vec![output.to_string()],
                message,
            }),
        }
    }

    fn render(&self, template: &Template, bindings: &Replacements) -> Result<String> {
        self.generator.engine.render(template, bindings)
    }

    fn write(&mut self, path: String, content: String) {
        debug!("Generated {path}");
        self.outcome.code.add_file(GeneratedFile::new(path, content));
    }

    /// Renders `name` with `bindings` into `path`.
    fn emit(&mut self, name: TemplateName, path: String, bindings: &Replacements) -> Result<()> {
        if let Some(template) = self.template(name, &path)? {
            let content = self.render(&template, bindings)?;
            self.write(path, content);
        }
        Ok(())
    }

    fn emit_tool_file(&mut self, spec: &ToolSpec, globals: &Replacements) -> Result<()> {
        let mut bindings = globals.clone();
        ToolFileFragments::for_tool(spec).bind_into(&mut bindings);
        self.emit(
            TemplateName::Tool,
            format!("{}.tsx", spec.name().pascal_case()),
            &bindings,
        )
    }

    fn emit_step(&mut self, spec: &ToolSpec, step: &StepSpec, globals: &Replacements) -> Result<()> {
        let p = step.id_pascal();
        let mut bindings = globals.clone();
        bindings.extend(&step_replacements(step));

        self.emit(
            TemplateName::StepComponent,
            format!("steps/{p}/{p}Component.tsx"),
            &bindings,
        )?;

        let step_path = format!("steps/{p}/{p}.ts");
        let sub_step_code = if step.has_substeps() {
            match self.template(TemplateName::SubStepCode, &step_path)? {
                Some(template) => Some(self.render(&template, &bindings)?),
                None => None,
            }
        } else {
            Some(String::new())
        };
        if let Some(code) = sub_step_code {
            let mut step_bindings = bindings.clone();
            StepFeatureFragments::for_step(step, spec.name().pascal_case(), &code)
                .bind_into(&mut step_bindings);
            self.emit(TemplateName::Step, step_path, &step_bindings)?;
        }

        if step.extra_window().is_some() {
            let dom_id = extra_window_dom_id(step);
            let window_bindings = bindings.with(Placeholder::ExtraWindowId, dom_id.as_str());
            self.emit(
                TemplateName::ExtraWindow,
                format!("extraWindow/{p}ExtraWindow.tsx"),
                &window_bindings,
            )?;
            self.write(format!("extraWindow/{dom_id}.scss"), String::new());
        }

        Ok(())
    }

    fn emit_exporter(&mut self, spec: &ToolSpec, globals: &Replacements) -> Result<()> {
        let path = format!("export/{}ExcelExporter.ts", spec.name().pascal_case());
        let Some(exporter) = self.template(TemplateName::ExcelExporter, &path)? else {
            return Ok(());
        };
        let Some(snippet) = self.template(TemplateName::ExcelExportSnippet, &path)? else {
            return Ok(());
        };
        let Some(method) = self.template(TemplateName::ExcelExportFunction, &path)? else {
            return Ok(());
        };

        let mut parts = ExcelExportParts::default();
        for step in spec.steps() {
            let mut bindings = globals.clone();
            bindings.extend(&step_replacements(step));
            let rendered_snippet = self.render(&snippet, &bindings)?;
            let rendered_method = self.render(&method, &bindings)?;
            parts.push(step, &rendered_snippet, &rendered_method);
        }

        let mut bindings = globals.clone();
        parts.bind_into(&mut bindings);
        let content = self.render(&exporter, &bindings)?;
        self.write(path, content);
        Ok(())
    }
}
