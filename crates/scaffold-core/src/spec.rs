//! Tool and step descriptions collected from the user.
//!
//! A [`ToolSpec`] is assembled incrementally through [`ToolSpecBuilder`]
//! while questions are answered, then frozen. Step order is the order of
//! entry and determines each step's display ordinal.
//!
//! # Examples
//!
//! ```
//! use scaffold_core::{StepId, ToolName, ToolSpec};
//!
//! let spec = ToolSpec::builder(ToolName::new("swot-analysis")?, "SWOT-Analyse")
//!     .step(StepId::new("criterias")?, "Kriterien festlegen", false, None)?
//!     .step(StepId::new("matrix")?, "Matrix", true, None)?
//!     .build();
//!
//! assert_eq!(spec.steps().len(), 2);
//! assert_eq!(spec.steps()[1].display_name(), "2. Matrix");
//! # Ok::<(), scaffold_core::Error>(())
//! ```

use crate::types::{StepId, ToolName};
use crate::{Error, Result};
use serde::Serialize;

/// Auxiliary window attached to a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraWindow {
    /// Title shown for the window in the generated tool
    pub display_name: String,
}

impl ExtraWindow {
    /// Creates an extra window with the given display name.
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// One stage of the generated tool's workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSpec {
    id: StepId,
    name: String,
    display_name: String,
    has_substeps: bool,
    extra_window: Option<ExtraWindow>,
}

impl StepSpec {
    /// Creates a step at the given 1-based position.
    ///
    /// The display name is derived as `"<ordinal>. <name>"`.
    #[must_use]
    pub fn new(
        ordinal: usize,
        id: StepId,
        name: impl Into<String>,
        has_substeps: bool,
        extra_window: Option<ExtraWindow>,
    ) -> Self {
        let name = name.into();
        let display_name = format!("{ordinal}. {name}");
        Self {
            id,
            name,
            display_name,
            has_substeps,
            extra_window,
        }
    }

    /// Returns the step id.
    #[must_use]
    pub const fn id(&self) -> &StepId {
        &self.id
    }

    /// Returns the PascalCase form of the step id.
    #[must_use]
    pub fn id_pascal(&self) -> &str {
        self.id.pascal_case()
    }

    /// Returns the step name without its ordinal.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the numbered title, e.g. `"1. Kriterien"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns `true` if the step declares sub-steps.
    #[must_use]
    pub const fn has_substeps(&self) -> bool {
        self.has_substeps
    }

    /// Returns the extra window, if the step has one.
    #[must_use]
    pub const fn extra_window(&self) -> Option<&ExtraWindow> {
        self.extra_window.as_ref()
    }
}

/// Complete description of the tool to scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolSpec {
    name: ToolName,
    display_name: String,
    maintenance_mode: bool,
    steps: Vec<StepSpec>,
    use_excel_export: bool,
}

impl ToolSpec {
    /// Starts building a tool description.
    #[must_use]
    pub fn builder(name: ToolName, display_name: impl Into<String>) -> ToolSpecBuilder {
        ToolSpecBuilder::new(name, display_name)
    }

    /// Returns the tool name.
    #[must_use]
    pub const fn name(&self) -> &ToolName {
        &self.name
    }

    /// Returns the human-readable tool title.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns `true` if the tool starts in maintenance mode.
    #[must_use]
    pub const fn maintenance_mode(&self) -> bool {
        self.maintenance_mode
    }

    /// Returns the steps in entry order.
    #[must_use]
    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    /// Returns `true` if an Excel exporter should be generated.
    #[must_use]
    pub const fn use_excel_export(&self) -> bool {
        self.use_excel_export
    }
}

/// Incremental builder for [`ToolSpec`].
///
/// Steps can only be appended; there is no editing or removal.
#[derive(Debug, Clone)]
pub struct ToolSpecBuilder {
    name: ToolName,
    display_name: String,
    maintenance_mode: bool,
    steps: Vec<StepSpec>,
    use_excel_export: bool,
}

impl ToolSpecBuilder {
    /// Creates a builder with no steps, maintenance and export disabled.
    #[must_use]
    pub fn new(name: ToolName, display_name: impl Into<String>) -> Self {
        Self {
            name,
            display_name: display_name.into(),
            maintenance_mode: false,
            steps: Vec::new(),
            use_excel_export: false,
        }
    }

    /// Sets the maintenance flag.
    #[must_use]
    pub const fn maintenance_mode(mut self, enabled: bool) -> Self {
        self.maintenance_mode = enabled;
        self
    }

    /// Sets whether an Excel exporter is generated.
    #[must_use]
    pub const fn excel_export(mut self, enabled: bool) -> Self {
        self.use_excel_export = enabled;
        self
    }

    /// Appends a step, numbering it after the steps already added.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if another step already produces
    /// the same PascalCase id, since both would write to the same files.
    pub fn step(
        mut self,
        id: StepId,
        name: impl Into<String>,
        has_substeps: bool,
        extra_window: Option<ExtraWindow>,
    ) -> Result<Self> {
        self.push_step(id, name, has_substeps, extra_window)?;
        Ok(self)
    }

    /// Appends a step in place. See [`ToolSpecBuilder::step`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] on a duplicate PascalCase id.
    pub fn push_step(
        &mut self,
        id: StepId,
        name: impl Into<String>,
        has_substeps: bool,
        extra_window: Option<ExtraWindow>,
    ) -> Result<()> {
        self.check_unique(&id)?;
        let ordinal = self.steps.len() + 1;
        self.steps
            .push(StepSpec::new(ordinal, id, name, has_substeps, extra_window));
        Ok(())
    }

    /// Checks that `id` does not collide with a step already added.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] on a duplicate PascalCase id.
    pub fn check_unique(&self, id: &StepId) -> Result<()> {
        if let Some(existing) = self
            .steps
            .iter()
            .find(|s| s.id_pascal() == id.pascal_case())
        {
            return Err(Error::ValidationError {
                field: "step id".to_string(),
                reason: format!(
                    "'{id}' maps to {} which is already used by step '{}'",
                    id.pascal_case(),
                    existing.id()
                ),
            });
        }
        Ok(())
    }

    /// Number of steps added so far.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Freezes the description.
    #[must_use]
    pub fn build(self) -> ToolSpec {
        ToolSpec {
            name: self.name,
            display_name: self.display_name,
            maintenance_mode: self.maintenance_mode,
            steps: self.steps,
            use_excel_export: self.use_excel_export,
        }
    }
}
