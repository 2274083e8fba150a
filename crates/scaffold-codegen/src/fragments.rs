//! Replacement fragments derived from a [`ToolSpec`].
//!
//! Everything a template can receive is assembled here, before any template
//! is read: global bindings, the aggregated step listings, per-step
//! bindings, and the tables of optional per-feature fragments. Optional
//! fragments are always bound; an absent feature binds the empty string.

use crate::placeholder::Placeholder;
use crate::template_engine::Replacements;
use scaffold_core::{StepSpec, ToolSpec};

const STEPS_TYPE_SEPARATOR: &str = ",\n\t";
const STEPS_OBJECT_SEPARATOR: &str = ",\n\t\t\t";
const STEPS_CODE_SEPARATOR: &str = "\n\t\t";
const STEPS_IMPORTS_SEPARATOR: &str = "\n";
const STYLESHEET_SEPARATOR: &str = "\n\n";

/// Listings with one entry per step, in step order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepListings {
    /// `"id"?: <P>Values` entries of the tool values type
    pub steps_type: String,
    /// `"id": undefined` entries of the initial data object
    pub steps_object: String,
    /// `this.addStep(new <P>());` calls
    pub steps_code: String,
    /// Two import lines per step
    pub steps_imports: String,
    /// Empty style block per step, keyed by step id
    pub stylesheet: String,
}

impl StepListings {
    /// Builds all listings from the steps in entry order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_codegen::StepListings;
    /// use scaffold_core::{StepId, StepSpec};
    ///
    /// let steps = vec![
    ///     StepSpec::new(1, StepId::new("a").unwrap(), "A", false, None),
    ///     StepSpec::new(2, StepId::new("b").unwrap(), "B", false, None),
    /// ];
    /// let listings = StepListings::from_steps(&steps);
    /// assert_eq!(listings.steps_code, "this.addStep(new A());\n\t\tthis.addStep(new B());");
    /// ```
    #[must_use]
    pub fn from_steps(steps: &[StepSpec]) -> Self {
        let join = |line: fn(&StepSpec) -> String, separator: &str| {
            steps.iter().map(line).collect::<Vec<_>>().join(separator)
        };

        Self {
            steps_type: join(
                |s| format!("\"{}\"?: {}Values", s.id(), s.id_pascal()),
                STEPS_TYPE_SEPARATOR,
            ),
            steps_object: join(|s| format!("\"{}\": undefined", s.id()), STEPS_OBJECT_SEPARATOR),
            steps_code: join(
                |s| format!("this.addStep(new {}());", s.id_pascal()),
                STEPS_CODE_SEPARATOR,
            ),
            steps_imports: join(
                |s| {
                    let p = s.id_pascal();
                    format!(
                        "import {{{p}}} from \"./steps/{p}/{p}\";\nimport {{{p}Values}} from \"./steps/{p}/{p}Component\";"
                    )
                },
                STEPS_IMPORTS_SEPARATOR,
            ),
            stylesheet: join(|s| format!("#{} {{\n\t\n}}", s.id()), STYLESHEET_SEPARATOR),
        }
    }
}

/// Bindings shared by every template of a run: tool identity, maintenance
/// flag and the aggregated step listings.
#[must_use]
pub fn global_replacements(spec: &ToolSpec, listings: &StepListings) -> Replacements {
    Replacements::new()
        .with(Placeholder::DisplayName, spec.display_name())
        .with(Placeholder::NamePascal, spec.name().pascal_case())
        .with(Placeholder::Name, spec.name().as_str())
        .with(Placeholder::Maintenance, spec.maintenance_mode().to_string())
        .with(Placeholder::StepsCode, listings.steps_code.as_str())
        .with(Placeholder::StepsObject, listings.steps_object.as_str())
        .with(Placeholder::StepsType, listings.steps_type.as_str())
        .with(Placeholder::StepsImports, listings.steps_imports.as_str())
}

/// Bindings describing one step, re-bound for each step's own files.
///
/// # Examples
///
/// ```
/// use scaffold_codegen::{step_replacements, Placeholder};
/// use scaffold_core::{StepId, StepSpec};
///
/// let step = StepSpec::new(2, StepId::new("swot-matrix").unwrap(), "Matrix", false, None);
/// let bindings = step_replacements(&step);
/// assert_eq!(bindings.get(Placeholder::StepIdLowerCase), Some("swotmatrix"));
/// assert_eq!(bindings.get(Placeholder::StepDisplayName), Some("2. Matrix"));
/// ```
#[must_use]
pub fn step_replacements(step: &StepSpec) -> Replacements {
    Replacements::new()
        .with(Placeholder::StepId, step.id().as_str())
        .with(Placeholder::StepIdLowerCase, step.id().css_token())
        .with(Placeholder::StepName, step.id_pascal())
        .with(Placeholder::StepDisplayName, step.display_name())
}

/// DOM id of a step's extra window; also names its stylesheet.
#[must_use]
pub fn extra_window_dom_id(step: &StepSpec) -> String {
    format!("{}-extra-window", step.id())
}

/// Optional fragments of a step definition file.
///
/// Each field is the real text when the step has the feature and the empty
/// string otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepFeatureFragments {
    /// Additions to the definition import list
    pub definition_imports: String,
    /// Import line for the extra window component
    pub extra_window_import: String,
    /// Extra field declarations on the step class
    pub extra_fields: String,
    /// Sub-step interface extension clause
    pub sub_step_extend: String,
    /// Extra window assignment block for the constructor
    pub extra_window_constructor: String,
    /// Sub-step assignment for the constructor
    pub sub_step_constructor: String,
    /// Rendered sub-step code
    pub sub_step_code: String,
}

impl StepFeatureFragments {
    /// Builds the fragment table for `step`.
    ///
    /// `sub_step_code` is the already rendered sub-step code; it is used
    /// only when the step declares sub-steps.
    #[must_use]
    pub fn for_step(step: &StepSpec, tool_pascal: &str, sub_step_code: &str) -> Self {
        let mut fragments = Self::default();
        let p = step.id_pascal();

        if let Some(window) = step.extra_window() {
            fragments.definition_imports.push_str(",\n\tExtraWindowDefinition");
            fragments.extra_window_import =
                format!("\nimport {{{p}ExtraWindow}} from \"../../extraWindow/{p}ExtraWindow\";");
            fragments
                .extra_fields
                .push_str(&format!("\n\textraWindow: ExtraWindowDefinition<{tool_pascal}Values>;"));
            fragments.extra_window_constructor = format!(
                "this.extraWindow = {{\n\t\t\tdisplayName: \"{}\",\n\t\t\textraWindowComponent: {p}ExtraWindow,\n\t\t}};",
                window.display_name
            );
        }

        if step.has_substeps() {
            fragments.definition_imports.push_str(",\n\tSubStepDefinition");
            fragments.sub_step_extend = format!(", SubStepDefinition<{tool_pascal}Values>");
            fragments
                .extra_fields
                .push_str(&format!("\n\tsubStep: SubStepDefinition<{tool_pascal}Values>;"));
            if !fragments.extra_window_constructor.is_empty() {
                fragments.sub_step_constructor.push_str("\n\t\t");
            }
            fragments.sub_step_constructor.push_str("this.subStep = this;");
            fragments.sub_step_code = sub_step_code.to_string();
        }

        fragments
    }

    /// Binds every fragment, including the empty ones.
    pub fn bind_into(&self, replacements: &mut Replacements) {
        replacements
            .bind(Placeholder::ExtraWindowImport, self.extra_window_import.as_str())
            .bind(
                Placeholder::ExtraWindowConstructor,
                self.extra_window_constructor.as_str(),
            )
            .bind(Placeholder::SubStepConstructor, self.sub_step_constructor.as_str())
            .bind(Placeholder::SubStepExtraClass, self.extra_fields.as_str())
            .bind(Placeholder::SubStepExtend, self.sub_step_extend.as_str())
            .bind(Placeholder::SubStepImports, self.definition_imports.as_str())
            .bind(Placeholder::SubStepCode, self.sub_step_code.as_str());
    }
}

/// Optional fragments of the main tool file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolFileFragments {
    /// Import line of the generated JSON importer
    pub json_importer_import: String,
    /// Exporter registration call, empty without export
    pub export_activation: String,
    /// Exporter import line, empty without export
    pub export_import: String,
}

impl ToolFileFragments {
    /// Builds the tool file fragments.
    #[must_use]
    pub fn for_tool(spec: &ToolSpec) -> Self {
        let p = spec.name().pascal_case();
        let (export_activation, export_import) = if spec.use_excel_export() {
            (
                format!("\n\t\tthis.addExporter(new {p}ExcelExporter());"),
                format!("\nimport {{{p}ExcelExporter}} from \"./export/{p}ExcelExporter\";"),
            )
        } else {
            (String::new(), String::new())
        };

        Self {
            json_importer_import: format!(
                "\nimport {{{p}JSONImporter}} from \"./import/{p}JSONImporter\";"
            ),
            export_activation,
            export_import,
        }
    }

    /// Binds every fragment, including the empty ones.
    pub fn bind_into(&self, replacements: &mut Replacements) {
        replacements
            .bind(Placeholder::JsonImporterImport, self.json_importer_import.as_str())
            .bind(Placeholder::ExcelExportAdd, self.export_activation.as_str())
            .bind(Placeholder::ExcelExportImport, self.export_import.as_str());
    }
}

/// Per-step pieces of the Excel exporter, accumulated in step order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcelExportParts {
    /// Rendered snippets, each followed by a blank line
    pub snippets: String,
    /// Rendered methods, each followed by a blank line
    pub methods: String,
    /// One values-type import per step
    pub imports: String,
}

impl ExcelExportParts {
    /// Appends the rendered snippet and method of `step`.
    pub fn push(&mut self, step: &StepSpec, snippet: &str, method: &str) {
        let p = step.id_pascal();
        self.snippets.push_str(snippet);
        self.snippets.push_str("\n\n");
        self.methods.push_str(method);
        self.methods.push_str("\n\n");
        self.imports.push_str(&format!(
            "import {{{p}Values}} from \"../steps/{p}/{p}Component\";\n"
        ));
    }

    /// Binds the accumulated parts.
    pub fn bind_into(&self, replacements: &mut Replacements) {
        replacements
            .bind(Placeholder::ExcelExportSnippet, self.snippets.as_str())
            .bind(Placeholder::ExcelExportFunction, self.methods.as_str())
            .bind(Placeholder::ExcelExportImports, self.imports.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_core::{ExtraWindow, StepId, ToolName};

    fn step(ordinal: usize, id: &str, substeps: bool, window: Option<&str>) -> StepSpec {
        StepSpec::new(
            ordinal,
            StepId::new(id).unwrap(),
            id.to_uppercase(),
            substeps,
            window.map(ExtraWindow::new),
        )
    }

    fn spec(export: bool) -> ToolSpec {
        ToolSpec::builder(ToolName::new("swot-analysis").unwrap(), "SWOT-Analyse")
            .maintenance_mode(true)
            .excel_export(export)
            .step(StepId::new("criterias").unwrap(), "Kriterien", false, None)
            .unwrap()
            .build()
    }

    #[test]
    fn test_listings_preserve_step_order() {
        let steps = vec![
            step(1, "alpha", false, None),
            step(2, "beta", false, None),
            step(3, "gamma", false, None),
        ];
        let listings = StepListings::from_steps(&steps);

        assert_eq!(
            listings.steps_code,
            "this.addStep(new Alpha());\n\t\tthis.addStep(new Beta());\n\t\tthis.addStep(new Gamma());"
        );
        assert_eq!(
            listings.steps_type,
            "\"alpha\"?: AlphaValues,\n\t\"beta\"?: BetaValues,\n\t\"gamma\"?: GammaValues"
        );
        assert_eq!(
            listings.steps_object,
            "\"alpha\": undefined,\n\t\t\t\"beta\": undefined,\n\t\t\t\"gamma\": undefined"
        );
    }

    #[test]
    fn test_listings_are_not_sorted() {
        let steps = vec![step(1, "b", false, None), step(2, "a", false, None)];
        let listings = StepListings::from_steps(&steps);
        let b = listings.steps_code.find("new B()").unwrap();
        let a = listings.steps_code.find("new A()").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_imports_two_lines_per_step() {
        let listings = StepListings::from_steps(&[step(1, "swot-criterias", false, None)]);
        assert_eq!(
            listings.steps_imports,
            "import {SwotCriterias} from \"./steps/SwotCriterias/SwotCriterias\";\nimport {SwotCriteriasValues} from \"./steps/SwotCriterias/SwotCriteriasComponent\";"
        );
    }

    #[test]
    fn test_stylesheet() {
        let listings =
            StepListings::from_steps(&[step(1, "a", false, None), step(2, "b", false, None)]);
        assert_eq!(listings.stylesheet, "#a {\n\t\n}\n\n#b {\n\t\n}");
    }

    #[test]
    fn test_empty_steps_give_empty_listings() {
        assert_eq!(StepListings::from_steps(&[]), StepListings::default());
    }

    #[test]
    fn test_global_replacements() {
        let spec = spec(false);
        let listings = StepListings::from_steps(spec.steps());
        let globals = global_replacements(&spec, &listings);

        assert_eq!(globals.get(Placeholder::Name), Some("swot-analysis"));
        assert_eq!(globals.get(Placeholder::NamePascal), Some("SwotAnalysis"));
        assert_eq!(globals.get(Placeholder::DisplayName), Some("SWOT-Analyse"));
        assert_eq!(globals.get(Placeholder::Maintenance), Some("true"));
        assert_eq!(
            globals.get(Placeholder::StepsCode),
            Some("this.addStep(new Criterias());")
        );
    }

    #[test]
    fn test_plain_step_fragments_are_empty() {
        let fragments = StepFeatureFragments::for_step(&step(1, "a", false, None), "Tool", "CODE");
        assert_eq!(fragments, StepFeatureFragments::default());

        let mut replacements = Replacements::new();
        fragments.bind_into(&mut replacements);
        assert_eq!(replacements.len(), 7);
        assert!(replacements.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_extra_window_fragments() {
        let fragments = StepFeatureFragments::for_step(
            &step(1, "matrix", false, Some("Übersicht")),
            "SwotAnalysis",
            "",
        );
        assert_eq!(fragments.definition_imports, ",\n\tExtraWindowDefinition");
        assert_eq!(
            fragments.extra_window_import,
            "\nimport {MatrixExtraWindow} from \"../../extraWindow/MatrixExtraWindow\";"
        );
        assert_eq!(
            fragments.extra_fields,
            "\n\textraWindow: ExtraWindowDefinition<SwotAnalysisValues>;"
        );
        assert!(fragments.extra_window_constructor.contains("displayName: \"Übersicht\""));
        assert!(fragments.extra_window_constructor.contains("extraWindowComponent: MatrixExtraWindow"));
        assert!(fragments.sub_step_extend.is_empty());
        assert!(fragments.sub_step_constructor.is_empty());
    }

    #[test]
    fn test_sub_step_fragments() {
        let fragments =
            StepFeatureFragments::for_step(&step(1, "matrix", true, None), "SwotAnalysis", "CODE");
        assert_eq!(fragments.definition_imports, ",\n\tSubStepDefinition");
        assert_eq!(fragments.sub_step_extend, ", SubStepDefinition<SwotAnalysisValues>");
        assert_eq!(
            fragments.extra_fields,
            "\n\tsubStep: SubStepDefinition<SwotAnalysisValues>;"
        );
        assert_eq!(fragments.sub_step_constructor, "this.subStep = this;");
        assert_eq!(fragments.sub_step_code, "CODE");
        assert!(fragments.extra_window_import.is_empty());
    }

    #[test]
    fn test_both_features_combine() {
        let fragments =
            StepFeatureFragments::for_step(&step(1, "matrix", true, Some("W")), "T", "CODE");
        assert_eq!(
            fragments.definition_imports,
            ",\n\tExtraWindowDefinition,\n\tSubStepDefinition"
        );
        assert_eq!(fragments.sub_step_constructor, "\n\t\tthis.subStep = this;");
        assert!(fragments.extra_fields.starts_with("\n\textraWindow"));
        assert!(fragments.extra_fields.ends_with("subStep: SubStepDefinition<TValues>;"));
    }

    #[test]
    fn test_tool_file_fragments_without_export() {
        let fragments = ToolFileFragments::for_tool(&spec(false));
        assert_eq!(
            fragments.json_importer_import,
            "\nimport {SwotAnalysisJSONImporter} from \"./import/SwotAnalysisJSONImporter\";"
        );
        assert!(fragments.export_activation.is_empty());
        assert!(fragments.export_import.is_empty());
    }

    #[test]
    fn test_tool_file_fragments_with_export() {
        let fragments = ToolFileFragments::for_tool(&spec(true));
        assert_eq!(
            fragments.export_activation,
            "\n\t\tthis.addExporter(new SwotAnalysisExcelExporter());"
        );
        assert_eq!(
            fragments.export_import,
            "\nimport {SwotAnalysisExcelExporter} from \"./export/SwotAnalysisExcelExporter\";"
        );
    }

    #[test]
    fn test_excel_export_parts_accumulate_in_order() {
        let mut parts = ExcelExportParts::default();
        parts.push(&step(1, "a", false, None), "snipA", "methA");
        parts.push(&step(2, "b", false, None), "snipB", "methB");

        assert_eq!(parts.snippets, "snipA\n\nsnipB\n\n");
        assert_eq!(parts.methods, "methA\n\nmethB\n\n");
        assert_eq!(
            parts.imports,
            "import {AValues} from \"../steps/A/AComponent\";\nimport {BValues} from \"../steps/B/BComponent\";\n"
        );
    }

    #[test]
    fn test_extra_window_dom_id() {
        assert_eq!(
            extra_window_dom_id(&step(1, "swot-matrix", false, Some("W"))),
            "swot-matrix-extra-window"
        );
    }
}
