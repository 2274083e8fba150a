//! End-to-end tests for `create-tool` runs driven by a scripted prompt.

use scaffold_cli::commands::{exit_code_for, generate::prepare};
use scaffold_cli::{GenerateArgs, ScriptedPrompt, Settings};
use scaffold_core::cli::ExitCode;
use scaffold_core::{FailurePolicy, ToolName};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn args(root: &Path) -> GenerateArgs {
    let mut args = GenerateArgs::new(ToolName::new("swot-analysis").unwrap(), "SWOT-Analyse");
    args.path = Some(root.to_path_buf());
    args
}

/// criterias (plain), matrix (sub-steps), no export
fn swot_answers() -> ScriptedPrompt {
    ScriptedPrompt::new()
        .with_confirm(true)
        .with_text("criterias")
        .with_text("Kriterien festlegen")
        .with_confirm(false)
        .with_confirm(false)
        .with_confirm(true)
        .with_text("matrix")
        .with_text("Matrix")
        .with_confirm(false)
        .with_confirm(true)
        .with_confirm(false)
        .with_confirm(false)
}

/// one step with an extra window, export enabled
fn export_answers() -> ScriptedPrompt {
    ScriptedPrompt::new()
        .with_confirm(true)
        .with_text("swot-factors")
        .with_text("Faktoren")
        .with_confirm(true)
        .with_text("Übersicht")
        .with_confirm(false)
        .with_confirm(false)
        .with_confirm(true)
}

fn embedded_template_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../scaffold-codegen/templates")
}

/// Copies the shipped templates, leaving out `skip`.
fn template_copy(skip: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    for entry in fs::read_dir(embedded_template_dir()).unwrap() {
        let entry = entry.unwrap();
        if entry.file_name() != skip {
            fs::copy(entry.path(), dir.path().join(entry.file_name())).unwrap();
        }
    }
    dir
}

#[tokio::test]
async fn test_swot_tool_layout() {
    let temp = TempDir::new().unwrap();
    let prompt = swot_answers();

    let report = prepare(&args(temp.path()), &Settings::default(), &prompt)
        .unwrap()
        .export()
        .await
        .unwrap();

    assert_eq!(prompt.remaining(), 0);
    assert_eq!(report.exit_code(), ExitCode::SUCCESS);
    assert_eq!(
        report.files,
        vec![
            "SwotAnalysis.tsx",
            "import/SwotAnalysisJSONImporter.ts",
            "steps/Criterias/Criterias.ts",
            "steps/Criterias/CriteriasComponent.tsx",
            "steps/Matrix/Matrix.ts",
            "steps/Matrix/MatrixComponent.tsx",
            "swot-analysis.scss",
        ]
    );

    let tool = temp.path().join("swot-analysis");
    assert!(!tool.join("extraWindow").exists());
    assert!(!tool.join("export").exists());

    let scss = fs::read_to_string(tool.join("swot-analysis.scss")).unwrap();
    assert_eq!(scss, "#criterias {\n\t\n}\n\n#matrix {\n\t\n}");

    let matrix = fs::read_to_string(tool.join("steps/Matrix/Matrix.ts")).unwrap();
    assert!(matrix.contains("SubStepDefinition<SwotAnalysisValues>"));
    assert!(matrix.contains("this.subStep = this;"));
    assert!(matrix.contains("return `${subStep}. Matrix`;"));

    let criterias = fs::read_to_string(tool.join("steps/Criterias/Criterias.ts")).unwrap();
    assert!(!criterias.contains("SubStepDefinition"));
    assert!(criterias.contains("this.title = \"1. Kriterien festlegen\";"));

    let main = fs::read_to_string(tool.join("SwotAnalysis.tsx")).unwrap();
    assert!(main.contains("class SwotAnalysis extends SteppableTool<SwotAnalysisValues>"));
    assert!(main.contains("this.setMaintenance(false);"));
    assert!(!main.contains("ExcelExporter"));
}

#[tokio::test]
async fn test_extra_window_and_export() {
    let temp = TempDir::new().unwrap();
    let mut args = args(temp.path());
    args.maintenance = true;

    let report = prepare(&args, &Settings::default(), &export_answers())
        .unwrap()
        .export()
        .await
        .unwrap();
    assert!(report.is_complete());

    let tool = temp.path().join("swot-analysis");
    assert!(tool.join("extraWindow/SwotFactorsExtraWindow.tsx").is_file());
    assert_eq!(
        fs::read_to_string(tool.join("extraWindow/swot-factors-extra-window.scss")).unwrap(),
        ""
    );

    let exporter = fs::read_to_string(tool.join("export/SwotAnalysisExcelExporter.ts")).unwrap();
    assert!(exporter.contains(
        "import {SwotFactorsValues} from \"../steps/SwotFactors/SwotFactorsComponent\";"
    ));

    let step = fs::read_to_string(tool.join("steps/SwotFactors/SwotFactors.ts")).unwrap();
    assert!(step.contains("ExtraWindowDefinition<SwotAnalysisValues>"));
    assert!(step.contains("\"Übersicht\""));

    let main = fs::read_to_string(tool.join("SwotAnalysis.tsx")).unwrap();
    assert!(main.contains("this.setMaintenance(true);"));
}

#[tokio::test]
async fn test_template_dir_from_settings() {
    let temp = TempDir::new().unwrap();
    let templates = template_copy("");
    let settings = Settings::from_toml_str(&format!(
        "[templates]\ndir = {:?}\n",
        templates.path().display().to_string()
    ))
    .unwrap();

    let report = prepare(&args(temp.path()), &settings, &swot_answers())
        .unwrap()
        .export()
        .await
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.files.len(), 7);
}

#[tokio::test]
async fn test_missing_template_continue_reports_partial_output() {
    let temp = TempDir::new().unwrap();
    let templates = template_copy("templateStep.txt");
    let mut args = args(temp.path());
    args.templates = Some(templates.path().to_path_buf());

    let report = prepare(&args, &Settings::default(), &swot_answers())
        .unwrap()
        .export()
        .await
        .unwrap();

    assert_eq!(report.exit_code(), ExitCode::PARTIAL_OUTPUT);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("templateStep.txt"));
    assert!(report.warnings[0].ends_with("steps/Criterias/Criterias.ts, steps/Matrix/Matrix.ts"));

    let tool = temp.path().join("swot-analysis");
    assert!(tool.join("steps/Criterias/CriteriasComponent.tsx").is_file());
    assert!(!tool.join("steps/Criterias/Criterias.ts").exists());
    assert!(tool.join("SwotAnalysis.tsx").is_file());
}

#[test]
fn test_missing_template_abort_fails() {
    let temp = TempDir::new().unwrap();
    let templates = template_copy("templateStep.txt");
    let mut args = args(temp.path());
    args.templates = Some(templates.path().to_path_buf());
    args.on_error = Some(FailurePolicy::Abort);

    let err = prepare(&args, &Settings::default(), &swot_answers()).unwrap_err();

    assert_eq!(exit_code_for(&err), ExitCode::ERROR);
    assert!(!temp.path().join("swot-analysis").exists());
}

#[test]
fn test_missing_output_dir_is_invalid_input() {
    let temp = TempDir::new().unwrap();
    let args = args(&temp.path().join("nope"));

    let err = prepare(&args, &Settings::default(), &ScriptedPrompt::new()).unwrap_err();
    assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
}
