use std::cell::Cell;

use afusion::app;
use afusion::errors::AppError;
use fold_core::{CommandLine, CommandOutput, CommandRunner, CoreError, ExecutionSettings, INPUT_FILE_NAME};
use fold_domain::DomainError;

const FORM: &str = r#"{
  "name": "test",
  "model_seeds": "1,2,x,3",
  "entities": [
    {"kind": "Protein 🧬", "ids": "A", "sequence": "MKV", "msa": {"mode": "auto"}},
    {"kind": "Ligand 💊", "ids": "L"}
  ]
}"#;

struct EchoRunner {
    calls: Cell<usize>,
}

impl CommandRunner for &EchoRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandOutput, CoreError> {
        self.calls.set(self.calls.get() + 1);
        Ok(CommandOutput { exit_code: Some(0), output: format!("{}\n", command.program) })
    }
}

fn write_form(dir: &std::path::Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("form.json");
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_preview_reports_dropped_entities() {
    let tmp = tempfile::tempdir().unwrap();
    let form = app::load_form(&write_form(tmp.path(), FORM)).unwrap();
    let rendered = app::render(&form).unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered.json).unwrap();
    assert_eq!(value["modelSeeds"], serde_json::json!([1, 2, 3]));
    assert_eq!(value["sequences"], serde_json::json!([{"protein": {"id": "A", "sequence": "MKV"}}]));
    assert_eq!(value.as_object().unwrap().len(), 5);
    assert_eq!(rendered.diagnostics.into_vec(), vec![DomainError::LigandSourceMissing { entity: 1 }]);
}

#[test]
fn test_save_then_run_use_the_same_file() {
    let tmp = tempfile::tempdir().unwrap();
    let form = app::load_form(&write_form(tmp.path(), FORM)).unwrap();
    let rendered = app::render(&form).unwrap();
    let settings = ExecutionSettings::new(tmp.path().join("in"), "/out", "/models", "/db");

    let saved = app::save(&rendered, &settings).unwrap();
    assert_eq!(saved.path, tmp.path().join("in").join(INPUT_FILE_NAME));
    assert_eq!(std::fs::read_to_string(&saved.path).unwrap(), rendered.json);

    let runner = EchoRunner { calls: Cell::new(0) };
    let report = app::run(&rendered, &settings, &runner).unwrap();
    assert_eq!(runner.calls.get(), 1);
    assert_eq!(report.output, "docker\n");
    assert_eq!(report.document.fingerprint, saved.fingerprint);
}

#[test]
fn test_form_errors_map_to_exit_codes() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = app::load_form(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, AppError::FormRead { .. }));
    assert_eq!(missing.exit_code(), 3);

    let broken = app::load_form(&write_form(tmp.path(), "{ not json")).unwrap_err();
    assert_eq!(broken.exit_code(), 3);

    let no_seeds = app::load_form(&write_form(tmp.path(), r#"{"model_seeds": "a,b"}"#)).unwrap();
    let err = app::render(&no_seeds).unwrap_err();
    assert!(matches!(err, AppError::Domain(DomainError::NoModelSeeds)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_entity_summary_lists_emitted_entities() {
    let form = r#"{"entities": [
        {"kind": "protein", "ids": "A,B"},
        {"kind": "Ligand 💊", "ids": "L", "smiles": "CCO"},
        {"kind": "dna", "ids": ""}
    ]}"#;
    let tmp = tempfile::tempdir().unwrap();
    let rendered = app::render(&app::load_form(&write_form(tmp.path(), form)).unwrap()).unwrap();
    assert_eq!(rendered.entity_summary(), vec!["protein A,B".to_string(), "ligand L".to_string()]);
}

#[test]
fn test_run_summary_shows_the_launched_command() {
    let tmp = tempfile::tempdir().unwrap();
    let rendered = app::render(&app::load_form(&write_form(tmp.path(), FORM)).unwrap()).unwrap();
    let settings = ExecutionSettings::new(tmp.path().join("in"), "/out", "/models", "/db");
    let runner = EchoRunner { calls: Cell::new(0) };
    let report = app::run(&rendered, &settings, &runner).unwrap();

    let text = app::run_summary(&report);
    assert_eq!(text, format!("Comando Docker:\n{}\nSalida del comando:\ndocker\n", fold_core::docker_command(&settings)));
}
