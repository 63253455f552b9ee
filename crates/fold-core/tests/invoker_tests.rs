use std::cell::RefCell;
use std::path::PathBuf;

use fold_core::{CommandLine, CommandOutput, CommandRunner, CoreError, ExecutionSettings, Invoker, InvokerState,
                INPUT_FILE_NAME};
use fold_domain::JobDocument;

/// Registra cada comando y el contenido del archivo en el momento del lanzamiento.
struct RecordingRunner {
    input_file: PathBuf,
    exit_code: Option<i32>,
    seen: RefCell<Vec<(String, String)>>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandOutput, CoreError> {
        let content = std::fs::read_to_string(&self.input_file).unwrap_or_default();
        self.seen.borrow_mut().push((command.to_string(), content));
        Ok(CommandOutput { exit_code: self.exit_code, output: "linea 1\nerror: fallo\n".into() })
    }
}

fn settings(input: PathBuf) -> ExecutionSettings {
    ExecutionSettings::new(input, "/out", "/models", "/db")
}

#[test]
fn test_run_rewrites_document_before_launch() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("af_input");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::write(input.join(INPUT_FILE_NAME), "stale").unwrap();

    let runner = RecordingRunner { input_file: input.join(INPUT_FILE_NAME), exit_code: Some(0), seen: RefCell::new(vec![]) };
    let mut invoker = Invoker::new(runner);
    assert_eq!(invoker.state(), InvokerState::Idle);

    let doc = JobDocument::new("fresh", vec![5], vec![]);
    let report = invoker.run(&doc, &settings(input.clone())).unwrap();

    assert_eq!(invoker.state(), InvokerState::Completed);
    assert!(report.succeeded());
    assert_eq!(report.output, "linea 1\nerror: fallo\n");
    assert!(report.finished_at >= report.started_at);
    assert!(report.command.starts_with("docker run -it --volume "));
    assert!(report.command.ends_with("--run_data_pipeline --run_inference"));

    let seen = invoker.runner().seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, report.command);
    assert_eq!(seen[0].1, fold_core::render_pretty(&doc).unwrap());
}

#[test]
fn test_non_zero_exit_is_still_completed() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("in");
    let runner = RecordingRunner { input_file: input.join(INPUT_FILE_NAME), exit_code: Some(1), seen: RefCell::new(vec![]) };
    let mut invoker = Invoker::new(runner);

    let report = invoker.run(&JobDocument::new("j", vec![1], vec![]), &settings(input)).unwrap();
    assert_eq!(report.exit_code, Some(1));
    assert!(!report.succeeded());
    assert_eq!(invoker.state(), InvokerState::Completed);
}

#[test]
fn test_write_failure_aborts_before_launch() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("file");
    std::fs::write(&blocker, "x").unwrap();

    let runner = RecordingRunner { input_file: blocker.join(INPUT_FILE_NAME), exit_code: Some(0), seen: RefCell::new(vec![]) };
    let mut invoker = Invoker::new(runner);
    let err = invoker.run(&JobDocument::new("j", vec![1], vec![]), &settings(blocker)).unwrap_err();
    assert!(matches!(err, CoreError::CreateDir { .. }));
    assert_eq!(invoker.state(), InvokerState::Idle);
    assert!(invoker.runner().seen.borrow().is_empty());
}

#[test]
fn test_report_serializes_with_camel_case_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("in");
    let runner = RecordingRunner { input_file: input.join(INPUT_FILE_NAME), exit_code: Some(3), seen: RefCell::new(vec![]) };
    let mut invoker = Invoker::new(runner);
    let report = invoker.run(&JobDocument::new("j", vec![1], vec![]), &settings(input.clone())).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["runId", "command", "document", "startedAt", "finishedAt", "exitCode", "output"]);
    assert_eq!(value["runId"], report.run_id.to_string());
    assert_eq!(value["exitCode"], 3);
    assert_eq!(value["document"]["path"], input.join(INPUT_FILE_NAME).to_str().unwrap());
    assert_eq!(value["document"]["fingerprint"], report.document.fingerprint);
    assert!(value["startedAt"].is_string());
}
