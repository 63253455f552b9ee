//! Máquina de estados de una ejecución: Idle → Running → Completed.
//!
//! La llamada es bloqueante; no hay cancelación ni tiempo límite. El código
//! de salida de la herramienta se expone en el informe, pero un código
//! distinto de cero no convierte la ejecución en error.
use chrono::{DateTime, Utc};
use fold_domain::JobDocument;
use serde::Serialize;
use uuid::Uuid;

use super::command::{docker_command, ExecutionSettings};
use super::runner::CommandRunner;
use crate::errors::CoreError;
use crate::serialize::{write_document, SavedDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokerState {
    Idle,
    Running,
    Completed,
}

/// Informe de una ejecución terminada; `afusion run --json` lo imprime tal cual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    pub run_id: Uuid,
    /// Línea de comando tal como se muestra al usuario.
    pub command: String,
    pub document: SavedDocument,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub exit_code: Option<i32>,
    pub output: String,
}

impl ExecutionReport {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub struct Invoker<R: CommandRunner> {
    runner: R,
    state: InvokerState,
}

impl<R: CommandRunner> Invoker<R> {
    pub fn new(runner: R) -> Self {
        Self { runner, state: InvokerState::Idle }
    }

    pub fn state(&self) -> InvokerState {
        self.state
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Reescribe el documento en `settings.input_dir` y lanza el contenedor.
    /// Si la escritura falla no se lanza nada y el invocador vuelve a Idle.
    pub fn run(&mut self, doc: &JobDocument, settings: &ExecutionSettings) -> Result<ExecutionReport, CoreError> {
        let document = match write_document(doc, &settings.input_dir) {
            Ok(saved) => saved,
            Err(e) => {
                log::error!("{e}");
                self.state = InvokerState::Idle;
                return Err(e);
            }
        };
        let command = docker_command(settings);
        let run_id = Uuid::new_v4();
        log::info!("[{run_id}] ejecutando: {command}");

        self.state = InvokerState::Running;
        let started_at = Utc::now();
        let out = match self.runner.run(&command) {
            Ok(out) => out,
            Err(e) => {
                log::error!("[{run_id}] {e}");
                self.state = InvokerState::Idle;
                return Err(e);
            }
        };
        let finished_at = Utc::now();
        self.state = InvokerState::Completed;

        match out.exit_code {
            Some(0) => log::info!("[{run_id}] ejecución completada"),
            Some(code) => log::warn!("[{run_id}] la herramienta terminó con código {code}"),
            None => log::warn!("[{run_id}] la herramienta terminó por una señal"),
        }
        Ok(ExecutionReport { run_id,
                             command: command.to_string(),
                             document,
                             started_at,
                             finished_at,
                             exit_code: out.exit_code,
                             output: out.output })
    }
}
