//! Acciones de la interfaz sobre un formulario ya decodificado.
//!
//! Cada acción reconstruye el documento desde el formulario completo: no hay
//! estado compartido entre llamadas.
use std::fs;
use std::path::Path;

use fold_core::{render_pretty, write_document, CommandRunner, ExecutionReport, ExecutionSettings, Invoker,
                SavedDocument};
use fold_domain::{assemble, Diagnostics, JobDocument, JobForm};

use crate::errors::AppError;

/// Documento ensamblado junto con su texto JSON y los avisos.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub document: JobDocument,
    pub json: String,
    pub diagnostics: Diagnostics,
}

pub fn load_form(path: &Path) -> Result<JobForm, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::FormRead { path: path.to_path_buf(), source })?;
    serde_json::from_str(&text).map_err(|source| AppError::FormParse { path: path.to_path_buf(), source })
}

/// Vista previa: ensambla y serializa sin tocar el disco.
pub fn render(form: &JobForm) -> Result<Rendered, AppError> {
    let assembly = assemble(form)?;
    let json = render_pretty(&assembly.document)?;
    Ok(Rendered { document: assembly.document, json, diagnostics: assembly.diagnostics })
}

impl Rendered {
    /// Una línea por entidad emitida: `tipo id1,id2`.
    pub fn entity_summary(&self) -> Vec<String> {
        self.document
            .sequences
            .iter()
            .map(|entity| format!("{} {}", entity.kind(), entity.id().as_slice().join(",")))
            .collect()
    }
}

/// "Guardar JSON": escribe `fold_input.json` en el directorio de entrada.
pub fn save(rendered: &Rendered, settings: &ExecutionSettings) -> Result<SavedDocument, AppError> {
    Ok(write_document(&rendered.document, &settings.input_dir)?)
}

/// "Ejecutar": reescribe el archivo y bloquea hasta que la herramienta
/// termina.
pub fn run<R: CommandRunner>(rendered: &Rendered,
                             settings: &ExecutionSettings,
                             runner: R)
                             -> Result<ExecutionReport, AppError> {
    let mut invoker = Invoker::new(runner);
    Ok(invoker.run(&rendered.document, settings)?)
}

/// Texto que la CLI muestra tras una ejecución: el comando realmente lanzado
/// y la salida combinada.
pub fn run_summary(report: &ExecutionReport) -> String {
    format!("Comando Docker:\n{}\nSalida del comando:\n{}", report.command, report.output)
}
