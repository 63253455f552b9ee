//! Línea de comando del contenedor de AlphaFold 3.
use std::fmt;
use std::path::{Path, PathBuf};

use crate::serialize::INPUT_FILE_NAME;

/// Rutas fijas dentro del contenedor.
pub const CONTAINER_INPUT_DIR: &str = "/root/af_input";
pub const CONTAINER_OUTPUT_DIR: &str = "/root/af_output";
pub const CONTAINER_MODEL_DIR: &str = "/root/models";
pub const CONTAINER_DATABASE_DIR: &str = "/root/public_databases";
pub const DEFAULT_IMAGE: &str = "alphafold3";

/// Rutas del host y opciones elegidas por el usuario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub model_dir: PathBuf,
    pub database_dir: PathBuf,
    pub run_data_pipeline: bool,
    pub run_inference: bool,
    pub image: String,
}

impl ExecutionSettings {
    /// Ambas etapas activadas e imagen `alphafold3`.
    pub fn new(input_dir: impl Into<PathBuf>,
               output_dir: impl Into<PathBuf>,
               model_dir: impl Into<PathBuf>,
               database_dir: impl Into<PathBuf>)
               -> Self {
        Self { input_dir: input_dir.into(),
               output_dir: output_dir.into(),
               model_dir: model_dir.into(),
               database_dir: database_dir.into(),
               run_data_pipeline: true,
               run_inference: true,
               image: DEFAULT_IMAGE.to_string() }
    }
}

/// Programa y argumentos; se lanza sin shell intermedia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

fn volume(host: &Path, container: &str) -> String {
    format!("{}:{container}", host.display())
}

/// `docker run` con los cuatro volúmenes, acceso a GPU y los interruptores
/// opcionales. Un interruptor desactivado simplemente no aparece.
pub fn docker_command(settings: &ExecutionSettings) -> CommandLine {
    let mut args = vec!["run".to_string(),
                        "-it".to_string(),
                        "--volume".to_string(),
                        volume(&settings.input_dir, CONTAINER_INPUT_DIR),
                        "--volume".to_string(),
                        volume(&settings.output_dir, CONTAINER_OUTPUT_DIR),
                        "--volume".to_string(),
                        volume(&settings.model_dir, CONTAINER_MODEL_DIR),
                        "--volume".to_string(),
                        volume(&settings.database_dir, CONTAINER_DATABASE_DIR),
                        "--gpus".to_string(),
                        "all".to_string(),
                        settings.image.clone(),
                        "python".to_string(),
                        "run_alphafold.py".to_string(),
                        format!("--json_path={CONTAINER_INPUT_DIR}/{INPUT_FILE_NAME}"),
                        format!("--model_dir={CONTAINER_MODEL_DIR}"),
                        format!("--output_dir={CONTAINER_OUTPUT_DIR}")];
    if settings.run_data_pipeline {
        args.push("--run_data_pipeline".to_string());
    }
    if settings.run_inference {
        args.push("--run_inference".to_string());
    }
    CommandLine { program: "docker".to_string(), args }
}
