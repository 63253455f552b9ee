//! Errores de serialización, E/S e invocación.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("No se pudo crear el directorio {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Error al guardar el archivo JSON {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("No se pudo lanzar {program}: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("Error leyendo la salida del proceso: {0}")]
    Output(#[source] io::Error),
}
