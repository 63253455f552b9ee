use std::io;
use std::path::PathBuf;

use fold_core::CoreError;
use fold_domain::DomainError;
use thiserror::Error;

/// Errores de la aplicación; agrupa los de cada crate.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("No se pudo leer el formulario {}: {source}", .path.display())]
    FormRead { path: PathBuf, source: io::Error },
    #[error("Formulario inválido {}: {source}", .path.display())]
    FormParse { path: PathBuf, source: serde_json::Error },
}

impl AppError {
    /// Código de salida de la CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Domain(e) if e.is_fatal() => 2,
            AppError::Domain(_) | AppError::FormRead { .. } | AppError::FormParse { .. } => 3,
            AppError::Core(CoreError::Spawn { .. }) => 5,
            AppError::Core(_) => 4,
        }
    }
}
