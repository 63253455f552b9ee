//! Serialización del documento de trabajo.
//!
//! El mismo texto alimenta la vista previa y el archivo en disco: JSON con
//! indentación de dos espacios y claves en el orden del esquema.
use std::fs;
use std::path::{Path, PathBuf};

use fold_domain::JobDocument;
use serde::Serialize;

use crate::errors::CoreError;
use crate::hashing::document_fingerprint;

/// Nombre fijo del archivo dentro del directorio de entrada.
pub const INPUT_FILE_NAME: &str = "fold_input.json";

/// Archivo escrito y la huella del contenido.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedDocument {
    pub path: PathBuf,
    pub fingerprint: String,
}

pub fn render_pretty(doc: &JobDocument) -> Result<String, CoreError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

pub fn parse_document(text: &str) -> Result<JobDocument, CoreError> {
    Ok(serde_json::from_str(text)?)
}

/// Crea `dir` si no existe y escribe (o sobrescribe) `dir/fold_input.json`.
/// Sin reintentos: el primer error se devuelve tal cual.
pub fn write_document(doc: &JobDocument, dir: &Path) -> Result<SavedDocument, CoreError> {
    let text = render_pretty(doc)?;
    fs::create_dir_all(dir).map_err(|source| CoreError::CreateDir { path: dir.to_path_buf(), source })?;
    let path = dir.join(INPUT_FILE_NAME);
    fs::write(&path, text.as_bytes()).map_err(|source| CoreError::Write { path: path.clone(), source })?;
    let fingerprint = document_fingerprint(doc)?;
    log::info!("archivo JSON guardado en {} (sha256 {})", path.display(), fingerprint);
    Ok(SavedDocument { path, fingerprint })
}
