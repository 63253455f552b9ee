//! Estado crudo del formulario.
//!
//! Estas estructuras son la frontera con la capa de UI: guardan los valores
//! tal como los entregan los widgets (texto libre, enteros, casillas) y se
//! construyen completas antes de cualquier codificación. Los codificadores
//! son funciones puras sobre ellas.
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Tipo de entidad, decodificado una sola vez desde la etiqueta del selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Protein,
    Rna,
    Dna,
    Ligand,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Protein => "protein",
            EntityKind::Rna => "rna",
            EntityKind::Dna => "dna",
            EntityKind::Ligand => "ligand",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    /// Acepta el nombre simple (`"rna"`) y las etiquetas decoradas del
    /// selector (`"RNA 🧫"`), comparando el prefijo sin distinguir mayúsculas.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let lower = label.trim().to_lowercase();
        let kind = if lower.starts_with("protein") {
            EntityKind::Protein
        } else if lower.starts_with("rna") {
            EntityKind::Rna
        } else if lower.starts_with("dna") {
            EntityKind::Dna
        } else if lower.starts_with("ligand") {
            EntityKind::Ligand
        } else {
            return Err(DomainError::UnknownKindLabel(label.to_string()));
        };
        Ok(kind)
    }
}

/// Modo de inclusión del MSA no emparejado.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "text", rename_all = "lowercase")]
pub enum MsaMode {
    /// La herramienta genera el MSA: no se emite ninguna clave.
    #[default]
    Auto,
    /// MSA desactivado explícitamente.
    Disabled,
    /// Texto proporcionado por el usuario (puede ser vacío).
    Uploaded(String),
}

/// Una modificación: tipo libre y posición (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationForm {
    #[serde(rename = "type", default)]
    pub mod_type: String,
    #[serde(default = "first_position")]
    pub position: NonZeroU32,
}

fn first_position() -> NonZeroU32 {
    NonZeroU32::MIN
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateForm {
    pub mmcif: String,
    /// Lista de enteros separada por comas, sin parsear.
    pub query_indices: String,
    pub template_indices: String,
}

/// Valores de una entidad. Los campos que no aplican al tipo elegido se
/// ignoran, igual que los widgets ocultos del formulario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityForm {
    /// Etiqueta del selector de tipo.
    pub kind: String,
    /// IDs separados por comas.
    pub ids: String,
    pub sequence: String,
    pub modifications: Vec<ModificationForm>,
    pub msa: MsaMode,
    pub templates: Vec<TemplateForm>,
    pub ccd_codes: String,
    pub smiles: String,
}

impl Default for EntityForm {
    fn default() -> Self {
        Self { kind: EntityKind::Protein.to_string(),
               ids: String::new(),
               sequence: String::new(),
               modifications: Vec::new(),
               msa: MsaMode::Auto,
               templates: Vec::new(),
               ccd_codes: String::new(),
               smiles: String::new() }
    }
}

impl EntityForm {
    /// Decodifica la etiqueta de tipo de la entidad `index`.
    pub fn entity_kind(&self, index: usize) -> Result<EntityKind, DomainError> {
        self.kind
            .parse()
            .map_err(|_| DomainError::UnknownEntityKind { entity: index, label: self.kind.clone() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomForm {
    pub entity_id: String,
    /// `None` cuando el campo quedó sin valor.
    pub residue_id: Option<u32>,
    pub atom_name: String,
}

impl Default for AtomForm {
    fn default() -> Self {
        Self { entity_id: String::new(), residue_id: Some(1), atom_name: String::new() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BondForm {
    pub first: AtomForm,
    pub second: AtomForm,
}

/// Estado completo del formulario para un ciclo de render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobForm {
    pub name: String,
    /// Semillas separadas por comas, sin parsear.
    pub model_seeds: String,
    pub entities: Vec<EntityForm>,
    pub bonds: Vec<BondForm>,
    /// Bloque CCD en formato mmCIF.
    pub user_ccd: String,
}

impl Default for JobForm {
    fn default() -> Self {
        Self { name: "My AlphaFold Job".to_string(),
               model_seeds: "1,2,3".to_string(),
               entities: vec![EntityForm::default()],
               bonds: Vec::new(),
               user_ccd: String::new() }
    }
}
