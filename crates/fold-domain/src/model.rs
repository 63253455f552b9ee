//! Documento de trabajo AlphaFold 3.
//!
//! El orden de declaración de los campos es el orden de las claves en el JSON
//! emitido. Los campos opcionales se omiten (no se emiten vacíos): para la
//! herramienta externa la ausencia y el valor vacío no significan lo mismo.
use serde::{Deserialize, Serialize};

use crate::constants::{DIALECT, SCHEMA_VERSION};
use crate::input::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDocument {
    pub name: String,
    pub model_seeds: Vec<u64>,
    pub sequences: Vec<EntityWrapper>,
    pub dialect: String,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bonded_atom_pairs: Vec<BondRecord>,
    #[serde(rename = "userCCD", default, skip_serializing_if = "Option::is_none")]
    pub user_ccd: Option<String>,
}

impl JobDocument {
    /// Documento sin enlaces ni CCD, con `dialect`/`version` fijos.
    pub fn new(name: impl Into<String>, model_seeds: Vec<u64>, sequences: Vec<EntityWrapper>) -> Self {
        Self { name: name.into(),
               model_seeds,
               sequences,
               dialect: DIALECT.to_string(),
               version: SCHEMA_VERSION,
               bonded_atom_pairs: Vec::new(),
               user_ccd: None }
    }

    pub fn with_bonds(mut self, bonds: Vec<BondRecord>) -> Self {
        self.bonded_atom_pairs = bonds;
        self
    }

    /// Texto vacío equivale a no tener CCD.
    pub fn with_user_ccd(mut self, ccd: &str) -> Self {
        self.user_ccd = if ccd.is_empty() { None } else { Some(ccd.to_string()) };
        self
    }
}

/// Uno o varios identificadores de cadena. Un único ID se emite como escalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Single(String),
    Many(Vec<String>),
}

impl EntityId {
    /// `None` si no hay tokens; nunca produce una lista vacía.
    pub fn from_tokens(mut tokens: Vec<String>) -> Option<Self> {
        match tokens.len() {
            0 => None,
            1 => tokens.pop().map(EntityId::Single),
            _ => Some(EntityId::Many(tokens)),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        match self {
            EntityId::Single(id) => std::slice::from_ref(id),
            EntityId::Many(ids) => ids,
        }
    }
}

/// Objeto de una sola clave (`protein`, `rna`, `dna` o `ligand`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityWrapper {
    Protein(ProteinRecord),
    Rna(RnaRecord),
    Dna(DnaRecord),
    Ligand(LigandRecord),
}

impl EntityWrapper {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityWrapper::Protein(_) => EntityKind::Protein,
            EntityWrapper::Rna(_) => EntityKind::Rna,
            EntityWrapper::Dna(_) => EntityKind::Dna,
            EntityWrapper::Ligand(_) => EntityKind::Ligand,
        }
    }

    pub fn id(&self) -> &EntityId {
        match self {
            EntityWrapper::Protein(r) => &r.id,
            EntityWrapper::Rna(r) => &r.id,
            EntityWrapper::Dna(r) => &r.id,
            EntityWrapper::Ligand(r) => &r.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinModification {
    pub ptm_type: String,
    pub ptm_position: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NucleotideModification {
    pub modification_type: String,
    pub base_position: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub mmcif: String,
    pub query_indices: Vec<i64>,
    pub template_indices: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinRecord {
    pub id: EntityId,
    pub sequence: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifications: Vec<ProteinModification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unpaired_msa: Option<String>,
    /// Solo presente (y vacío) cuando el MSA está desactivado.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paired_msa: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<Template>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RnaRecord {
    pub id: EntityId,
    pub sequence: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifications: Vec<NucleotideModification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unpaired_msa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnaRecord {
    pub id: EntityId,
    pub sequence: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifications: Vec<NucleotideModification>,
}

/// Origen químico del ligando: exactamente uno de los dos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LigandSource {
    #[serde(rename = "ccdCodes")]
    CcdCodes(Vec<String>),
    #[serde(rename = "smiles")]
    Smiles(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LigandRecord {
    pub id: EntityId,
    #[serde(flatten)]
    pub source: LigandSource,
}

/// `[entityId, residueId, atomName]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomRef(pub String, pub u32, pub String);

/// Par de átomos enlazados, emitido como arreglo de dos tripletas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRecord(pub AtomRef, pub AtomRef);
