//! Codificadores de entidades: estado de una entidad del formulario →
//! `EntityWrapper`.
//!
//! Reglas clave:
//! - Los IDs se parten por comas (quitando solo el espacio pegado a cada
//!   coma), sin deduplicar y conservando tokens vacíos.
//! - La secuencia no se valida contra ningún alfabeto; vacía se acepta.
//! - Un error de formato en una plantilla se corrige localmente; un ligando
//!   sin origen (o con ambos) descarta la entidad.
use std::num::ParseIntError;

use crate::error::{Diagnostics, DomainError};
use crate::input::{EntityForm, EntityKind, ModificationForm, MsaMode, TemplateForm};
use crate::model::{DnaRecord, EntityId, EntityWrapper, LigandRecord, LigandSource, NucleotideModification,
                   ProteinModification, ProteinRecord, RnaRecord, Template};

/// Parte una lista separada por comas. Solo se elimina el espacio adyacente a
/// cada coma; el espacio inicial y final del valor completo se conserva.
pub fn split_ids(raw: &str) -> Vec<String> {
    let pieces: Vec<&str> = raw.split(',').collect();
    let last = pieces.len().saturating_sub(1);
    pieces.iter()
          .enumerate()
          .map(|(i, piece)| {
              let mut p = *piece;
              if i > 0 {
                  p = p.trim_start();
              }
              if i < last {
                  p = p.trim_end();
              }
              p.to_string()
          })
          .collect()
}

/// Lista de índices enteros separada por comas; los tokens vacíos se saltan.
pub fn parse_index_list(raw: &str) -> Result<Vec<i64>, ParseIntError> {
    raw.split(',')
       .map(str::trim)
       .filter(|tok| !tok.is_empty())
       .map(str::parse::<i64>)
       .collect()
}

/// Codifica la entidad `index`. Devuelve `None` (y deja el motivo en `diag`)
/// cuando la entidad debe omitirse del documento.
pub fn encode_entity(index: usize, form: &EntityForm, diag: &mut Diagnostics) -> Option<EntityWrapper> {
    if form.ids.is_empty() {
        diag.push(DomainError::MissingEntityId { entity: index });
        return None;
    }
    let kind = match form.entity_kind(index) {
        Ok(kind) => kind,
        Err(e) => {
            diag.push(e);
            return None;
        }
    };
    let Some(id) = EntityId::from_tokens(split_ids(&form.ids)) else {
        diag.push(DomainError::MissingEntityId { entity: index });
        return None;
    };
    log::debug!("codificando entidad {} ({kind})", index + 1);
    match kind {
        EntityKind::Protein => Some(EntityWrapper::Protein(encode_protein(index, id, form, diag))),
        EntityKind::Rna => Some(EntityWrapper::Rna(encode_rna(id, form))),
        EntityKind::Dna => Some(EntityWrapper::Dna(encode_dna(id, form))),
        EntityKind::Ligand => match encode_ligand(index, id, form) {
            Ok(rec) => Some(EntityWrapper::Ligand(rec)),
            Err(e) => {
                diag.push(e);
                None
            }
        },
    }
}

/// `(unpairedMsa, pairedMsa)` según el modo elegido.
fn msa_fields(mode: &MsaMode) -> (Option<String>, Option<String>) {
    match mode {
        MsaMode::Auto => (None, None),
        MsaMode::Disabled => (Some(String::new()), Some(String::new())),
        MsaMode::Uploaded(text) => (Some(text.clone()), None),
    }
}

fn nucleotide_modifications(mods: &[ModificationForm]) -> Vec<NucleotideModification> {
    mods.iter()
        .map(|m| NucleotideModification { modification_type: m.mod_type.clone(),
                                          base_position: m.position.get() })
        .collect()
}

pub fn encode_protein(index: usize, id: EntityId, form: &EntityForm, diag: &mut Diagnostics) -> ProteinRecord {
    let modifications = form.modifications
                            .iter()
                            .map(|m| ProteinModification { ptm_type: m.mod_type.clone(),
                                                           ptm_position: m.position.get() })
                            .collect();
    let (unpaired_msa, paired_msa) = msa_fields(&form.msa);
    let templates = form.templates
                        .iter()
                        .enumerate()
                        .map(|(k, t)| encode_template(index, k, t, diag))
                        .collect();
    ProteinRecord { id,
                    sequence: form.sequence.clone(),
                    modifications,
                    unpaired_msa,
                    paired_msa,
                    templates }
}

/// Si cualquiera de las dos listas no parsea, ambas quedan vacías y la
/// plantilla se emite igualmente.
pub fn encode_template(entity: usize, template: usize, form: &TemplateForm, diag: &mut Diagnostics) -> Template {
    let parsed = parse_index_list(&form.query_indices)
        .and_then(|q| parse_index_list(&form.template_indices).map(|t| (q, t)));
    let (query_indices, template_indices) = match parsed {
        Ok(lists) => lists,
        Err(_) => {
            diag.push(DomainError::InvalidIndexList { entity, template });
            (Vec::new(), Vec::new())
        }
    };
    Template { mmcif: form.mmcif.clone(), query_indices, template_indices }
}

pub fn encode_rna(id: EntityId, form: &EntityForm) -> RnaRecord {
    let (unpaired_msa, _) = msa_fields(&form.msa);
    RnaRecord { id,
                sequence: form.sequence.clone(),
                modifications: nucleotide_modifications(&form.modifications),
                unpaired_msa }
}

pub fn encode_dna(id: EntityId, form: &EntityForm) -> DnaRecord {
    DnaRecord { id,
                sequence: form.sequence.clone(),
                modifications: nucleotide_modifications(&form.modifications) }
}

pub fn encode_ligand(index: usize, id: EntityId, form: &EntityForm) -> Result<LigandRecord, DomainError> {
    let source = match (form.ccd_codes.is_empty(), form.smiles.is_empty()) {
        (false, false) => return Err(DomainError::LigandSourceConflict { entity: index }),
        (true, true) => return Err(DomainError::LigandSourceMissing { entity: index }),
        (false, true) => LigandSource::CcdCodes(split_ids(&form.ccd_codes)),
        (true, false) => LigandSource::Smiles(form.smiles.clone()),
    };
    Ok(LigandRecord { id, source })
}
