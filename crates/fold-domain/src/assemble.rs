//! Ensamblado del documento de trabajo a partir del formulario completo.
use crate::bond::encode_bond;
use crate::encode::encode_entity;
use crate::error::{Diagnostics, DomainError};
use crate::input::JobForm;
use crate::model::JobDocument;

/// Resultado de un ensamblado: el documento y los avisos recuperables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub document: JobDocument,
    pub diagnostics: Diagnostics,
}

/// Semillas de una lista separada por comas. Solo se conservan los tokens
/// formados únicamente por dígitos; el resto se ignora sin aviso.
pub fn parse_model_seeds(raw: &str) -> Vec<u64> {
    raw.split(',')
       .map(str::trim)
       .filter(|tok| !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit()))
       .filter_map(|tok| tok.parse::<u64>().ok())
       .collect()
}

/// Ensambla el documento. Sin semillas válidas no se genera documento
/// (`DomainError::NoModelSeeds`); cualquier otro problema solo descarta la
/// entidad o el enlace afectado y queda en `diagnostics`.
pub fn assemble(form: &JobForm) -> Result<Assembly, DomainError> {
    let seeds = parse_model_seeds(&form.model_seeds);
    if seeds.is_empty() {
        log::error!("semillas de modelo inválidas: {:?}", form.model_seeds);
        return Err(DomainError::NoModelSeeds);
    }

    let mut diagnostics = Diagnostics::new();
    let sequences = form.entities
                        .iter()
                        .enumerate()
                        .filter_map(|(i, entity)| encode_entity(i, entity, &mut diagnostics))
                        .collect();

    let mut bonds = Vec::with_capacity(form.bonds.len());
    for (b, bond) in form.bonds.iter().enumerate() {
        match encode_bond(b, bond) {
            Ok(rec) => bonds.push(rec),
            Err(e) => diagnostics.push(e),
        }
    }

    let document = JobDocument::new(form.name.clone(), seeds, sequences).with_bonds(bonds)
                                                                        .with_user_ccd(&form.user_ccd);
    log::debug!("documento ensamblado: {} entidades, {} enlaces, {} avisos",
                document.sequences.len(),
                document.bonded_atom_pairs.len(),
                diagnostics.len());
    Ok(Assembly { document, diagnostics })
}
