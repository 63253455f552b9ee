//! Codificador de pares de átomos enlazados.
use crate::error::DomainError;
use crate::input::{AtomForm, BondForm};
use crate::model::{AtomRef, BondRecord};

fn atom_ref(atom: &AtomForm) -> Option<AtomRef> {
    if atom.entity_id.is_empty() || atom.atom_name.is_empty() {
        return None;
    }
    let residue = atom.residue_id.filter(|r| *r >= 1)?;
    Some(AtomRef(atom.entity_id.clone(), residue, atom.atom_name.clone()))
}

/// Ambos átomos deben estar completos (ID de entidad, residuo ≥ 1, nombre de
/// átomo); si falta algo el enlace se descarta.
pub fn encode_bond(index: usize, form: &BondForm) -> Result<BondRecord, DomainError> {
    match (atom_ref(&form.first), atom_ref(&form.second)) {
        (Some(a), Some(b)) => Ok(BondRecord(a, b)),
        _ => Err(DomainError::IncompleteBond { bond: index }),
    }
}
