use thiserror::Error;

/// Errores del dominio. Salvo `NoModelSeeds`, todos son recuperables: la
/// entidad o el enlace afectado se descarta (o se corrige localmente) y el
/// ensamblado continúa.
///
/// Los índices se guardan en base 0 y se muestran en base 1, como en el
/// formulario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Entidad {}: el ID de entidad es obligatorio", .entity + 1)]
    MissingEntityId { entity: usize },

    #[error("Entidad {}: tipo de entidad desconocido: {label}", .entity + 1)]
    UnknownEntityKind { entity: usize, label: String },

    #[error("Entidad {}: indique solo uno de códigos CCD o cadena SMILES", .entity + 1)]
    LigandSourceConflict { entity: usize },

    #[error("Entidad {}: el ligando requiere códigos CCD o una cadena SMILES", .entity + 1)]
    LigandSourceMissing { entity: usize },

    #[error("Entidad {}, plantilla {}: las listas de índices deben ser enteros separados por comas", .entity + 1, .template + 1)]
    InvalidIndexList { entity: usize, template: usize },

    #[error("Enlace {}: todos los campos son obligatorios para definir un enlace", .bond + 1)]
    IncompleteBond { bond: usize },

    #[error("Indique al menos una semilla de modelo válida")]
    NoModelSeeds,

    #[error("Tipo de entidad desconocido: {0}")]
    UnknownKindLabel(String),
}

impl DomainError {
    /// `true` solo para el error que detiene el ensamblado completo.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::NoModelSeeds)
    }
}

/// Mensajes recuperables acumulados durante un ensamblado, en el orden en que
/// se producen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<DomainError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: DomainError) {
        log::debug!("aviso: {err}");
        self.items.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainError> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<DomainError> {
        self.items
    }
}
