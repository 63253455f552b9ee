//! fold-domain: modelo del documento de trabajo AlphaFold 3 y las reglas que
//! transforman el estado del formulario en ese documento.
//!
//! - `input`: estado crudo del formulario (lo que entrega la capa de UI).
//! - `model`: `JobDocument` y sus registros, con el orden de claves del esquema.
//! - `encode` / `bond`: codificadores puros por entidad y por enlace.
//! - `assemble`: ensamblado del documento completo con diagnósticos.
pub mod assemble;
pub mod bond;
pub mod constants;
pub mod encode;
pub mod error;
pub mod input;
pub mod model;

pub use assemble::{assemble, parse_model_seeds, Assembly};
pub use error::{Diagnostics, DomainError};
pub use input::{AtomForm, BondForm, EntityForm, EntityKind, JobForm, ModificationForm, MsaMode, TemplateForm};
pub use model::{AtomRef, BondRecord, EntityId, EntityWrapper, JobDocument};
