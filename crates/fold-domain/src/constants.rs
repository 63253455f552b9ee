//! Constantes del esquema de entrada de AlphaFold 3.

/// Valor fijo del campo `dialect`.
pub const DIALECT: &str = "alphafold3";
/// Versión del esquema que se emite en `version`.
pub const SCHEMA_VERSION: u32 = 1;
