//! AFusion
//!
//! Genera el JSON de entrada de AlphaFold 3 a partir del estado de un
//! formulario y lanza la predicción en su contenedor:
//! - `config`: rutas y opciones por defecto (entorno / `.env`).
//! - `errors`: errores de la aplicación y códigos de salida.
//! - `app`: las acciones de la interfaz (vista previa, guardar, ejecutar).
//!
//! El modelo y las reglas viven en `fold_domain`; la serialización y la
//! invocación en `fold_core`.

pub mod app;
pub mod config;
pub mod errors;

pub use fold_core;
pub use fold_domain;
