//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone las rutas y
//! opciones por defecto de la ejecución de AlphaFold 3. Los argumentos de la
//! CLI tienen prioridad sobre estos valores.
use std::env;
use std::path::PathBuf;

use fold_core::execute::command::DEFAULT_IMAGE;
use fold_core::ExecutionSettings;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Rutas del host montadas en el contenedor y etapas a ejecutar.
    pub execution: ExecutionSettings,
}

impl AppConfig {
    /// Lee `AF_*` del entorno (tras cargar `.env`).
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let home = env::var("HOME").ok();
        Self::from_lookup(|key| env::var(key).ok(), home.as_deref())
    }

    /// Igual que `from_env` pero con una fuente de variables explícita.
    pub fn from_lookup<F>(lookup: F, home: Option<&str>) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let path = |key: &str, default: &str| {
            expand_home(&lookup(key).filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string()), home)
        };
        let flag = |key: &str| match lookup(key) {
            None => true,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                log::warn!("valor no reconocido para {key}: {raw:?}; se usa true");
                true
            }),
        };
        let image = lookup("AF_DOCKER_IMAGE").filter(|v| !v.is_empty())
                                             .unwrap_or_else(|| DEFAULT_IMAGE.to_string());
        let execution = ExecutionSettings { input_dir: path("AF_INPUT_PATH", "~/af_input"),
                                            output_dir: path("AF_OUTPUT_PATH", "~/af_output"),
                                            model_dir: path("AF_MODEL_DIR", "/path/to/models"),
                                            database_dir: path("AF_DATABASE_DIR", "/path/to/databases"),
                                            run_data_pipeline: flag("AF_RUN_DATA_PIPELINE"),
                                            run_inference: flag("AF_RUN_INFERENCE"),
                                            image };
        AppConfig { execution }
    }

    pub fn execution_settings(&self) -> ExecutionSettings {
        self.execution.clone()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Expande `~` y `~/…` con `home`; sin `home` la ruta queda intacta.
pub fn expand_home(raw: &str, home: Option<&str>) -> PathBuf {
    match (raw, home) {
        ("~", Some(h)) => PathBuf::from(h),
        (r, Some(h)) if r.starts_with("~/") => PathBuf::from(h).join(&r[2..]),
        _ => PathBuf::from(raw),
    }
}

/// Forzar carga temprana de .env desde la CLI.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| map.get(k).cloned(), Some("/home/mars"))
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]).execution;
        assert_eq!(c.input_dir, PathBuf::from("/home/mars/af_input"));
        assert_eq!(c.output_dir, PathBuf::from("/home/mars/af_output"));
        assert_eq!(c.model_dir, PathBuf::from("/path/to/models"));
        assert_eq!(c.database_dir, PathBuf::from("/path/to/databases"));
        assert!(c.run_data_pipeline && c.run_inference);
        assert_eq!(c.image, "alphafold3");
    }

    #[test]
    fn test_overrides_and_flags() {
        let c = config(&[("AF_INPUT_PATH", "/srv/in"),
                         ("AF_RUN_DATA_PIPELINE", "false"),
                         ("AF_RUN_INFERENCE", "quizas"),
                         ("AF_DOCKER_IMAGE", "af3:latest")]);
        assert_eq!(c.execution.input_dir, PathBuf::from("/srv/in"));
        assert!(!c.execution.run_data_pipeline);
        assert!(c.execution.run_inference);
        let s = c.execution_settings();
        assert_eq!(s.image, "af3:latest");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("~", Some("/h")), PathBuf::from("/h"));
        assert_eq!(expand_home("~/x", Some("/h")), PathBuf::from("/h/x"));
        assert_eq!(expand_home("~/x", None), PathBuf::from("~/x"));
        assert_eq!(expand_home("/abs", Some("/h")), PathBuf::from("/abs"));
    }
}
