//! afusion CLI: genera el JSON de entrada de AlphaFold 3 y lanza la predicción.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use afusion::app::{self, Rendered};
use afusion::config::{self, AppConfig};
use afusion::errors::AppError;
use clap::{Args, Parser, Subcommand};
use fold_core::{docker_command, ExecutionSettings, ProcessRunner};
use fold_domain::JobForm;

#[derive(Parser)]
#[command(name = "afusion",
          version,
          about = "Genera el JSON de entrada de AlphaFold 3 y ejecuta la predicción en Docker",
          after_long_help = "\
VARIABLES DE ENTORNO (también desde .env):
  AF_INPUT_PATH          directorio de entrada      (por defecto ~/af_input)
  AF_OUTPUT_PATH         directorio de salida       (por defecto ~/af_output)
  AF_MODEL_DIR           parámetros del modelo      (por defecto /path/to/models)
  AF_DATABASE_DIR        bases de datos             (por defecto /path/to/databases)
  AF_RUN_DATA_PIPELINE   true/false                 (por defecto true)
  AF_RUN_INFERENCE       true/false                 (por defecto true)
  AF_DOCKER_IMAGE        imagen del contenedor      (por defecto alphafold3)

CÓDIGOS DE SALIDA:
  0   correcto
  2   ninguna semilla de modelo válida
  3   formulario ilegible o inválido
  4   error de E/S al escribir el JSON
  5   no se pudo lanzar docker
  En `run`, si docker llega a ejecutarse, el código es el de la herramienta
  y puede coincidir con los anteriores; use `run --json` y `exitCode` para
  distinguirlos.

EJEMPLOS:
  afusion template > form.json
  afusion preview form.json
  afusion save form.json --input-dir ~/af_input
  afusion run form.json --skip-data-pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct PathArgs {
    /// Directorio de entrada (se monta en /root/af_input).
    #[arg(long)]
    input_dir: Option<PathBuf>,
    /// Directorio de salida (se monta en /root/af_output).
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Directorio de parámetros del modelo.
    #[arg(long)]
    model_dir: Option<PathBuf>,
    /// Directorio de bases de datos públicas.
    #[arg(long)]
    database_dir: Option<PathBuf>,
    /// Imagen Docker.
    #[arg(long)]
    image: Option<String>,
}

#[derive(Args, Debug, Default)]
struct StageArgs {
    /// No pasar --run_data_pipeline.
    #[arg(long)]
    skip_data_pipeline: bool,
    /// No pasar --run_inference.
    #[arg(long)]
    skip_inference: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Imprime el JSON generado a partir del formulario.
    Preview {
        form: PathBuf,
    },
    /// Escribe <input-dir>/fold_input.json.
    Save {
        form: PathBuf,
        #[command(flatten)]
        paths: PathArgs,
    },
    /// Imprime la línea de comando de Docker.
    #[command(name = "command")]
    ShowCommand {
        #[command(flatten)]
        paths: PathArgs,
        #[command(flatten)]
        stages: StageArgs,
    },
    /// Reescribe el JSON y ejecuta AlphaFold 3 (bloqueante).
    Run {
        form: PathBuf,
        #[command(flatten)]
        paths: PathArgs,
        #[command(flatten)]
        stages: StageArgs,
        /// Imprime el informe de la ejecución como JSON.
        #[arg(long)]
        json: bool,
    },
    /// Imprime un formulario por defecto para empezar.
    Template,
}

fn settings(config: &AppConfig, paths: &PathArgs, stages: &StageArgs) -> ExecutionSettings {
    let mut s = config.execution_settings();
    if let Some(p) = &paths.input_dir {
        s.input_dir = p.clone();
    }
    if let Some(p) = &paths.output_dir {
        s.output_dir = p.clone();
    }
    if let Some(p) = &paths.model_dir {
        s.model_dir = p.clone();
    }
    if let Some(p) = &paths.database_dir {
        s.database_dir = p.clone();
    }
    if let Some(image) = &paths.image {
        s.image = image.clone();
    }
    s.run_data_pipeline &= !stages.skip_data_pipeline;
    s.run_inference &= !stages.skip_inference;
    s
}

fn render_form(path: &Path) -> Result<Rendered, AppError> {
    let form = app::load_form(path)?;
    let rendered = app::render(&form)?;
    for d in rendered.diagnostics.iter() {
        eprintln!("[afusion] {d}");
    }
    Ok(rendered)
}

fn execute(cli: Cli, config: &AppConfig) -> Result<ExitCode, AppError> {
    match cli.command {
        Commands::Preview { form } => {
            let rendered = render_form(&form)?;
            println!("{}", rendered.json);
        }
        Commands::Save { form, paths } => {
            let rendered = render_form(&form)?;
            let saved = app::save(&rendered, &settings(config, &paths, &StageArgs::default()))?;
            for line in rendered.entity_summary() {
                eprintln!("[afusion] {line}");
            }
            println!("Archivo JSON guardado en {}", saved.path.display());
        }
        Commands::ShowCommand { paths, stages } => {
            println!("{}", docker_command(&settings(config, &paths, &stages)));
        }
        Commands::Run { form, paths, stages, json } => {
            let rendered = render_form(&form)?;
            let report = app::run(&rendered, &settings(config, &paths, &stages), ProcessRunner)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report).map_err(fold_core::CoreError::from)?);
            } else {
                println!("{}", app::run_summary(&report));
            }
            let secs = (report.finished_at - report.started_at).num_seconds();
            match report.exit_code {
                Some(code) => eprintln!("[afusion] ejecución {} completada en {secs}s (código {code})", report.run_id),
                None => eprintln!("[afusion] ejecución {} terminada por una señal", report.run_id),
            }
            let code = report.exit_code.unwrap_or(1).clamp(0, 255) as u8;
            return Ok(ExitCode::from(code));
        }
        Commands::Template => {
            let text = serde_json::to_string_pretty(&JobForm::default()).map_err(fold_core::CoreError::from)?;
            println!("{text}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Cargar .env antes del logger para que RUST_LOG pueda venir de ahí.
    config::init_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).format_timestamp_millis()
                                                                                       .init();
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    match execute(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_help_documents_exit_code_overlap() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("CÓDIGOS DE SALIDA"));
        assert!(help.contains("run --json"));
    }

    #[test]
    fn test_run_accepts_json_flag() {
        let cli = Cli::try_parse_from(["afusion", "run", "form.json", "--json", "--skip-inference"]).unwrap();
        match cli.command {
            Commands::Run { json, stages, .. } => {
                assert!(json);
                assert!(stages.skip_inference);
            }
            _ => panic!("se esperaba run"),
        }
    }
}
