//! Ejecución síncrona de un proceso con stdout y stderr unificados.
use std::io::{self, BufRead, BufReader};
use std::process::{Child, Command};

use super::command::CommandLine;
use crate::errors::CoreError;

/// Código de salida (`None` si el proceso terminó por señal) y la salida
/// combinada completa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub output: String,
}

pub trait CommandRunner {
    /// Bloquea hasta que el proceso termina.
    fn run(&self, command: &CommandLine) -> Result<CommandOutput, CoreError>;
}

/// Lanza el programa directamente (sin shell). Ambos flujos escriben en la
/// misma tubería, que se lee línea a línea hasta EOF.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    fn spawn(command: &CommandLine) -> Result<(Child, io::PipeReader), CoreError> {
        let (reader, writer) = io::pipe().map_err(CoreError::Output)?;
        let stdout = writer.try_clone().map_err(CoreError::Output)?;
        // `cmd` se destruye al salir de la función: así no queda ningún
        // extremo de escritura abierto en este proceso y la lectura ve EOF.
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).stdout(stdout).stderr(writer);
        let child = cmd.spawn()
                       .map_err(|source| CoreError::Spawn { program: command.program.clone(), source })?;
        Ok((child, reader))
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandOutput, CoreError> {
        let (mut child, reader) = Self::spawn(command)?;
        let mut reader = BufReader::new(reader);
        let mut output = String::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            let n = match reader.read_until(b'\n', &mut line) {
                Ok(n) => n,
                Err(e) => {
                    let _ = child.wait();
                    return Err(CoreError::Output(e));
                }
            };
            if n == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&line);
            log::debug!("{}", text.trim_end());
            output.push_str(&text);
        }
        let status = child.wait().map_err(CoreError::Output)?;
        Ok(CommandOutput { exit_code: status.code(), output })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_merges_stdout_and_stderr_and_keeps_exit_code() {
        let cmd = CommandLine::new("sh", ["-c", "echo uno; echo dos 1>&2; echo tres; exit 3"]);
        let out = ProcessRunner.run(&cmd).unwrap();
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.output, "uno\ndos\ntres\n");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let cmd = CommandLine::new("definitely-not-a-real-program-af3", Vec::<String>::new());
        match ProcessRunner.run(&cmd) {
            Err(CoreError::Spawn { program, .. }) => assert_eq!(program, "definitely-not-a-real-program-af3"),
            other => panic!("se esperaba Spawn, llegó {other:?}"),
        }
    }
}
