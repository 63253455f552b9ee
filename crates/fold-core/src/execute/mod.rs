//! Invocación de la herramienta externa.
pub mod command;
pub mod invoker;
pub mod runner;

pub use command::{docker_command, CommandLine, ExecutionSettings};
pub use invoker::{ExecutionReport, Invoker, InvokerState};
pub use runner::{CommandOutput, CommandRunner, ProcessRunner};
