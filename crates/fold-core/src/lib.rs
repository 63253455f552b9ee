//! fold-core: serialización y persistencia del documento de trabajo e
//! invocación síncrona de AlphaFold 3 en su contenedor.
pub mod errors;
pub mod execute;
pub mod hashing;
pub mod serialize;

pub use errors::CoreError;
pub use execute::{docker_command, CommandLine, CommandOutput, CommandRunner, ExecutionReport, ExecutionSettings,
                  Invoker, InvokerState, ProcessRunner};
pub use serialize::{parse_document, render_pretty, write_document, SavedDocument, INPUT_FILE_NAME};
