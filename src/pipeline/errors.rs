use thiserror::Error;

/// Terminal failures of a report run. Each one is printed as a message; none abort the process.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("path cannot be empty")]
    EmptyPath,
    #[error("file does not exist: {path}")]
    FileNotFound {
        path: String
    },
    #[error("error processing file: {0:#}")]
    Processing(#[from] anyhow::Error)
}
