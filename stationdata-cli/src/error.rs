use std::path::PathBuf;

use thiserror::Error;

use stationdata_lib::PipelineError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// A required input file does not exist
    #[error("Invalid data path. '{}' does not exist", .0.display())]
    MissingInput(PathBuf),

    /// Catalog generation failed
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl CliError {
    pub(crate) fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput(path.into())
    }
}
