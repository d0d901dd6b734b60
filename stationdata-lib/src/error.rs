use std::path::PathBuf;

use thiserror::Error;

use stationdata_export::ExportError;

/// Errors that can occur while generating catalogs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source export could not be loaded
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Reading the patch file or writing a catalog failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The help patch file is not valid JSON of the expected shape
    #[error("Invalid help patch file {path}: {source}")]
    Patches {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
