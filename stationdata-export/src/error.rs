use std::path::PathBuf;

/// Errors that can occur while loading a game export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("XML parse error in {path}: {source}")]
    Xml {
        path: PathBuf,
        source: quick_xml::Error,
    },

    #[error("Invalid export: {0}")]
    InvalidExport(String),
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Attach the file being read to a reader-level error.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::XmlParse(source) => Self::Xml {
                path: path.into(),
                source,
            },
            other => other,
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidExport(msg.into())
    }
}
