use std::path::PathBuf;

use thiserror::Error;

/// Every error the library can produce.
#[derive(Error, Debug)]
pub enum Error {
    /// A filesystem operation failed on the given path.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive file exists but is not valid JSON for the expected shape.
    #[error("archive {} is not valid: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize archive: {0}")]
    Encode(#[source] serde_json::Error),

    /// The underlying lopdf parser or writer returned an error.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("render error: {0}")]
    Render(String),

    /// A brand profile could not be found or parsed.
    #[error("brand '{name}': {reason}")]
    Brand { name: String, reason: String },

    #[error("config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("could not determine home directory")]
    NoHomeDir,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
