use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for file operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("path is not a directory: '{path}'")]
    #[diagnostic(
        code(tsmock::invalid_destination),
        help("point mock_location at a directory, or remove the file that is in the way")
    )]
    InvalidDestination { path: PathBuf },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(tsmock::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
