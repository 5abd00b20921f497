use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for loading a declaration index.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read declaration index '{path}'")]
    #[diagnostic(
        code(tsmock::index::io),
        help("export the index with your TypeScript tooling, or pass --index")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid declaration index '{path}'")]
    #[diagnostic(code(tsmock::index::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
