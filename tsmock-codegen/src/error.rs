use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::{FormatError, ResolveError, RewriteError};

/// Result type for generation requests.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal generation errors. Each one aborts the request before anything is
/// written, except [`Error::Write`] which is raised by the write step itself.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no type declarations available in '{path}'")]
    #[diagnostic(
        code(tsmock::no_declarations),
        help("only interfaces, type aliases and enums can be mocked")
    )]
    NoDeclarations { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Rewrite(#[from] RewriteError),

    #[error("failed to format the mock expression")]
    #[diagnostic(code(tsmock::format))]
    Format(#[from] FormatError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Write(#[from] tsmock_core::Error),
}
