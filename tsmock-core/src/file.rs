use std::path::Path;

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the destination path
    fn path(&self) -> &Path;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any existing file
    fn write(&self) -> Result<()> {
        write_file(self.path(), &self.render())
    }
}

/// Make sure `path` is a directory, creating it (recursively) when missing.
///
/// Fails with [`Error::InvalidDestination`] when something that is not a
/// directory already sits at `path`.
pub fn ensure_dir(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::InvalidDestination {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(dir = %path.display(), "creating destination directory");
            std::fs::create_dir_all(path).map_err(|e| Error::io(path, e))
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
