//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation request.
#[derive(Debug)]
pub struct GenerateReport {
    /// The mocked source file.
    pub source: PathBuf,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// What happened to the mock.
    pub result: GenerateResult,
}

/// Result of a generation request.
#[derive(Debug)]
pub enum GenerateResult {
    /// The mock was written to disk.
    Written { path: PathBuf, constant: String },
    /// Dry-run preview.
    Preview { path: PathBuf, content: String },
    /// The selection was cancelled; nothing was generated.
    Cancelled,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerateResult::Written { path, constant } => {
                out.preformatted(&format!("Generated {} from {}", constant, self.source.display()));
                out.added_item(&path.display().to_string());
            }
            GenerateResult::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.preformatted(content);
                out.newline();
                out.preformatted("Dry run: nothing was written");
            }
            GenerateResult::Cancelled => {
                out.preformatted("No declaration selected, nothing generated");
            }
        }
    }
}
