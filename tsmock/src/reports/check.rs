//! Check command report data structures.

use std::path::PathBuf;

use tsmock_config::Settings;

use super::output::{Output, Report};

/// Report data from rules and settings validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the rules module.
    pub rules_path: PathBuf,
    /// Path to the settings file, if one exists.
    pub config_path: Option<PathBuf>,
    /// Effective settings.
    pub settings: Settings,
    /// Configured header text.
    pub header: Option<String>,
    /// Names kept as references.
    pub do_not_resolve: Vec<String>,
    /// Transformer rules, in matching order.
    pub transformers: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.rules_path.display()));
        out.newline();

        out.section("Settings");
        let source = match &self.config_path {
            Some(path) => path.display().to_string(),
            None => "defaults".to_string(),
        };
        out.key_value_indented("source", &source);
        out.key_value_indented("mock_location", &self.settings.mock_location);
        out.key_value_indented("indent", &self.settings.indent.to_string());

        if let Some(header) = &self.header {
            out.newline();
            out.section("Header");
            out.preformatted(header);
        }

        if !self.do_not_resolve.is_empty() {
            out.newline();
            out.section("Not resolved");
            for name in &self.do_not_resolve {
                out.list_item(name);
            }
        }

        out.newline();
        let count = self.transformers.len();
        out.section(&format!(
            "{} transformer{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for transformer in &self.transformers {
            out.list_item(transformer);
        }
    }
}
