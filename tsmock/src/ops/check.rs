//! Check operation - rules module and settings validation.

use std::path::Path;

use tsmock_config::{Result, RulesFile, Settings, Transformer};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing and validating are the check; a malformed file is returned as the
/// error of the corresponding crate.
pub fn check(explicit: Option<&Path>, root: &Path, config: &Path) -> Result<CheckReport> {
    let rules_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => RulesFile::find(root)?,
    };
    let rules_file = RulesFile::open(&rules_path)?;
    let settings = Settings::load(config)?;
    let rules = rules_file.rules();

    Ok(CheckReport {
        rules_path,
        config_path: config.is_file().then(|| config.to_path_buf()),
        settings,
        header: rules.header_text().map(str::to_string),
        do_not_resolve: rules.do_not_resolve.clone(),
        transformers: rules.transformers.iter().map(describe).collect(),
    })
}

/// One-line summary of a transformer rule.
fn describe(rule: &Transformer) -> String {
    let mut filters = String::new();
    if let Some(name) = &rule.name {
        filters.push_str(&format!(" name={}", name));
    }
    if let Some(field) = &rule.field {
        filters.push_str(&format!(" field={}", field));
    }
    format!("{}{} -> {}", rule.kind, filters, rule.value)
}
