//! Generate operation - mock planning and writing.

use std::path::Path;

use tsmock_codegen::{
    DeclarationResolver, MockGenerator, Outcome, Result, Rewriter, Selection, paths::MOCK_PREFIX,
};

use crate::reports::{GenerateReport, GenerateResult};

/// Execute the generate operation.
///
/// With `dry_run` the mock is planned but not written.
pub fn generate<R, W>(
    generator: &MockGenerator<'_, R, W>,
    source: &Path,
    selection: Selection,
    dry_run: bool,
) -> Result<GenerateReport>
where
    R: DeclarationResolver + ?Sized,
    W: Rewriter + ?Sized,
{
    let plan = match selection {
        Selection::Cancelled => None,
        Selection::Chosen(identifier) if dry_run => {
            generator.declarations(source)?;
            Some(generator.plan(source, &identifier)?)
        }
        chosen => match generator.generate(source, chosen)? {
            Outcome::Written(plan) => Some(plan),
            Outcome::Cancelled => None,
        },
    };

    let Some(plan) = plan else {
        return Ok(GenerateReport {
            source: source.to_path_buf(),
            warnings: Vec::new(),
            result: GenerateResult::Cancelled,
        });
    };

    let warnings = plan
        .diagnostics
        .iter()
        .filter(|d| d.severity.is_warning())
        .map(|d| match &d.location {
            Some(loc) => format!("{}\n  --> {}", d.message, loc),
            None => d.message.clone(),
        })
        .collect();

    let result = if dry_run {
        GenerateResult::Preview {
            path: plan.path,
            content: plan.content,
        }
    } else {
        GenerateResult::Written {
            path: plan.path,
            constant: format!("{}{}", MOCK_PREFIX, plan.identifier),
        }
    };

    Ok(GenerateReport {
        source: source.to_path_buf(),
        warnings,
        result,
    })
}
