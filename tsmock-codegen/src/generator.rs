//! The generation pipeline.
//!
//! ```text
//! resolve → rewrite → mock path → imports (enum scan) → assemble + prettify → write
//! ```
//!
//! Everything up to the write step is pure apart from resolver reads, so a
//! failed request leaves nothing on disk.

use std::path::{Path, PathBuf};

use tsmock_config::{Rules, Settings};
use tsmock_core::GeneratedFile;
use tsmock_ir::{Declaration, ImportRequirement};

use crate::{
    Diagnostic, Error, MockFile, Result,
    ast::Import,
    imports::aggregate_imports,
    paths::{mock_file_path, normalize, relative_import_path},
    resolver::{DeclarationResolver, ResolveOptions, Rewriter},
};

/// Which declaration to mock, as picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(String),
    /// The selection was abandoned; nothing is generated.
    Cancelled,
}

/// Result of a generation request.
#[derive(Debug)]
pub enum Outcome {
    Written(MockPlan),
    Cancelled,
}

/// A mock file ready to be written.
#[derive(Debug, Clone)]
pub struct MockPlan {
    /// Destination of the mock.
    pub path: PathBuf,
    /// Mocked declaration.
    pub identifier: String,
    /// Rendered file content.
    pub content: String,
    /// Imports of the file, primary declaration first.
    pub imports: Vec<ImportRequirement>,
    /// Recoverable problems met along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedFile for MockPlan {
    fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

impl MockPlan {
    /// Write the mock to disk and return where it went.
    pub fn persist(&self) -> Result<&Path> {
        GeneratedFile::write(self)?;
        tracing::info!(path = %self.path.display(), "mock written");
        Ok(&self.path)
    }
}

/// Generates mock files with injected collaborators and configuration.
///
/// # Example
///
/// ```ignore
/// let generator = MockGenerator::new(&resolver, &rewriter, &rules, &settings);
/// let plan = generator.plan(Path::new("/project/src/user.ts"), "User")?;
/// plan.persist()?;
/// ```
pub struct MockGenerator<'a, R: ?Sized, W: ?Sized> {
    resolver: &'a R,
    rewriter: &'a W,
    rules: &'a Rules,
    settings: &'a Settings,
}

impl<'a, R, W> MockGenerator<'a, R, W>
where
    R: DeclarationResolver + ?Sized,
    W: Rewriter + ?Sized,
{
    pub fn new(resolver: &'a R, rewriter: &'a W, rules: &'a Rules, settings: &'a Settings) -> Self {
        Self {
            resolver,
            rewriter,
            rules,
            settings,
        }
    }

    /// Resolver options derived from the rules module.
    pub fn options(&self) -> ResolveOptions {
        ResolveOptions::from_rules(self.rules)
    }

    /// Declarations of `source` that can be mocked.
    ///
    /// Fails with [`Error::NoDeclarations`] when there are none.
    pub fn declarations(&self, source: &Path) -> Result<Vec<Declaration>> {
        let declarations = self.resolver.list_declarations(source, &self.options())?;
        if declarations.is_empty() {
            return Err(Error::NoDeclarations {
                path: source.to_path_buf(),
            });
        }
        Ok(declarations)
    }

    /// Build the mock of `identifier` declared in `source` without writing it.
    ///
    /// `source` is normalized first, so `..` segments never reach the import
    /// set or the mock path.
    pub fn plan(&self, source: &Path, identifier: &str) -> Result<MockPlan> {
        let options = self.options();
        let source = normalize(source);
        let source = source.as_path();

        tracing::debug!(source = %source.display(), identifier, "resolving declaration");
        let declaration = self.resolver.resolve(source, identifier, &options)?;

        let expression = self
            .rewriter
            .rewrite(&declaration.ty, &self.rules.transformers)?;
        tracing::debug!(identifier, expression = %expression, "rewrote declaration");

        let path = mock_file_path(source, &self.settings.mock_location);

        let mut diagnostics = Vec::new();
        let enum_refs = self.resolver.scan_enum_references(&declaration.ty);
        let imports = aggregate_imports(
            &declaration,
            source,
            &enum_refs,
            self.resolver,
            &mut diagnostics,
        );

        let clauses = imports
            .iter()
            .map(|req| Import::from_requirement(req, relative_import_path(&path, &req.source)));

        let content = MockFile::new(&declaration.identifier, expression)
            .header_opt(self.rules.header_text())
            .imports(clauses)
            .render_with_indent(self.settings.indent)?;

        Ok(MockPlan {
            path,
            identifier: declaration.identifier,
            content,
            imports,
            diagnostics,
        })
    }

    /// Run a full request: plan the selected declaration and write it.
    ///
    /// A file without declarations fails with [`Error::NoDeclarations`], even
    /// when the identifier was given up front.
    pub fn generate(&self, source: &Path, selection: Selection) -> Result<Outcome> {
        match selection {
            Selection::Cancelled => {
                tracing::debug!("selection cancelled");
                Ok(Outcome::Cancelled)
            }
            Selection::Chosen(identifier) => {
                self.declarations(source)?;
                let plan = self.plan(source, &identifier)?;
                plan.persist()?;
                Ok(Outcome::Written(plan))
            }
        }
    }
}
