//! Assembly of a mock file.
//!
//! A mock file has three parts, rendered in order:
//!
//! ```text
//! <optional header>
//! <import clauses, one per line>
//!
//! export const mock<Name>: <Name> = <expression>
//! ```

use tsmock_core::Indent;

use crate::{
    FormatError,
    ast::{Const, Import},
    format::prettify,
    paths::MOCK_PREFIX,
};

/// A structured representation of a mock file.
///
/// # Example
///
/// ```
/// use tsmock_codegen::{MockFile, ast::Import};
///
/// let file = MockFile::new("User", "{ id: 0 }")
///     .import(Import::named("User", "../user"))
///     .render();
///
/// assert_eq!(
///     file,
///     "import { User } from \"../user\"\n\nexport const mockUser: User = { id: 0 }"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockFile {
    identifier: String,
    expression: String,
    header: Option<String>,
    imports: Vec<Import>,
}

impl MockFile {
    /// Create a mock of `identifier` with the given literal expression.
    pub fn new(identifier: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            expression: expression.into(),
            header: None,
            imports: Vec::new(),
        }
    }

    /// Set the header text.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the header text if there is one.
    pub fn header_opt(mut self, header: Option<&str>) -> Self {
        self.header = header.map(str::to_string);
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Name of the exported constant (`mock<Identifier>`).
    pub fn constant_name(&self) -> String {
        format!("{}{}", MOCK_PREFIX, self.identifier)
    }

    /// Render the file with the expression as given.
    pub fn render(&self) -> String {
        self.assemble(&self.expression)
    }

    /// Render the file with the expression pretty-printed.
    ///
    /// Only the expression is re-flowed; header and imports are kept as is.
    pub fn render_with_indent(&self, indent: Indent) -> Result<String, FormatError> {
        let expression = prettify(&self.expression, indent)?;
        Ok(self.assemble(&expression))
    }

    fn assemble(&self, expression: &str) -> String {
        let mut out = String::new();

        // 1. Header
        if let Some(header) = &self.header {
            out.push_str(header);
            out.push('\n');
        }

        // 2. Imports, then a blank line
        let imports: Vec<String> = self.imports.iter().map(Import::build).collect();
        out.push_str(&imports.join("\n"));
        out.push_str("\n\n");

        // 3. The mock constant
        let constant = Const::new(self.constant_name(), expression).ty(&self.identifier);
        out.push_str(&constant.build());

        out
    }
}
