//! Declaration lookups backed by a JSON index.
//!
//! The index lists, per source file, the files it imports and its top-level
//! declarations with their structural types:
//!
//! ```json
//! {
//!   "files": {
//!     "src/user.ts": {
//!       "imports": ["src/role.ts"],
//!       "declarations": [
//!         {
//!           "identifier": "User",
//!           "type": { "kind": "object", "fields": [
//!             { "name": "role", "type": { "kind": "reference", "name": "Role" } }
//!           ] }
//!         }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Relative paths are resolved against the directory of the index file.

use std::{
    collections::{HashSet, VecDeque},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Deserialize;
use tsmock_codegen::{DeclarationResolver, ResolveError, ResolveOptions, normalize};
use tsmock_ir::{Declaration, Field, TypeShape};

use crate::{Error, Result};

/// Index file name looked up when none is given.
pub const DEFAULT_INDEX_FILE: &str = "tsmock-index.json";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawIndex {
    #[serde(default)]
    files: IndexMap<String, RawFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFile {
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    declarations: Vec<Declaration>,
}

#[derive(Debug, Clone)]
struct SourceFile {
    imports: Vec<PathBuf>,
    declarations: Vec<Declaration>,
}

/// A [`DeclarationResolver`] over a declaration index.
#[derive(Debug, Clone)]
pub struct IndexResolver {
    root: PathBuf,
    files: IndexMap<PathBuf, SourceFile>,
}

impl IndexResolver {
    /// Load the index at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let absolute = std::path::absolute(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root = absolute.parent().unwrap_or_else(|| Path::new("/"));

        let resolver = Self::from_json(&content, root).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            index = %path.display(),
            files = resolver.files.len(),
            "loaded declaration index"
        );
        Ok(resolver)
    }

    /// Parse an index whose relative paths are resolved against `root`.
    pub fn from_json(content: &str, root: &Path) -> serde_json::Result<Self> {
        let raw: RawIndex = serde_json::from_str(content)?;
        let root = normalize(root);

        let files = raw
            .files
            .into_iter()
            .map(|(path, file)| {
                let source = SourceFile {
                    imports: file.imports.iter().map(|i| root_join(&root, i)).collect(),
                    declarations: file.declarations,
                };
                (root_join(&root, &path), source)
            })
            .collect();

        Ok(Self { root, files })
    }

    /// Indexed source files, in index order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    fn file(&self, source: &Path) -> std::result::Result<(&Path, &SourceFile), ResolveError> {
        let key = root_join(&self.root, source);
        self.files
            .get_key_value(&key)
            .map(|(path, file)| (path.as_path(), file))
            .ok_or(ResolveError::UnknownFile { path: key })
    }

    /// Find `name` in `from`, then in the files it imports, transitively.
    fn lookup(&self, name: &str, from: &Path) -> Option<(&Path, &Declaration)> {
        let (start, _) = self.files.get_key_value(from)?;
        let mut queue = VecDeque::from([start.as_path()]);
        let mut seen = HashSet::new();

        while let Some(path) = queue.pop_front() {
            if !seen.insert(path) {
                continue;
            }
            let Some((key, file)) = self.files.get_key_value(path) else {
                continue;
            };
            if let Some(declaration) = file.declarations.iter().find(|d| d.identifier == name) {
                return Some((key.as_path(), declaration));
            }
            queue.extend(file.imports.iter().map(PathBuf::as_path));
        }

        None
    }
}

fn root_join(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    normalize(&root.join(path))
}

impl DeclarationResolver for IndexResolver {
    fn list_declarations(
        &self,
        source: &Path,
        _options: &ResolveOptions,
    ) -> std::result::Result<Vec<Declaration>, ResolveError> {
        let (_, file) = self.file(source)?;
        Ok(file.declarations.clone())
    }

    fn resolve(
        &self,
        source: &Path,
        identifier: &str,
        options: &ResolveOptions,
    ) -> std::result::Result<Declaration, ResolveError> {
        let (path, file) = self.file(source)?;
        let declaration = file
            .declarations
            .iter()
            .find(|d| d.identifier == identifier)
            .ok_or_else(|| ResolveError::UnknownDeclaration {
                identifier: identifier.to_string(),
                path: path.to_path_buf(),
            })?;

        let mut expander = Expander {
            index: self,
            options,
            stack: vec![declaration.identifier.clone()],
        };
        let ty = expander.expand(&declaration.ty, path)?;

        Ok(Declaration {
            ty,
            ..declaration.clone()
        })
    }

    fn find_declaration(&self, name: &str, from: &Path) -> Option<Declaration> {
        let from = root_join(&self.root, from);
        if let Some((_, declaration)) = self.lookup(name, &from) {
            return Some(declaration.clone());
        }

        // Not reachable through imports: first match in index order.
        self.files
            .values()
            .flat_map(|file| &file.declarations)
            .find(|d| d.identifier == name)
            .cloned()
    }

    fn source_path_of(&self, declaration: &Declaration, from: &Path) -> Option<PathBuf> {
        let from = root_join(&self.root, from);
        if let Some((path, _)) = self
            .lookup(&declaration.identifier, &from)
            .filter(|(_, found)| *found == declaration)
        {
            return Some(path.to_path_buf());
        }

        self.files
            .iter()
            .find(|(_, file)| file.declarations.contains(declaration))
            .map(|(path, _)| path.clone())
    }
}

/// Replaces references with the shapes they name.
struct Expander<'a> {
    index: &'a IndexResolver,
    options: &'a ResolveOptions,
    /// Names being expanded; a name met again stays a reference.
    stack: Vec<String>,
}

impl Expander<'_> {
    fn expand(
        &mut self,
        ty: &TypeShape,
        file: &Path,
    ) -> std::result::Result<TypeShape, ResolveError> {
        let expanded = match ty {
            TypeShape::Reference { name } => return self.expand_reference(name, file),
            TypeShape::Object { fields } => TypeShape::Object {
                fields: fields
                    .iter()
                    .map(|field| {
                        Ok(Field {
                            ty: self.expand(&field.ty, file)?,
                            ..field.clone()
                        })
                    })
                    .collect::<std::result::Result<_, ResolveError>>()?,
            },
            TypeShape::Array { element } => TypeShape::array(self.expand(element, file)?),
            TypeShape::Tuple { elements } => TypeShape::Tuple {
                elements: self.expand_all(elements, file)?,
            },
            TypeShape::Union { variants } => TypeShape::Union {
                variants: self.expand_all(variants, file)?,
            },
            other => other.clone(),
        };
        Ok(expanded)
    }

    fn expand_all(
        &mut self,
        shapes: &[TypeShape],
        file: &Path,
    ) -> std::result::Result<Vec<TypeShape>, ResolveError> {
        shapes.iter().map(|shape| self.expand(shape, file)).collect()
    }

    fn expand_reference(
        &mut self,
        name: &str,
        file: &Path,
    ) -> std::result::Result<TypeShape, ResolveError> {
        if self.options.skips(name) || self.stack.iter().any(|n| n == name) {
            return Ok(TypeShape::reference(name));
        }

        let index = self.index;
        let Some((found_in, declaration)) = index.lookup(name, file) else {
            if self.options.break_on_unresolved_imports {
                return Err(ResolveError::Unresolved {
                    name: name.to_string(),
                    path: file.to_path_buf(),
                });
            }
            tracing::debug!(name, file = %file.display(), "reference left unresolved");
            return Ok(TypeShape::reference(name));
        };

        self.stack.push(name.to_string());
        let expanded = self.expand(&declaration.ty, found_in);
        self.stack.pop();
        expanded
    }
}
