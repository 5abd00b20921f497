//! End-to-end tests for mock generation with in-memory collaborators.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use tsmock_codegen::{
    DeclarationResolver, Error, MockGenerator, Outcome, ResolveError, ResolveOptions,
    RewriteError, Rewriter, Selection,
};
use tsmock_config::{Rules, Settings, Transformers};
use tsmock_core::Indent;
use tsmock_ir::{Declaration, Field, TypeShape};

/// Resolver over a fixed set of files.
#[derive(Default)]
struct MemoryResolver {
    files: HashMap<PathBuf, Vec<Declaration>>,
}

impl MemoryResolver {
    fn file(mut self, path: impl Into<PathBuf>, declarations: Vec<Declaration>) -> Self {
        self.files.insert(path.into(), declarations);
        self
    }
}

impl DeclarationResolver for MemoryResolver {
    fn list_declarations(
        &self,
        source: &Path,
        _options: &ResolveOptions,
    ) -> Result<Vec<Declaration>, ResolveError> {
        self.files
            .get(source)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownFile {
                path: source.to_path_buf(),
            })
    }

    fn resolve(
        &self,
        source: &Path,
        identifier: &str,
        options: &ResolveOptions,
    ) -> Result<Declaration, ResolveError> {
        self.list_declarations(source, options)?
            .into_iter()
            .find(|d| d.identifier == identifier)
            .ok_or_else(|| ResolveError::UnknownDeclaration {
                identifier: identifier.to_string(),
                path: source.to_path_buf(),
            })
    }

    fn find_declaration(&self, name: &str, _from: &Path) -> Option<Declaration> {
        self.files
            .values()
            .flatten()
            .find(|d| d.identifier == name)
            .cloned()
    }

    fn source_path_of(&self, declaration: &Declaration, _from: &Path) -> Option<PathBuf> {
        self.files
            .iter()
            .find(|(_, decls)| decls.contains(declaration))
            .map(|(path, _)| path.clone())
    }
}

/// Rewriter that returns the same expression for every shape.
struct FixedRewriter(&'static str);

impl Rewriter for FixedRewriter {
    fn rewrite(
        &self,
        _ty: &TypeShape,
        _transformers: &Transformers,
    ) -> Result<String, RewriteError> {
        Ok(self.0.to_string())
    }
}

struct FailingRewriter;

impl Rewriter for FailingRewriter {
    fn rewrite(
        &self,
        ty: &TypeShape,
        _transformers: &Transformers,
    ) -> Result<String, RewriteError> {
        Err(RewriteError {
            kind: ty.kind().to_string(),
            reason: "not supported".to_string(),
        })
    }
}

fn user_with_role() -> Declaration {
    Declaration::new(
        "User",
        TypeShape::object([
            Field::new("id", TypeShape::Number),
            Field::new("role", TypeShape::enumeration("Role", ["Admin", "Guest"])),
        ]),
    )
}

fn role() -> Declaration {
    Declaration::new("Role", TypeShape::enumeration("Role", ["Admin", "Guest"]))
}

fn settings(mock_location: &str, indent: Indent) -> Settings {
    Settings {
        mock_location: mock_location.to_string(),
        indent,
    }
}

#[test]
fn test_mock_with_enum_import_and_header() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("src/types/user.ts");
    let resolver = MemoryResolver::default()
        .file(&source, vec![user_with_role()])
        .file(dir.path().join("src/enums/role.ts"), vec![role()]);
    let rewriter = FixedRewriter("{ id: 0, role: Role.Admin }");
    let rules = Rules {
        header: Some("/* eslint-disable */".to_string()),
        ..Rules::default()
    };
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &rewriter, &rules, &settings);

    let plan = generator.plan(&source, "User").unwrap();

    assert_eq!(plan.path, dir.path().join("src/types/__mocks__/mockUser.ts"));
    assert!(plan.diagnostics.is_empty());
    insta::assert_snapshot!(plan.content, @r#"
/* eslint-disable */
import { User } from "../user"
import { Role } from "../../enums/role"

export const mockUser: User = {
  id: 0,
  role: Role.Admin
}
"#);
}

#[test]
fn test_default_export_with_wide_indent() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("src/order.ts");
    let order = Declaration::new(
        "Order",
        TypeShape::object([
            Field::new("id", TypeShape::String),
            Field::new(
                "lines",
                TypeShape::array(TypeShape::object([Field::new("sku", TypeShape::String)])),
            ),
        ]),
    )
    .default_export();
    let resolver = MemoryResolver::default().file(&source, vec![order]);
    let rewriter = FixedRewriter("{ id: \"\", lines: [{ sku: \"\" }] }");
    let rules = Rules::default();
    let settings = settings("../../test", Indent::Spaces(4));
    let generator = MockGenerator::new(&resolver, &rewriter, &rules, &settings);

    let plan = generator.plan(&source, "Order").unwrap();

    assert_eq!(plan.path, dir.path().join("test/mockOrder.ts"));
    insta::assert_snapshot!(plan.content, @r#"
import Order from "../src/order"

export const mockOrder: Order = {
    id: "",
    lines: [{
        sku: ""
    }]
}
"#);
}

#[test]
fn test_generate_writes_and_creates_directories() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("src/user.ts");
    let resolver = MemoryResolver::default()
        .file(&source, vec![user_with_role()])
        .file(dir.path().join("src/role.ts"), vec![role()]);
    let rewriter = FixedRewriter("{ id: 0, role: Role.Admin }");
    let rules = Rules::default();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &rewriter, &rules, &settings);

    let outcome = generator
        .generate(&source, Selection::Chosen("User".to_string()))
        .unwrap();

    let Outcome::Written(plan) = outcome else {
        panic!("expected a written mock");
    };
    let written = std::fs::read_to_string(&plan.path).unwrap();
    assert_eq!(written, plan.content);
    assert!(written.starts_with(
        "import { User } from \"../user\"\nimport { Role } from \"../role\""
    ));
    assert!(written.ends_with("}"));
}

#[test]
fn test_generate_overwrites_existing_mock() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("user.ts");
    let resolver = MemoryResolver::default().file(&source, vec![user_with_role()]);
    let rewriter = FixedRewriter("{ id: 1 }");
    let rules = Rules::default();
    let settings = settings("..", Indent::TYPESCRIPT);
    let generator = MockGenerator::new(&resolver, &rewriter, &rules, &settings);

    let target = dir.path().join("mockUser.ts");
    std::fs::write(&target, "stale").unwrap();

    generator
        .generate(&source, Selection::Chosen("User".to_string()))
        .unwrap();

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("import { User } from \"./user\""));
}

#[test]
fn test_destination_blocked_by_file_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("src/user.ts");
    std::fs::create_dir_all(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("src/__mocks__"), "not a directory").unwrap();

    let resolver = MemoryResolver::default().file(&source, vec![user_with_role()]);
    let rewriter = FixedRewriter("{ id: 0 }");
    let rules = Rules::default();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &rewriter, &rules, &settings);

    let err = generator
        .generate(&source, Selection::Chosen("User".to_string()))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Write(tsmock_core::Error::InvalidDestination { .. })
    ));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("src/__mocks__")).unwrap(),
        "not a directory"
    );
}

#[test]
fn test_empty_file_is_reported_without_writes() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("src/empty.ts");
    let resolver = MemoryResolver::default().file(&source, Vec::new());
    let rewriter = FixedRewriter("{}");
    let rules = Rules::default();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &rewriter, &rules, &settings);

    let err = generator.declarations(&source).unwrap_err();

    assert!(matches!(err, Error::NoDeclarations { .. }));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_empty_file_with_a_given_identifier() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("src/empty.ts");
    let resolver = MemoryResolver::default().file(&source, Vec::new());
    let rewriter = FixedRewriter("{}");
    let rules = Rules::default();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &rewriter, &rules, &settings);

    let err = generator
        .generate(&source, Selection::Chosen("User".to_string()))
        .unwrap_err();

    assert!(matches!(err, Error::NoDeclarations { .. }));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_missing_enum_is_a_warning() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("src/user.ts");
    let resolver = MemoryResolver::default().file(&source, vec![user_with_role()]);
    let rewriter = FixedRewriter("{ id: 0, role: Role.Admin }");
    let rules = Rules::default();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &rewriter, &rules, &settings);

    let plan = generator.plan(&source, "User").unwrap();

    assert_eq!(plan.imports.len(), 1);
    assert_eq!(plan.diagnostics.len(), 1);
    assert!(plan.diagnostics[0].severity.is_warning());
    assert!(!plan.content.contains("import { Role }"));
}

#[test]
fn test_rewrite_failure_aborts() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("src/user.ts");
    let resolver = MemoryResolver::default().file(&source, vec![user_with_role()]);
    let rules = Rules::default();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &FailingRewriter, &rules, &settings);

    let err = generator
        .generate(&source, Selection::Chosen("User".to_string()))
        .unwrap_err();

    assert!(matches!(err, Error::Rewrite(_)));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn test_unbalanced_expression_aborts() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("src/user.ts");
    let resolver = MemoryResolver::default().file(&source, vec![user_with_role()]);
    let rewriter = FixedRewriter("{ id: 0");
    let rules = Rules::default();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &rewriter, &rules, &settings);

    let err = generator
        .generate(&source, Selection::Chosen("User".to_string()))
        .unwrap_err();

    assert!(matches!(err, Error::Format(_)));
    assert!(!dir.path().join("src").exists());
}
