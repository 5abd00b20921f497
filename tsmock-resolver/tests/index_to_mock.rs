//! Generation from a declaration index file through to the written mock.

use std::path::Path;

use tempfile::TempDir;
use tsmock_codegen::{Error, MockGenerator, Outcome, ResolveError, Selection};
use tsmock_config::{Rules, Settings};
use tsmock_resolver::{DEFAULT_INDEX_FILE, IndexResolver, RuleRewriter};

const INDEX: &str = r#"{
  "files": {
    "src/models/user.ts": {
      "imports": ["src/enums/role.ts"],
      "declarations": [
        {
          "identifier": "User",
          "type": {
            "kind": "object",
            "fields": [
              { "name": "id", "type": { "kind": "number" } },
              { "name": "email", "type": { "kind": "string" } },
              { "name": "role", "type": { "kind": "reference", "name": "Role" } },
              { "name": "created", "type": { "kind": "reference", "name": "Date" } },
              { "name": "tags", "type": { "kind": "array", "element": { "kind": "string" } } }
            ]
          }
        },
        {
          "identifier": "Invoice",
          "type": {
            "kind": "object",
            "fields": [
              { "name": "total", "type": { "kind": "reference", "name": "Money" } }
            ]
          }
        }
      ]
    },
    "src/enums/role.ts": {
      "declarations": [
        {
          "identifier": "Role",
          "type": {
            "kind": "enum",
            "name": "Role",
            "members": [{ "name": "Admin", "value": "\"ADMIN\"" }, { "name": "Member" }]
          }
        }
      ]
    }
  }
}"#;

const RULES: &str = r#"
header = "/* eslint-disable */"
do_not_resolve = ["Date"]

[[transformers]]
kind = "reference"
name = "Date"
value = "new Date(0)"

[[transformers]]
kind = "string"
field = "email"
value = "\"jane@example.com\""
"#;

fn project() -> (TempDir, IndexResolver, Rules) {
    let dir = TempDir::new().unwrap();
    let index_path = dir.path().join(DEFAULT_INDEX_FILE);
    std::fs::write(&index_path, INDEX).unwrap();

    let resolver = IndexResolver::open(&index_path).unwrap();
    let rules: Rules = RULES.parse().unwrap();
    (dir, resolver, rules)
}

#[test]
fn test_generate_user_mock() {
    let (dir, resolver, rules) = project();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &RuleRewriter, &rules, &settings);
    let source = dir.path().join("src/models/user.ts");

    let names: Vec<_> = generator
        .declarations(&source)
        .unwrap()
        .into_iter()
        .map(|d| d.identifier)
        .collect();
    assert_eq!(names, vec!["User", "Invoice"]);

    let outcome = generator
        .generate(&source, Selection::Chosen("User".to_string()))
        .unwrap();
    let Outcome::Written(plan) = outcome else {
        panic!("expected a written mock");
    };

    assert_eq!(
        plan.path,
        dir.path().join("src/models/__mocks__/mockUser.ts")
    );
    let written = std::fs::read_to_string(&plan.path).unwrap();
    insta::assert_snapshot!(written, @r#"
/* eslint-disable */
import { User } from "../user"
import { Role } from "../../enums/role"

export const mockUser: User = {
  id: 0,
  email: "jane@example.com",
  role: Role.Admin,
  created: new Date(0),
  tags: [""]
}
"#);
}

#[test]
fn test_unresolved_reference_aborts_without_writing() {
    let (dir, resolver, rules) = project();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &RuleRewriter, &rules, &settings);
    let source = dir.path().join("src/models/user.ts");

    let err = generator
        .generate(&source, Selection::Chosen("Invoice".to_string()))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Resolve(ResolveError::Unresolved { ref name, .. }) if name == "Money"
    ));
    assert!(!dir.path().join("src/models/__mocks__").exists());
}

#[test]
fn test_file_outside_the_index() {
    let (dir, resolver, rules) = project();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &RuleRewriter, &rules, &settings);

    let err = generator
        .declarations(&dir.path().join("src/other.ts"))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Resolve(ResolveError::UnknownFile { .. })
    ));
    assert!(!dir.path().join("src/__mocks__").exists());
}

const SHADOWED_ROLE: &str = r#"{
  "files": {
    "src/legacy/role.ts": {
      "declarations": [
        { "identifier": "Role", "type": { "kind": "enum", "name": "Role", "members": [{ "name": "Old" }] } }
      ]
    },
    "src/enums/role.ts": {
      "declarations": [
        { "identifier": "Role", "type": { "kind": "enum", "name": "Role", "members": [{ "name": "Admin" }] } }
      ]
    },
    "src/models/user.ts": {
      "imports": ["src/enums/role.ts"],
      "declarations": [
        {
          "identifier": "User",
          "type": {
            "kind": "object",
            "fields": [{ "name": "role", "type": { "kind": "reference", "name": "Role" } }]
          }
        }
      ]
    }
  }
}"#;

#[test]
fn test_enum_import_comes_from_the_imported_file() {
    let resolver = IndexResolver::from_json(SHADOWED_ROLE, Path::new("/p")).unwrap();
    let rules = Rules::default();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &RuleRewriter, &rules, &settings);

    let plan = generator
        .plan(Path::new("/p/src/models/user.ts"), "User")
        .unwrap();

    assert_eq!(plan.imports[1].source, Path::new("/p/src/enums/role.ts"));
    insta::assert_snapshot!(plan.content, @r#"
import { User } from "../user"
import { Role } from "../../enums/role"

export const mockUser: User = {
  role: Role.Admin
}
"#);
}

#[test]
fn test_mocked_enum_is_imported_once_through_a_dotted_path() {
    let resolver = IndexResolver::from_json(SHADOWED_ROLE, Path::new("/p")).unwrap();
    let rules = Rules::default();
    let settings = Settings::default();
    let generator = MockGenerator::new(&resolver, &RuleRewriter, &rules, &settings);

    let plan = generator
        .plan(Path::new("/p/src/enums/../enums/role.ts"), "Role")
        .unwrap();

    assert_eq!(plan.path, Path::new("/p/src/enums/__mocks__/mockRole.ts"));
    assert_eq!(plan.imports.len(), 1);
    assert!(plan.diagnostics.iter().all(|d| !d.severity.is_warning()));
    insta::assert_snapshot!(plan.content, @r#"
import { Role } from "../role"

export const mockRole: Role = Role.Admin
"#);
}
