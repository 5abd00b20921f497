//! Path arithmetic for generated mock files.
//!
//! Everything here is lexical: no path is checked for existence.

use std::path::{Component, Path, PathBuf};

use tsmock_core::capitalize;

/// Prefix of every generated mock file name.
pub const MOCK_PREFIX: &str = "mock";

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. Leading `..` of relative paths are kept; `..` above
/// the root is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Module specifier that imports `source_file` from `generated_file`.
///
/// The specifier points from the generated file's directory to the source
/// file's directory joined with its stem (the extension is stripped), always
/// uses `/` and always starts with `./` or `../`.
pub fn relative_import_path(generated_file: &Path, source_file: &Path) -> String {
    let generated = normalize(generated_file);
    let source = normalize(source_file);

    let from_dir = generated.parent().unwrap_or_else(|| Path::new(""));
    let target = match source.file_stem() {
        Some(stem) => source.with_file_name(stem),
        None => source.clone(),
    };

    let relative = pathdiff::diff_paths(&target, from_dir).unwrap_or(target);
    to_specifier(&relative)
}

fn to_specifier(path: &Path) -> String {
    let joined = path
        .components()
        .map(|component| match component {
            Component::RootDir => String::new(),
            Component::CurDir => ".".to_string(),
            Component::ParentDir => "..".to_string(),
            Component::Prefix(prefix) => prefix.as_os_str().to_string_lossy().into_owned(),
            Component::Normal(part) => part.to_string_lossy().into_owned(),
        })
        .collect::<Vec<_>>()
        .join("/")
        .replace('\\', "/");

    if joined.is_empty() {
        ".".to_string()
    } else if joined == ".."
        || joined.starts_with("../")
        || joined.starts_with("./")
        || joined.starts_with('/')
    {
        joined
    } else {
        format!("./{}", joined)
    }
}

/// Location of the mock generated for `source_file`.
///
/// `mock_location` is resolved against the file path itself, so `..` refers
/// to the directory the file lives in. The mock is named after the file:
/// `user.ts` becomes `mockUser.ts`.
pub fn mock_file_path(source_file: &Path, mock_location: &str) -> PathBuf {
    let dir = normalize(&source_file.join(mock_location));
    let base = source_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    dir.join(format!("{}{}", MOCK_PREFIX, capitalize(&base)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/b/./c/../d")), PathBuf::from("/a/b/d"));
        assert_eq!(normalize(Path::new("/a/user.ts/..")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("../a/../../b")), PathBuf::from("../../b"));
        assert_eq!(normalize(Path::new("./a")), PathBuf::from("a"));
    }

    #[test]
    fn test_relative_import_sibling_directory() {
        let path = relative_import_path(
            Path::new("/project/src/__mocks__/mockUser.ts"),
            Path::new("/project/src/types/user.ts"),
        );
        assert_eq!(path, "../types/user");
    }

    #[test]
    fn test_relative_import_same_directory_keeps_dot_slash() {
        let path = relative_import_path(
            Path::new("/project/src/mockUser.ts"),
            Path::new("/project/src/user.ts"),
        );
        assert_eq!(path, "./user");
    }

    #[test]
    fn test_relative_import_identical_paths() {
        let path = relative_import_path(
            Path::new("/project/src/user.ts"),
            Path::new("/project/src/user.ts"),
        );
        assert_eq!(path, "./user");
    }

    #[test]
    fn test_relative_import_child_directory() {
        let path = relative_import_path(
            Path::new("/project/mockUser.ts"),
            Path::new("/project/src/models/user.ts"),
        );
        assert_eq!(path, "./src/models/user");
    }

    #[test]
    fn test_relative_import_strips_only_last_extension() {
        let path = relative_import_path(
            Path::new("/project/mocks/mockApi.ts"),
            Path::new("/project/types/api.d.ts"),
        );
        assert_eq!(path, "../types/api.d");
    }

    #[test]
    fn test_relative_import_strips_extension_regardless_of_kind() {
        for ext in ["ts", "tsx", "mts"] {
            let source = format!("/p/src/user.{}", ext);
            let path = relative_import_path(Path::new("/p/mocks/m.ts"), Path::new(&source));
            assert_eq!(path, "../src/user");
            assert!(!path.contains('\\'));
        }
    }

    #[test]
    fn test_relative_import_normalizes_dot_segments() {
        let path = relative_import_path(
            Path::new("/project/src/user.ts/../__mocks__/mockUser.ts"),
            Path::new("/project/src/./user.ts"),
        );
        assert_eq!(path, "../user");
    }

    #[test]
    fn test_mock_file_path_default_location() {
        let path = mock_file_path(Path::new("/project/src/user.ts"), "../__mocks__");
        assert_eq!(path, PathBuf::from("/project/src/__mocks__/mockUser.ts"));
    }

    #[test]
    fn test_mock_file_path_parent_location() {
        let path = mock_file_path(Path::new("/project/src/models/order.ts"), "../../../test");
        assert_eq!(path, PathBuf::from("/project/test/mockOrder.ts"));
    }

    #[test]
    fn test_mock_file_path_same_directory() {
        let path = mock_file_path(Path::new("/project/src/user.ts"), "..");
        assert_eq!(path, PathBuf::from("/project/src/mockUser.ts"));
    }
}
