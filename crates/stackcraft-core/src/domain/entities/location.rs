//! Where the project goes and what it is called.

use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// A resolved project destination.
///
/// Built once from user input by [`ProjectLocation::resolve`]; downstream code
/// never re-derives the name from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocation {
    /// Package name written into the manifest (kebab-case).
    pub name: String,

    /// Absolute destination directory.
    pub path: PathBuf,

    /// True when the destination is the caller's working directory.
    pub in_place: bool,
}

impl ProjectLocation {
    /// Resolve `input` against `cwd`.
    ///
    /// * `.` scaffolds into `cwd`, naming the project after its directory.
    /// * Input containing `/`, or starting with `.` or `~`, is a path;
    ///   `~` expands to `home`. The name is the last path component.
    /// * Anything else is a bare name, created under `cwd`.
    pub fn resolve(input: &str, cwd: &Path, home: Option<&Path>) -> Result<Self, DomainError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }

        if input == "." {
            let basename = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or(DomainError::EmptyProjectName)?;
            return Ok(Self {
                name: normalize_name(basename)?,
                path: cwd.to_path_buf(),
                in_place: true,
            });
        }

        let (base, rest) = match input.strip_prefix('~') {
            Some(rest) => (home.unwrap_or(cwd), rest.trim_start_matches('/')),
            None => (cwd, input),
        };
        if !rest.chars().all(is_allowed_char) {
            return Err(DomainError::InvalidCharacters {
                input: input.to_string(),
            });
        }

        let is_path = input.contains('/') || input.starts_with('.') || input.starts_with('~');
        let path = normalize_path(&base.join(rest));
        let raw_name = if is_path {
            path.file_name()
                .and_then(|n| n.to_str())
                .ok_or(DomainError::EmptyProjectName)?
        } else {
            input
        };

        Ok(Self {
            name: normalize_name(raw_name)?,
            in_place: path == normalize_path(cwd),
            path,
        })
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.')
}

/// Lower-case, `_` → `-`; reject names that start or end with `-`.
fn normalize_name(raw: &str) -> Result<String, DomainError> {
    let name: String = raw
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c.to_ascii_lowercase() })
        .collect();

    if name.is_empty() {
        return Err(DomainError::EmptyProjectName);
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err(DomainError::InvalidProjectName {
            name,
            reason: "must not start or end with '-'".into(),
        });
    }
    if name.starts_with('.') {
        return Err(DomainError::InvalidProjectName {
            name,
            reason: "must not start with '.'".into(),
        });
    }
    Ok(name)
}

/// Lexically fold `.` and `..` components.
fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        PathBuf::from("/work/My_Service")
    }

    #[test]
    fn dot_scaffolds_in_place() {
        let loc = ProjectLocation::resolve(".", &cwd(), None).unwrap();
        assert!(loc.in_place);
        assert_eq!(loc.path, cwd());
        assert_eq!(loc.name, "my-service");
    }

    #[test]
    fn bare_name_is_created_under_cwd() {
        let loc = ProjectLocation::resolve("Api_Server", &cwd(), None).unwrap();
        assert!(!loc.in_place);
        assert_eq!(loc.path, PathBuf::from("/work/My_Service/Api_Server"));
        assert_eq!(loc.name, "api-server");
    }

    #[test]
    fn relative_path_takes_last_component() {
        let loc = ProjectLocation::resolve("./apps/billing", &cwd(), None).unwrap();
        assert_eq!(loc.path, PathBuf::from("/work/My_Service/apps/billing"));
        assert_eq!(loc.name, "billing");

        let up = ProjectLocation::resolve("../sibling", &cwd(), None).unwrap();
        assert_eq!(up.path, PathBuf::from("/work/sibling"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let loc =
            ProjectLocation::resolve("~/code/api", &cwd(), Some(Path::new("/home/dev"))).unwrap();
        assert_eq!(loc.path, PathBuf::from("/home/dev/code/api"));
        assert_eq!(loc.name, "api");
    }

    #[test]
    fn illegal_characters_are_rejected() {
        for input in ["my api!", "a@b", "name$"] {
            assert!(matches!(
                ProjectLocation::resolve(input, &cwd(), None),
                Err(DomainError::InvalidCharacters { .. })
            ));
        }
    }

    #[test]
    fn leading_or_trailing_hyphen_is_rejected() {
        assert!(matches!(
            ProjectLocation::resolve("-api", &cwd(), None),
            Err(DomainError::InvalidProjectName { .. })
        ));
        assert!(matches!(
            ProjectLocation::resolve("api_", &cwd(), None),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            ProjectLocation::resolve("   ", &cwd(), None),
            Err(DomainError::EmptyProjectName)
        );
    }

    #[test]
    fn path_back_to_cwd_counts_as_in_place() {
        let loc = ProjectLocation::resolve("./", &cwd(), None).unwrap();
        assert!(loc.in_place);
    }
}
