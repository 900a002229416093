//! Template directory discovery.
//!
//! # Resolution order
//!
//! Candidates are probed in this order, stopping at the first directory that
//! contains a `base/` template:
//!
//! 1. **Configured path** (`templates.local_path` in the config file).
//! 2. **`$STACKCRAFT_TEMPLATES_DIR`**, environment variable override.
//! 3. **`./templates`**, relative to the current working directory.
//! 4. **`<executable-dir>/templates`**, for installs that ship templates
//!    next to the binary.
//! 5. **`../templates`**, for `cargo run` from `target/debug/`.
//! 6. **The workspace `templates/` directory** baked in at compile time.
//!
//! Relative paths resolve against the working directory at call time.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

pub const TEMPLATES_DIR_ENV: &str = "STACKCRAFT_TEMPLATES_DIR";

/// Directory every valid template root must contain.
const MARKER_DIR: &str = "base";

/// Find the template root. `None` when no candidate holds a `base/` template;
/// the caller turns that into an actionable error.
#[instrument]
pub fn resolve_template_root(configured: Option<&Path>) -> Option<PathBuf> {
    let env_dir = std::env::var(TEMPLATES_DIR_ENV).ok();
    for candidate in candidate_paths(configured, env_dir.as_deref()) {
        debug!(path = %candidate.display(), "checking candidate templates path");
        if is_template_root(&candidate) {
            info!(path = %candidate.display(), "using templates directory");
            return Some(candidate);
        }
    }

    warn!(
        "no templates directory found; checked config, ${TEMPLATES_DIR_ENV}, \
         ./templates, <exe>/templates, ../templates and the bundled directory"
    );
    None
}

/// True when `path` looks like a template root.
pub fn is_template_root(path: &Path) -> bool {
    path.join(MARKER_DIR).is_dir()
}

/// Ordered candidates. Missing sources are omitted.
fn candidate_paths(configured: Option<&Path>, env_dir: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(6);

    if let Some(dir) = configured {
        paths.push(dir.to_path_buf());
    }

    if let Some(dir) = env_dir.filter(|d| !d.trim().is_empty()) {
        paths.push(PathBuf::from(dir));
    }

    paths.push(PathBuf::from("templates"));

    if let Some(exe_sibling) = exe_sibling_templates() {
        paths.push(exe_sibling);
    }

    paths.push(PathBuf::from("../templates"));

    paths.push(bundled_templates());

    paths
}

/// `<directory of current executable>/templates`, if the executable path
/// can be determined.
fn exe_sibling_templates() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
}

/// The `templates/` directory at the workspace root of this build.
pub fn bundled_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("templates")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_path_comes_first_then_env() {
        let paths = candidate_paths(Some(Path::new("/cfg/templates")), Some("/env/templates"));
        assert_eq!(paths[0], PathBuf::from("/cfg/templates"));
        assert_eq!(paths[1], PathBuf::from("/env/templates"));
        assert_eq!(paths[2], PathBuf::from("templates"));
        assert_eq!(paths.last(), Some(&bundled_templates()));
    }

    #[test]
    fn blank_env_value_is_ignored() {
        let paths = candidate_paths(None, Some("  "));
        assert_eq!(paths[0], PathBuf::from("templates"));
    }

    #[test]
    fn directory_without_base_is_not_a_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_template_root(dir.path()));
        std::fs::create_dir(dir.path().join("base")).unwrap();
        assert!(is_template_root(dir.path()));
    }

    #[test]
    fn bundled_templates_ship_with_the_workspace() {
        assert!(is_template_root(&bundled_templates()));
    }

    #[test]
    fn configured_root_wins_when_valid() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("base")).unwrap();
        assert_eq!(
            resolve_template_root(Some(dir.path())),
            Some(dir.path().to_path_buf())
        );
    }
}
