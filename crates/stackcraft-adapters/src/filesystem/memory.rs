//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use stackcraft_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StackResult, StackcraftError},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the service under test owns another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create a file and all its parent directories (testing helper).
    pub fn seed(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_ancestors(&mut inner.directories, parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Snapshot of every file below `root`, keyed by relative path.
    pub fn snapshot(&self, root: impl AsRef<Path>) -> BTreeMap<PathBuf, String> {
        let root = root.as_ref();
        let inner = self.inner.read().unwrap();
        inner
            .files
            .iter()
            .filter_map(|(path, content)| {
                path.strip_prefix(root)
                    .ok()
                    .map(|rel| (rel.to_path_buf(), content.clone()))
            })
            .collect()
    }

    /// Number of create/write/append calls made through the port.
    pub fn write_count(&self) -> usize {
        self.inner.read().unwrap().writes
    }

    fn read(&self) -> StackResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> StackResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StackResult<()> {
        let mut inner = self.write()?;
        inner.writes += 1;
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StackResult<()> {
        let mut inner = self.write()?;
        ensure_parent(&inner, path)?;
        inner.writes += 1;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &str) -> StackResult<()> {
        let mut inner = self.write()?;
        ensure_parent(&inner, path)?;
        inner.writes += 1;
        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> StackResult<String> {
        let inner = self.read()?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn list_dir(&self, path: &Path) -> StackResult<Vec<PathBuf>> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Not a directory".into(),
            }
            .into());
        }
        let children: BTreeSet<PathBuf> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect();
        Ok(children.into_iter().collect())
    }

    fn walk_files(&self, root: &Path) -> StackResult<Vec<PathBuf>> {
        let inner = self.read()?;
        Ok(inner
            .files
            .keys()
            .filter_map(|p| p.strip_prefix(root).ok())
            .map(Path::to_path_buf)
            .collect())
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn ensure_parent(inner: &MemoryFilesystemInner, path: &Path) -> StackResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) => {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into())
        }
        _ => Ok(()),
    }
}

fn poisoned() -> StackcraftError {
    StackcraftError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/a.txt"), "x").is_err());
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/a.txt"), "x").unwrap();
        assert_eq!(fs.read_file("/p/a.txt").as_deref(), Some("x"));
    }

    #[test]
    fn list_dir_returns_direct_children_only() {
        let fs = MemoryFilesystem::new();
        fs.seed("/t/base/package.json", "{}");
        fs.seed("/t/base/src/index.ts", "");

        assert_eq!(
            fs.list_dir(Path::new("/t/base")).unwrap(),
            vec![PathBuf::from("/t/base/package.json"), PathBuf::from("/t/base/src")]
        );
    }

    #[test]
    fn walk_files_is_relative_and_sorted() {
        let fs = MemoryFilesystem::new();
        fs.seed("/t/x/src/b.ts", "");
        fs.seed("/t/x/a.json", "");
        fs.seed("/t/other/c.ts", "");

        assert_eq!(
            fs.walk_files(Path::new("/t/x")).unwrap(),
            vec![PathBuf::from("a.json"), PathBuf::from("src/b.ts")]
        );
    }

    #[test]
    fn append_accumulates() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.append_file(Path::new("/p/.env.example"), "A=1\n").unwrap();
        fs.append_file(Path::new("/p/.env.example"), "B=2\n").unwrap();
        assert_eq!(fs.read_file("/p/.env.example").as_deref(), Some("A=1\nB=2\n"));
        assert_eq!(fs.write_count(), 3);
    }
}
