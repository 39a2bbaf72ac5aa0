use crate::domain::ports::{DirEntryInfo, FileSystem};
use std::fs;
use std::io;
use std::path::Path;

/// `FileSystem` backed directly by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // mtime is only used for ordering; a missing one sorts first
            let modified = entry.metadata().and_then(|m| m.modified()).ok();
            entries.push(DirEntryInfo {
                path: entry.path(),
                file_name: entry.file_name().into_string().ok(),
                modified,
            });
        }
        Ok(entries)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_dir_lists_direct_children_only() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("app.css"), "body{}").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested").join("inner.js"), "x").unwrap();

        let fs_impl = LocalFileSystem::new();
        let mut names: Vec<String> = fs_impl
            .read_dir(temp_dir.path())
            .unwrap()
            .into_iter()
            .filter_map(|e| e.file_name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["app.css".to_string(), "nested".to_string()]);
    }

    #[test]
    fn test_read_dir_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = LocalFileSystem
            .read_dir(&temp_dir.path().join("absent"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_create_dir_all_is_idempotent_and_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let media = temp_dir.path().join("ext").join("media");

        LocalFileSystem.create_dir_all(&media).unwrap();
        LocalFileSystem.create_dir_all(&media).unwrap();

        assert!(LocalFileSystem.is_dir(&media));
    }

    #[test]
    fn test_rename_overwrites_target() {
        let temp_dir = TempDir::new().unwrap();
        let from = temp_dir.path().join("a.js");
        let to = temp_dir.path().join("main.js");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "old").unwrap();

        LocalFileSystem.rename(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read_to_string(&to).unwrap(), "new");
    }
}
