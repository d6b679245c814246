//! Standard file system adapter implementation.

use crate::error::{Result, SdlcError};
use crate::tools::fs::FsAdapter;
use std::path::Path;

/// Standard file system adapter using `std::fs`.
#[derive(Debug, Default)]
pub struct StdFsAdapter;

impl StdFsAdapter {
    /// Creates a new standard file system adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FsAdapter for StdFsAdapter {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SdlcError::PathNotFound(path.to_path_buf())
            } else {
                SdlcError::FileReadError(format!("{}: {}", path.display(), e))
            }
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            self.create_dir_all(parent)?;
        }

        std::fs::write(path, content).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                SdlcError::PermissionDenied(path.display().to_string())
            } else {
                SdlcError::FileWriteError(format!("{}: {}", path.display(), e))
            }
        })
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Err(SdlcError::PathNotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(SdlcError::InvalidPath(path.to_path_buf()));
        }

        std::fs::read_dir(path)
            .map_err(|e| SdlcError::FileReadError(format!("{}: {}", path.display(), e)))?
            .map(|entry| {
                entry
                    .map(|e| e.file_name().to_string_lossy().to_string())
                    .map_err(|e| {
                        SdlcError::FileReadError(format!("failed to read directory entry: {}", e))
                    })
            })
            .collect()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                SdlcError::PermissionDenied(path.display().to_string())
            } else {
                SdlcError::FileWriteError(format!("{}: {}", path.display(), e))
            }
        })
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        std::fs::rename(from, to).map_err(|e| {
            SdlcError::FileWriteError(format!(
                "{} -> {}: {}",
                from.display(),
                to.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let fs = StdFsAdapter::new();
        let nested = temp.path().join("a/b/file.md");

        fs.write(&nested, "content").unwrap();
        assert_eq!(fs.read_to_string(&nested).unwrap(), "content");
    }

    #[test]
    fn test_read_missing_file_is_path_not_found() {
        let temp = TempDir::new().unwrap();
        let fs = StdFsAdapter::new();

        let result = fs.read_to_string(&temp.path().join("missing.md"));
        assert!(matches!(result.unwrap_err(), SdlcError::PathNotFound(_)));
    }

    #[test]
    fn test_list_dir_returns_entry_names() {
        let temp = TempDir::new().unwrap();
        let fs = StdFsAdapter::new();
        fs.write(&temp.path().join("one.md"), "1").unwrap();
        fs.write(&temp.path().join("two.md"), "2").unwrap();

        let mut names = fs.list_dir(temp.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["one.md", "two.md"]);
    }

    #[test]
    fn test_list_dir_on_file_is_invalid_path() {
        let temp = TempDir::new().unwrap();
        let fs = StdFsAdapter::new();
        let file = temp.path().join("f.md");
        fs.write(&file, "x").unwrap();

        assert!(matches!(
            fs.list_dir(&file).unwrap_err(),
            SdlcError::InvalidPath(_)
        ));
    }

    #[test]
    fn test_rename_moves_directory() {
        let temp = TempDir::new().unwrap();
        let fs = StdFsAdapter::new();
        let from = temp.path().join("doing/feature");
        let to = temp.path().join("done/feature");
        fs.write(&from.join("0.idea-feature.md"), "idea").unwrap();
        fs.create_dir_all(&temp.path().join("done")).unwrap();

        fs.rename(&from, &to).unwrap();
        assert!(!fs.exists(&from));
        assert!(fs.is_file(&to.join("0.idea-feature.md")));
    }
}
