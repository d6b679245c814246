//! File system adapter trait.
//!
//! Defines the narrow interface the lifecycle workflows need. The
//! default implementation is [`crate::tools::fs_impl::StdFsAdapter`];
//! the trait keeps the workflow code independent of `std::fs` mechanics
//! (only their sequencing matters here).

use crate::error::Result;
use std::path::Path;

/// File system operations used by the lifecycle workflows.
pub trait FsAdapter: Send + Sync {
    /// Reads the contents of a file as a string.
    ///
    /// # Errors
    ///
    /// Returns `SdlcError::PathNotFound` if the file doesn't exist,
    /// `SdlcError::FileReadError` if reading fails.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes a string to a file, creating parent directories and the
    /// file itself as needed, overwriting any previous content.
    ///
    /// # Errors
    ///
    /// Returns `SdlcError::FileWriteError` if writing fails, or
    /// `SdlcError::PermissionDenied` when lacking write permissions.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Lists all entry names (not full paths) in a directory.
    ///
    /// # Errors
    ///
    /// Returns `SdlcError::PathNotFound` if the directory doesn't
    /// exist, `SdlcError::InvalidPath` if the path is not a directory.
    fn list_dir(&self, path: &Path) -> Result<Vec<String>>;

    /// Checks if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Checks if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Checks if a path is a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Creates a directory and all missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns `SdlcError::FileWriteError` if creation fails.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Renames (moves) a file or directory. Used to archive a finished
    /// feature directory; the source must cease to exist afterwards.
    ///
    /// # Errors
    ///
    /// Returns `SdlcError::FileWriteError` if the rename fails.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}
