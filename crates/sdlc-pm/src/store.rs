//! Prompt template store backed by a directory of instruction files.

use crate::error::{PromptError, Result};
use std::path::PathBuf;

/// File name suffix shared by all instruction templates.
pub const TEMPLATE_SUFFIX: &str = ".instructions.md";

/// Store for the per-step instruction templates of a project.
///
/// Templates live as plain markdown files in the project's prompts
/// directory, one per workflow step, named `<step-slug>.instructions.md`.
/// The store only reads; it never creates or modifies templates.
///
/// # Examples
///
/// ```no_run
/// use sdlc_pm::PromptStore;
/// use std::path::PathBuf;
///
/// let store = PromptStore::new(PathBuf::from("prompts"))?;
/// let template = store.load("prd.instructions.md")?;
/// # Ok::<(), sdlc_pm::PromptError>(())
/// ```
#[derive(Debug)]
pub struct PromptStore {
    /// Directory containing the `.instructions.md` template files.
    pub prompts_dir: PathBuf,
}

impl PromptStore {
    /// Creates a store over the given prompts directory.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::TemplateDirectoryNotFound`] if the path
    /// does not exist or is not a directory.
    pub fn new(prompts_dir: PathBuf) -> Result<Self> {
        if !prompts_dir.is_dir() {
            return Err(PromptError::TemplateDirectoryNotFound(prompts_dir));
        }
        Ok(Self { prompts_dir })
    }

    /// Loads a template by file name (e.g. `"prd.instructions.md"`).
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::TemplateNotFound`] if the file does not
    /// exist, or [`PromptError::TemplateLoadError`] if reading fails.
    pub fn load(&self, file_name: &str) -> Result<String> {
        let path = self.prompts_dir.join(file_name);
        if !path.is_file() {
            return Err(PromptError::TemplateNotFound(path.display().to_string()));
        }
        std::fs::read_to_string(&path)
            .map_err(|source| PromptError::TemplateLoadError { path, source })
    }

    /// Lists available template step slugs, sorted.
    ///
    /// Only files ending in `.instructions.md` are considered; the
    /// returned names have the suffix stripped.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::TemplateListError`] if the directory
    /// cannot be read.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.prompts_dir).map_err(|source| {
            PromptError::TemplateListError {
                path: self.prompts_dir.clone(),
                source,
            }
        })?;

        let mut slugs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| PromptError::TemplateListError {
                path: self.prompts_dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file()
                && let Some(name) = path.file_name().and_then(|n| n.to_str())
                && let Some(slug) = name.strip_suffix(TEMPLATE_SUFFIX)
            {
                slugs.push(slug.to_string());
            }
        }

        slugs.sort();
        Ok(slugs)
    }
}
