//! Error types for the prompt manager crate.

use std::path::PathBuf;

/// Errors that can occur while loading or composing prompt templates.
///
/// These indicate a broken or incomplete set of instruction templates
/// rather than bad user input; the CLI reports them distinctly.
#[derive(thiserror::Error, Debug)]
pub enum PromptError {
    /// Template file was not found in the prompts directory.
    #[error("template not found: {0}\nEnsure it exists in the prompts directory or re-run `sdlc init`")]
    TemplateNotFound(String),

    /// Template lacks the insertion marker for previous step content.
    #[error("template '{template}' is missing the {marker} insertion marker")]
    MarkerMissing {
        /// Name of the offending template file.
        template: String,
        /// The marker that was expected.
        marker: &'static str,
    },

    /// Failed to load or read a template from the filesystem.
    #[error("template load error: {path}")]
    TemplateLoadError {
        /// Path to the template that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Prompts directory does not exist or is not a directory.
    #[error("template directory not found: {0}")]
    TemplateDirectoryNotFound(PathBuf),

    /// Prompts directory listing failed.
    #[error("failed to list templates in {path}")]
    TemplateListError {
        /// Path to the prompts directory.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for prompt manager operations.
pub type Result<T> = std::result::Result<T, PromptError>;
