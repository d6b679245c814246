//! Error types for SDLC workflow operations.
//!
//! All errors use `thiserror` and carry their remediation guidance in
//! the `Display` output, so the CLI can report any failure as a single
//! message plus a category-specific exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Error types for SDLC workflow operations.
///
/// Variants are grouped by category; [`SdlcError::exit_code`] maps each
/// category to a distinct process exit status for scripting use.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SdlcError {
    // Configuration errors - fatal to the command, user must fix the config
    /// Project configuration file was not found.
    #[error(
        "config file not found: {0}\nEnsure you are inside an sdlc project, or run `sdlc init` to create one"
    )]
    ConfigNotFound(PathBuf),

    /// Configuration file exists but could not be parsed.
    #[error("config file is corrupted: {0}\nFix the file or run `sdlc init` in a new directory")]
    ConfigParse(String),

    /// Configuration parsed but failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    // Lock state errors - recoverable, user guided to reset
    /// Lock file exists but cannot be parsed as valid state.
    #[error(
        "lock file is corrupted: {0}\nDelete {1} and run `sdlc status` to reinitialize tracking"
    )]
    LockCorrupted(String, PathBuf),

    // Workflow state errors - bad sequencing of user commands
    /// No feature is currently active.
    #[error("no active feature. Run `sdlc new \"<idea title>\"` first")]
    NoActiveFeature,

    /// Advancement attempted past the final step.
    #[error("invalid step transition: {0}")]
    InvalidTransition(String),

    /// A feature with this slug already exists in doing/ or done/.
    #[error("feature '{0}' already exists")]
    DuplicateFeature(String),

    /// Idea title reduced to an empty or malformed slug.
    #[error("cannot derive a usable slug from title: {0:?}")]
    InvalidSlug(String),

    /// Current step's markdown file is missing or empty.
    #[error(
        "step file is missing or empty: {0}\nFill it out (or restore it from version control), then re-run `sdlc next`"
    )]
    IncompleteStep(PathBuf),

    /// Archive requested before every step was completed.
    #[error("feature not finished: {remaining} step(s) remaining. Complete all steps before `sdlc done`")]
    IncompleteWorkflow {
        /// Number of steps still to complete.
        remaining: usize,
    },

    /// Step files missing at archive time.
    #[error("missing step files: {0:?}")]
    MissingStepFiles(Vec<String>),

    /// Archive destination already occupied.
    #[error("archive destination already exists: {0}\nRemove or rename it first")]
    DestinationExists(PathBuf),

    // Template errors - packaging defect, not user error
    /// Prompt template missing, unreadable, or lacking its marker.
    #[error(transparent)]
    Prompt(#[from] sdlc_pm::PromptError),

    // File system errors
    /// Path not found in the file system.
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    /// Invalid path provided.
    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    /// Error reading a file.
    #[error("file read error: {0}")]
    FileReadError(String),

    /// Error writing a file.
    #[error("file write error: {0}")]
    FileWriteError(String),

    /// Permission denied for the specified operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Standard IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // Anyhow passthrough for rich context
    /// Generic error with context from anyhow.
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl SdlcError {
    /// Process exit status for this error's category.
    ///
    /// 0 is success; each category gets its own non-zero code so shell
    /// scripts can branch on the kind of failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigNotFound(_) | Self::ConfigParse(_) | Self::InvalidConfig(_) => 2,
            Self::LockCorrupted(..) => 3,
            Self::NoActiveFeature | Self::InvalidTransition(_) => 4,
            Self::DuplicateFeature(_) | Self::InvalidSlug(_) | Self::DestinationExists(_) => 5,
            Self::IncompleteStep(_) => 6,
            Self::IncompleteWorkflow { .. } | Self::MissingStepFiles(_) => 7,
            Self::Prompt(_) => 8,
            Self::PathNotFound(_)
            | Self::InvalidPath(_)
            | Self::FileReadError(_)
            | Self::FileWriteError(_)
            | Self::PermissionDenied(_)
            | Self::Io(_) => 10,
            _ => 1,
        }
    }
}

/// Result type alias for SDLC operations.
///
/// All fallible operations in this crate return this type, using [`SdlcError`]
/// for error variants.
pub type Result<T> = std::result::Result<T, SdlcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinguish_categories() {
        let cases: Vec<(SdlcError, i32)> = vec![
            (SdlcError::ConfigNotFound(PathBuf::from(".sdlc")), 2),
            (
                SdlcError::LockCorrupted("bad json".into(), PathBuf::from("lock.json")),
                3,
            ),
            (SdlcError::NoActiveFeature, 4),
            (SdlcError::DuplicateFeature("x".into()), 5),
            (SdlcError::IncompleteStep(PathBuf::from("0.idea-x.md")), 6),
            (SdlcError::IncompleteWorkflow { remaining: 3 }, 7),
            (
                SdlcError::Prompt(sdlc_pm::PromptError::TemplateNotFound("prd".into())),
                8,
            ),
            (SdlcError::PathNotFound(PathBuf::from("doing")), 10),
        ];
        for (err, code) in cases {
            assert_eq!(err.exit_code(), code, "wrong code for {err}");
        }
    }

    #[test]
    fn test_messages_carry_remediation() {
        let msg = SdlcError::NoActiveFeature.to_string();
        assert!(msg.contains("sdlc new"));

        let msg =
            SdlcError::LockCorrupted("x".into(), PathBuf::from(".sdlc/lock.json")).to_string();
        assert!(msg.contains("sdlc status"));
    }
}
