//! Lifecycle workflows for SDLC features.
//!
//! This module organizes the effectful orchestration behind each CLI
//! command:
//! - `init`: scaffold a project (config, directories, templates, lock)
//! - `start`: begin a feature from an idea title
//! - `next`: generate the next step's prompt and advance
//! - `status`: read-only progress report with consistency warnings
//! - `archive`: move a finished feature to the done directory
//!
//! Workflows take the lock state as a value and return the state to
//! persist; the caller saves it exactly once at command exit.

pub mod archive;
pub mod init;
pub mod next;
pub mod start;
pub mod status;

// Re-export workflow entry points
pub use archive::{ArchiveOutcome, archive_feature};
pub use init::{InitReport, init_project};
pub use next::{AdvanceOutcome, advance_feature};
pub use start::{StartOutcome, slugify, start_feature};
pub use status::{ActiveFeature, StatusReport, StepProgress, feature_status};
