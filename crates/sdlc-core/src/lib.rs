//! sdlc-core - Workflow engine for the 8-step markdown SDLC tool.
//!
//! This crate implements the workflow state machine behind the `sdlc`
//! CLI: which step is active, how transitions are validated, and how
//! state is persisted and recovered.
//!
//! # Architecture
//!
//! - [`error`]: Error taxonomy with per-category exit codes
//! - [`config`]: Typed project configuration, validated at load
//! - [`lock`]: Persisted lock state with atomic writes
//! - [`sequencer`]: Pure step-transition logic
//! - [`tools`]: File system adapter seam
//! - [`workflows`]: Effectful lifecycle orchestration (init, start,
//!   next, status, archive)
//!
//! The split keeps decisions pure and effects explicit: the sequencer
//! never touches disk, and the workflows hand the next [`LockState`]
//! back to the caller, which persists it atomically exactly once per
//! command.
//!
//! # Example
//!
//! ```no_run
//! use sdlc_core::{LockState, ProjectConfig, sequencer};
//! use std::path::PathBuf;
//!
//! # fn main() -> sdlc_core::Result<()> {
//! let config = ProjectConfig::load(PathBuf::from("/path/to/project"))?;
//! let lock = LockState::load(&config.root)?;
//!
//! if let Some(step) = sequencer::current_step(&config, &lock) {
//!     println!("working on: {}", step.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod lock;
pub mod sequencer;
pub mod tools;
pub mod workflows;

// Re-export core types for convenience
pub use config::{CONFIG_DIR, CONFIG_FILE, ProjectConfig, StepDefinition, find_root};
pub use error::{Result, SdlcError};
pub use lock::{LOCK_FILE, LockState};
pub use tools::fs::FsAdapter;
pub use tools::fs_impl::StdFsAdapter;
