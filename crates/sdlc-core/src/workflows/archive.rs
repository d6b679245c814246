//! Archive workflow: move a finished feature from doing/ to done/.

use crate::config::ProjectConfig;
use crate::error::{Result, SdlcError};
use crate::lock::LockState;
use crate::sequencer;
use crate::tools::fs::FsAdapter;
use std::path::PathBuf;

/// Result of archiving a feature.
#[derive(Debug)]
pub struct ArchiveOutcome {
    /// Where the feature directory now lives under done/.
    pub dest: PathBuf,

    /// Lock state to persist: no active feature.
    pub lock: LockState,
}

/// Archives the active feature.
///
/// Requires every step to be complete and every step file to exist,
/// then renames `doing/<slug>` to `done/<slug>` and returns a cleared
/// lock for the caller to persist.
///
/// # Errors
///
/// - [`SdlcError::NoActiveFeature`] when nothing is active.
/// - [`SdlcError::IncompleteWorkflow`] when steps remain; the doing
///   directory is left untouched.
/// - [`SdlcError::MissingStepFiles`] when step files are absent despite
///   the lock claiming completion.
/// - [`SdlcError::DestinationExists`] when `done/<slug>` is occupied.
#[tracing::instrument(skip(config, lock, fs))]
pub fn archive_feature(
    config: &ProjectConfig,
    lock: &LockState,
    fs: &dyn FsAdapter,
) -> Result<ArchiveOutcome> {
    let Some(slug) = lock.active_slug.as_deref() else {
        return Err(SdlcError::NoActiveFeature);
    };

    if !sequencer::is_complete(config, lock) {
        return Err(SdlcError::IncompleteWorkflow {
            remaining: config.steps.len().saturating_sub(lock.current_step_index),
        });
    }

    let workdir = config.feature_dir(slug);
    let missing: Vec<String> = config
        .steps
        .iter()
        .map(|s| s.step_file_name(slug))
        .filter(|name| !fs.is_file(&workdir.join(name)))
        .collect();
    if !missing.is_empty() {
        return Err(SdlcError::MissingStepFiles(missing));
    }

    let dest = config.done_path().join(slug);
    if fs.exists(&dest) {
        return Err(SdlcError::DestinationExists(dest));
    }

    fs.create_dir_all(&config.done_path())?;
    fs.rename(&workdir, &dest)?;

    tracing::info!(slug, dest = %dest.display(), "feature archived");
    Ok(ArchiveOutcome {
        dest,
        lock: LockState::default(),
    })
}
