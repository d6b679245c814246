//! Persisted workflow state (the lock file).
//!
//! `.sdlc/lock.json` is the single source of truth for which feature is
//! active and at which step. It is loaded at command entry, threaded
//! through the workflow as a value, and rewritten at most once before
//! the command exits. Writes go through a sibling temp file and a
//! rename, so a crash mid-write leaves the previous state readable.

use crate::config::CONFIG_DIR;
use crate::error::{Result, SdlcError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Lock file name inside `.sdlc/`.
pub const LOCK_FILE: &str = "lock.json";

/// Persisted record of workflow progress.
///
/// The default value means "no active feature"; a missing lock file
/// loads as that default. When a feature is active,
/// `current_step_index` is either a valid index into the configured
/// steps or equal to their count, which marks the feature finished and
/// ready for archiving.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockState {
    /// Slug of the in-progress feature, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_slug: Option<String>,

    /// Index of the step currently being worked on.
    #[serde(default)]
    pub current_step_index: usize,

    /// Indices of steps whose content has been produced and advanced past.
    #[serde(default)]
    pub completed_steps: BTreeSet<usize>,

    /// When the active feature was started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the lock was last rewritten.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LockState {
    /// Fresh state for a newly started feature, at step 0.
    pub fn for_feature(slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            active_slug: Some(slug.into()),
            current_step_index: 0,
            completed_steps: BTreeSet::new(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Whether a feature is currently being tracked.
    pub fn has_active(&self) -> bool {
        self.active_slug.is_some()
    }

    /// Path of the lock file under `root`.
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(LOCK_FILE)
    }

    /// Loads the lock state for the project at `root`.
    ///
    /// A missing lock file is not an error: it loads as the default
    /// "no active feature" state.
    ///
    /// # Errors
    ///
    /// Returns [`SdlcError::LockCorrupted`] if the file exists but is
    /// not valid JSON for this shape. That error is recoverable: the
    /// message tells the user to delete the file and re-run
    /// `sdlc status`.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| SdlcError::FileReadError(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| SdlcError::LockCorrupted(e.to_string(), path.clone()))
    }

    /// Atomically persists this state for the project at `root`.
    ///
    /// The JSON is written to `lock.json.tmp` first and renamed over
    /// the target, so the previously committed state survives a crash
    /// at any point of the write.
    ///
    /// # Errors
    ///
    /// Returns [`SdlcError::FileWriteError`] if the temp file cannot be
    /// written or the rename fails.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = Self::path(root);
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| SdlcError::FileWriteError(format!("{}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SdlcError::FileWriteError(format!("{}: {}", path.display(), e)))?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| SdlcError::FileWriteError(format!("{}: {}", tmp.display(), e)))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| SdlcError::FileWriteError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "lock state saved");
        Ok(())
    }
}
