//! Status workflow: read-only projection of config + lock state.

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::lock::LockState;
use crate::sequencer;
use crate::tools::fs::FsAdapter;

/// Progress of a single step, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepProgress {
    /// Step index.
    pub index: usize,

    /// Step slug.
    pub slug: String,

    /// Human-facing step name.
    pub name: String,

    /// Whether this step has been advanced past.
    pub completed: bool,

    /// Whether this is the step currently being worked on.
    pub current: bool,
}

/// Progress of the active feature.
#[derive(Debug, Clone)]
pub struct ActiveFeature {
    /// Feature slug.
    pub slug: String,

    /// Display name of the current step; `None` once finished.
    pub current_step: Option<String>,

    /// Steps left to complete (0 once finished).
    pub steps_remaining: usize,

    /// Whether every step has been completed.
    pub complete: bool,

    /// Per-step progress in order.
    pub steps: Vec<StepProgress>,
}

/// Human-facing status report. Purely a projection: producing it never
/// mutates lock state or directories.
#[derive(Debug, Clone, Default)]
pub struct StatusReport {
    /// The active feature, if any.
    pub active: Option<ActiveFeature>,

    /// Detected inconsistencies between the lock file and the doing
    /// directory. Reported for manual reconciliation, never repaired
    /// automatically.
    pub warnings: Vec<String>,
}

/// Builds the status report for the project.
///
/// # Errors
///
/// Returns filesystem error variants only when the doing directory
/// exists but cannot be listed; inconsistencies are reported as
/// warnings, not errors.
pub fn feature_status(
    config: &ProjectConfig,
    lock: &LockState,
    fs: &dyn FsAdapter,
) -> Result<StatusReport> {
    let mut report = StatusReport::default();

    if let Some(slug) = lock.active_slug.as_deref() {
        let steps = config
            .steps
            .iter()
            .map(|s| StepProgress {
                index: s.index,
                slug: s.slug.clone(),
                name: s.name.clone(),
                completed: lock.completed_steps.contains(&s.index),
                current: s.index == lock.current_step_index,
            })
            .collect();

        report.active = Some(ActiveFeature {
            slug: slug.to_string(),
            current_step: sequencer::current_step(config, lock).map(|s| s.name.clone()),
            steps_remaining: config.steps.len().saturating_sub(lock.current_step_index),
            complete: sequencer::is_complete(config, lock),
            steps,
        });

        if !fs.is_dir(&config.feature_dir(slug)) {
            report.warnings.push(format!(
                "lock file tracks feature '{slug}' but {}/{slug} does not exist; \
                 restore the directory or delete {} and start over",
                config.doing_dir,
                LockState::path(&config.root).display(),
            ));
        }
        if lock.current_step_index > config.steps.len() {
            report.warnings.push(format!(
                "lock step index {} is outside the configured {} steps; \
                 the lock file needs manual repair",
                lock.current_step_index,
                config.steps.len(),
            ));
        }
    }

    // Feature directories nobody is tracking (e.g. a crash between
    // directory creation and the lock write, or a replaced feature).
    let doing = config.doing_path();
    if fs.is_dir(&doing) {
        let mut entries = fs.list_dir(&doing)?;
        entries.sort();
        for entry in entries {
            if fs.is_dir(&doing.join(&entry)) && lock.active_slug.as_deref() != Some(entry.as_str())
            {
                report.warnings.push(format!(
                    "{}/{entry} exists but is not tracked by the lock file; \
                     archive or remove it manually",
                    config.doing_dir,
                ));
            }
        }
    }

    Ok(report)
}
