//! Pure step sequencing logic.
//!
//! Every function here is a pure projection over `(&ProjectConfig,
//! &LockState)`; nothing touches the filesystem. The lifecycle
//! workflows call these to decide transitions, then persist the
//! returned state themselves.

use crate::config::{ProjectConfig, StepDefinition};
use crate::error::{Result, SdlcError};
use crate::lock::LockState;

/// The step currently being worked on.
///
/// `None` when no feature is active, or when the feature has advanced
/// past the final step (finished, awaiting `done`).
pub fn current_step<'a>(config: &'a ProjectConfig, lock: &LockState) -> Option<&'a StepDefinition> {
    lock.active_slug.as_ref()?;
    config.steps.get(lock.current_step_index)
}

/// The step that would follow the current one.
///
/// `None` when no feature is active, when the current step is the final
/// one, or when the feature is already finished.
pub fn next_step<'a>(config: &'a ProjectConfig, lock: &LockState) -> Option<&'a StepDefinition> {
    lock.active_slug.as_ref()?;
    config.steps.get(lock.current_step_index + 1)
}

/// Whether the active feature has completed every step.
///
/// True exactly when the step index has advanced past the final step.
/// Always false when no feature is active.
pub fn is_complete(config: &ProjectConfig, lock: &LockState) -> bool {
    lock.has_active() && lock.current_step_index == config.steps.len()
}

/// Returns a new state advanced by exactly one step.
///
/// The departed step's index is recorded in `completed_steps`.
/// Advancement is strictly sequential: there is no skip and no rewind,
/// and callers are expected to have verified that the departed step's
/// content actually exists before calling this.
///
/// # Errors
///
/// Returns [`SdlcError::NoActiveFeature`] when no feature is active,
/// [`SdlcError::LockCorrupted`] when the persisted index is outside the
/// configured step range, and [`SdlcError::InvalidTransition`] when the
/// feature is already complete. The input state is never modified.
pub fn advance(config: &ProjectConfig, lock: &LockState) -> Result<LockState> {
    if !lock.has_active() {
        return Err(SdlcError::NoActiveFeature);
    }
    if lock.current_step_index > config.steps.len() {
        return Err(SdlcError::LockCorrupted(
            format!(
                "current_step_index {} exceeds the {} configured steps",
                lock.current_step_index,
                config.steps.len()
            ),
            LockState::path(&config.root),
        ));
    }
    if is_complete(config, lock) {
        return Err(SdlcError::InvalidTransition(
            "all steps are already complete; run `sdlc done` to archive".into(),
        ));
    }

    let mut advanced = lock.clone();
    advanced.completed_steps.insert(lock.current_step_index);
    advanced.current_step_index += 1;
    Ok(advanced)
}
