//! Advance workflow: compose the next prompt and move the lock forward.

use crate::config::ProjectConfig;
use crate::error::{Result, SdlcError};
use crate::lock::LockState;
use crate::sequencer;
use crate::tools::fs::FsAdapter;
use sdlc_pm::PromptStore;
use std::path::PathBuf;

/// Result of one `next` invocation.
#[derive(Debug)]
pub enum AdvanceOutcome {
    /// A prompt for the next step was generated; the user fills in the
    /// next step's markdown file before running `next` again.
    PromptGenerated {
        /// Slug of the step the prompt targets.
        next_slug: String,

        /// Generated `_prompt-<slug>.md` path.
        prompt_file: PathBuf,

        /// Where the user should save the step's content.
        next_step_file: PathBuf,

        /// Lock state to persist: advanced by one step.
        lock: LockState,
    },

    /// The final step's content is in place; the feature is finished
    /// and ready for `done`. No prompt is generated.
    WorkflowComplete {
        /// Lock state to persist: index past the final step.
        lock: LockState,
    },
}

/// Advances the active feature by one step.
///
/// Validates the transition first (active feature, in-range index, not
/// already complete) and requires the current step's markdown file to
/// be present and non-blank. When a next step exists, its prompt is
/// composed from the current content and the step's instruction
/// template, overwriting any previous `_prompt-<slug>.md`. The returned
/// lock is for the caller to persist; nothing is committed until that
/// save.
///
/// # Errors
///
/// - [`SdlcError::NoActiveFeature`] / [`SdlcError::InvalidTransition`] /
///   [`SdlcError::LockCorrupted`] from transition validation.
/// - [`SdlcError::IncompleteStep`] when the current step's file is
///   missing or blank; no prompt file is written in that case.
/// - [`SdlcError::Prompt`] when the next step's template is missing or
///   lacks the insertion marker.
#[tracing::instrument(skip(config, lock, store, fs))]
pub fn advance_feature(
    config: &ProjectConfig,
    lock: &LockState,
    store: &PromptStore,
    fs: &dyn FsAdapter,
) -> Result<AdvanceOutcome> {
    let Some(slug) = lock.active_slug.as_deref() else {
        return Err(SdlcError::NoActiveFeature);
    };

    // Pure validation up front; the advanced state is only handed back
    // after every effect has succeeded.
    let mut advanced = sequencer::advance(config, lock)?;
    advanced.updated_at = Some(chrono::Utc::now());

    // advance() succeeding guarantees an in-range current step
    let Some(current) = sequencer::current_step(config, lock) else {
        return Err(SdlcError::InvalidTransition(
            "no current step to advance from".into(),
        ));
    };
    let workdir = config.feature_dir(slug);

    let current_file = workdir.join(current.step_file_name(slug));
    if !fs.is_file(&current_file) {
        return Err(SdlcError::IncompleteStep(current_file));
    }
    let content = fs.read_to_string(&current_file)?;
    if content.trim().is_empty() {
        return Err(SdlcError::IncompleteStep(current_file));
    }

    match sequencer::next_step(config, lock) {
        Some(next) => {
            let template = store.load(&next.template)?;
            let prompt = sdlc_pm::compose(&content, &template, &next.template)?;

            let prompt_file = workdir.join(format!("_prompt-{}.md", next.slug));
            fs.write(&prompt_file, &prompt)?;

            let next_step_file = workdir.join(next.step_file_name(slug));
            tracing::info!(
                slug,
                from = %current.slug,
                to = %next.slug,
                prompt = %prompt_file.display(),
                "step advanced"
            );
            Ok(AdvanceOutcome::PromptGenerated {
                next_slug: next.slug.clone(),
                prompt_file,
                next_step_file,
                lock: advanced,
            })
        }
        None => {
            tracing::info!(slug, final_step = %current.slug, "workflow complete");
            Ok(AdvanceOutcome::WorkflowComplete { lock: advanced })
        }
    }
}
