//! Integration tests for the advance (next) workflow.

use sdlc_core::workflows::{AdvanceOutcome, advance_feature, init_project, start_feature};
use sdlc_core::{LockState, ProjectConfig, SdlcError, StdFsAdapter};
use sdlc_pm::PromptStore;
use std::fs;
use tempfile::TempDir;

fn started_project() -> (TempDir, ProjectConfig, LockState) {
    let temp = TempDir::new().unwrap();
    let fs_adapter = StdFsAdapter::new();
    init_project(temp.path(), &fs_adapter).unwrap();
    let config = ProjectConfig::load(temp.path().to_path_buf()).unwrap();
    let outcome = start_feature(&config, "demo feature", &fs_adapter).unwrap();
    outcome.lock.save(temp.path()).unwrap();
    (temp, config, outcome.lock)
}

fn prompt_store(config: &ProjectConfig) -> PromptStore {
    PromptStore::new(config.prompts_path()).unwrap()
}

#[test]
fn test_next_with_empty_step_file_fails_without_writing_prompt() {
    let (temp, config, lock) = started_project();
    let fs_adapter = StdFsAdapter::new();

    // The freshly created skeleton is non-empty; blank it out
    let idea = temp
        .path()
        .join("doing/demo-feature/0.idea-demo-feature.md");
    fs::write(&idea, "   \n\n").unwrap();

    let result = advance_feature(&config, &lock, &prompt_store(&config), &fs_adapter);
    match result.unwrap_err() {
        SdlcError::IncompleteStep(path) => assert_eq!(path, idea),
        other => panic!("expected IncompleteStep, got {other:?}"),
    }

    assert!(
        !temp
            .path()
            .join("doing/demo-feature/_prompt-prd.md")
            .exists()
    );
}

#[test]
fn test_next_composes_prompt_with_previous_content_verbatim() {
    let (temp, config, lock) = started_project();
    let fs_adapter = StdFsAdapter::new();

    let idea = temp
        .path()
        .join("doing/demo-feature/0.idea-demo-feature.md");
    let idea_content = "# demo feature\n\n## Problem\nUsers cannot log in.\n";
    fs::write(&idea, idea_content).unwrap();

    let outcome = advance_feature(&config, &lock, &prompt_store(&config), &fs_adapter).unwrap();
    let AdvanceOutcome::PromptGenerated {
        next_slug,
        prompt_file,
        next_step_file,
        lock: advanced,
    } = outcome
    else {
        panic!("expected PromptGenerated");
    };

    assert_eq!(next_slug, "prd");
    assert_eq!(
        prompt_file,
        temp.path().join("doing/demo-feature/_prompt-prd.md")
    );
    assert_eq!(
        next_step_file,
        temp.path().join("doing/demo-feature/1.prd-demo-feature.md")
    );

    let prompt = fs::read_to_string(&prompt_file).unwrap();
    assert!(prompt.contains(idea_content));
    assert!(!prompt.contains(sdlc_pm::PREV_STEP_MARKER));

    assert_eq!(advanced.current_step_index, 1);
    assert!(advanced.completed_steps.contains(&0));
}

#[test]
fn test_next_overwrites_stale_prompt() {
    let (temp, config, lock) = started_project();
    let fs_adapter = StdFsAdapter::new();

    let stale = temp.path().join("doing/demo-feature/_prompt-prd.md");
    fs::write(&stale, "stale contents").unwrap();

    advance_feature(&config, &lock, &prompt_store(&config), &fs_adapter).unwrap();

    let fresh = fs::read_to_string(&stale).unwrap();
    assert!(!fresh.contains("stale contents"));
}

#[test]
fn test_next_on_final_step_completes_without_prompt() {
    let (temp, config, _) = started_project();
    let fs_adapter = StdFsAdapter::new();

    // Jump the lock to the final step with its content in place
    let last = config.steps.last().unwrap();
    let mut lock = LockState::for_feature("demo-feature");
    lock.current_step_index = last.index;
    lock.completed_steps = (0..last.index).collect();
    fs::write(
        temp.path()
            .join("doing/demo-feature")
            .join(last.step_file_name("demo-feature")),
        "# test plan\n",
    )
    .unwrap();

    let outcome = advance_feature(&config, &lock, &prompt_store(&config), &fs_adapter).unwrap();
    let AdvanceOutcome::WorkflowComplete { lock: finished } = outcome else {
        panic!("expected WorkflowComplete");
    };
    assert_eq!(finished.current_step_index, config.steps.len());
    assert_eq!(finished.completed_steps.len(), config.steps.len());
}

#[test]
fn test_next_when_already_complete_fails() {
    let (_temp, config, _) = started_project();
    let fs_adapter = StdFsAdapter::new();

    let mut lock = LockState::for_feature("demo-feature");
    lock.current_step_index = config.steps.len();

    let result = advance_feature(&config, &lock, &prompt_store(&config), &fs_adapter);
    assert!(matches!(
        result.unwrap_err(),
        SdlcError::InvalidTransition(_)
    ));
}

#[test]
fn test_next_without_active_feature_fails() {
    let (_temp, config, _) = started_project();
    let fs_adapter = StdFsAdapter::new();

    let result = advance_feature(
        &config,
        &LockState::default(),
        &prompt_store(&config),
        &fs_adapter,
    );
    assert!(matches!(result.unwrap_err(), SdlcError::NoActiveFeature));
}

#[test]
fn test_next_with_marker_less_template_reports_template_defect() {
    let (temp, config, lock) = started_project();
    let fs_adapter = StdFsAdapter::new();

    fs::write(
        temp.path().join("prompts/prd.instructions.md"),
        "# Broken template without a marker\n",
    )
    .unwrap();

    let result = advance_feature(&config, &lock, &prompt_store(&config), &fs_adapter);
    match result.unwrap_err() {
        SdlcError::Prompt(sdlc_pm::PromptError::MarkerMissing { template, .. }) => {
            assert_eq!(template, "prd.instructions.md");
        }
        other => panic!("expected MarkerMissing, got {other:?}"),
    }
}
