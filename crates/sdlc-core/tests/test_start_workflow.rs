//! Integration tests for the start-feature workflow.

use sdlc_core::workflows::{init_project, start_feature};
use sdlc_core::{ProjectConfig, SdlcError, StdFsAdapter};
use std::fs;
use tempfile::TempDir;

fn init_test_project() -> (TempDir, ProjectConfig) {
    let temp = TempDir::new().unwrap();
    let fs_adapter = StdFsAdapter::new();
    init_project(temp.path(), &fs_adapter).unwrap();
    let config = ProjectConfig::load(temp.path().to_path_buf()).unwrap();
    (temp, config)
}

#[test]
fn test_start_creates_directory_and_skeleton() {
    let (temp, config) = init_test_project();
    let fs_adapter = StdFsAdapter::new();

    let outcome = start_feature(&config, "Add Login Flow", &fs_adapter).unwrap();
    assert_eq!(outcome.slug, "add-login-flow");
    assert_eq!(
        outcome.idea_file,
        temp.path().join("doing/add-login-flow/0.idea-add-login-flow.md")
    );

    let skeleton = fs::read_to_string(&outcome.idea_file).unwrap();
    assert!(skeleton.starts_with("# Add Login Flow\n"));
    assert!(skeleton.contains("## Problem"));
    assert!(skeleton.contains("## Rabbit Holes"));

    assert_eq!(outcome.lock.active_slug.as_deref(), Some("add-login-flow"));
    assert_eq!(outcome.lock.current_step_index, 0);
    assert!(outcome.lock.completed_steps.is_empty());
    assert!(outcome.lock.created_at.is_some());
}

#[test]
fn test_start_duplicate_slug_fails_and_leaves_directory_unchanged() {
    let (temp, config) = init_test_project();
    let fs_adapter = StdFsAdapter::new();

    start_feature(&config, "my feature", &fs_adapter).unwrap();
    fs::write(
        temp.path().join("doing/my-feature/0.idea-my-feature.md"),
        "edited by hand",
    )
    .unwrap();

    let result = start_feature(&config, "My Feature!", &fs_adapter);
    match result.unwrap_err() {
        SdlcError::DuplicateFeature(slug) => assert_eq!(slug, "my-feature"),
        other => panic!("expected DuplicateFeature, got {other:?}"),
    }

    // The first feature's content is untouched
    let content = fs::read_to_string(temp.path().join("doing/my-feature/0.idea-my-feature.md"))
        .unwrap();
    assert_eq!(content, "edited by hand");
}

#[test]
fn test_start_rejects_slug_already_archived() {
    let (temp, config) = init_test_project();
    let fs_adapter = StdFsAdapter::new();

    fs::create_dir_all(temp.path().join("done/old-feature")).unwrap();

    let result = start_feature(&config, "old feature", &fs_adapter);
    assert!(matches!(
        result.unwrap_err(),
        SdlcError::DuplicateFeature(_)
    ));
}

#[test]
fn test_start_rejects_unusable_title() {
    let (_temp, config) = init_test_project();
    let fs_adapter = StdFsAdapter::new();

    let result = start_feature(&config, "!!!", &fs_adapter);
    assert!(matches!(result.unwrap_err(), SdlcError::InvalidSlug(_)));
}
