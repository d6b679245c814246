//! Project scaffolding workflow.
//!
//! Creates the `.sdlc/` directory with a default configuration, the
//! working directories, the bundled instruction templates, and an empty
//! lock file. Everything is created only when absent, so re-running
//! `init` on an existing project is safe and leaves edits untouched.

use crate::config::{CONFIG_DIR, ProjectConfig};
use crate::error::Result;
use crate::lock::LockState;
use crate::tools::fs::FsAdapter;
use std::path::{Path, PathBuf};

/// Default configuration written for a new project: the fixed 8-step
/// sequence and the standard directory names.
const DEFAULT_CONFIG: &str = r#"# sdlc project configuration
doing_dir = "doing"
done_dir = "done"
prompts_dir = "prompts"

[[steps]]
slug = "idea"
name = "Idea"

[[steps]]
slug = "prd"
name = "Product Requirements"

[[steps]]
slug = "prd-plus"
name = "PRD Refinement"

[[steps]]
slug = "architecture"
name = "Architecture"

[[steps]]
slug = "patterns"
name = "System Patterns"

[[steps]]
slug = "tasks"
name = "Task Breakdown"

[[steps]]
slug = "tasks-plus"
name = "Task Refinement"

[[steps]]
slug = "tests"
name = "Test Plan"
"#;

/// Bundled instruction templates, one per step after the hand-written
/// idea (step 0 never has a generated prompt).
const BUNDLED_TEMPLATES: &[(&str, &str)] = &[
    (
        "prd.instructions.md",
        include_str!("../../templates/prd.instructions.md"),
    ),
    (
        "prd-plus.instructions.md",
        include_str!("../../templates/prd-plus.instructions.md"),
    ),
    (
        "architecture.instructions.md",
        include_str!("../../templates/architecture.instructions.md"),
    ),
    (
        "patterns.instructions.md",
        include_str!("../../templates/patterns.instructions.md"),
    ),
    (
        "tasks.instructions.md",
        include_str!("../../templates/tasks.instructions.md"),
    ),
    (
        "tasks-plus.instructions.md",
        include_str!("../../templates/tasks-plus.instructions.md"),
    ),
    (
        "tests.instructions.md",
        include_str!("../../templates/tests.instructions.md"),
    ),
];

/// What `init` created versus left alone.
#[derive(Debug, Default)]
pub struct InitReport {
    /// Paths created by this run.
    pub created: Vec<PathBuf>,

    /// Paths that already existed and were not touched.
    pub skipped: Vec<PathBuf>,
}

/// Scaffolds an sdlc project at `root`.
///
/// # Errors
///
/// Returns filesystem error variants when a directory or file cannot
/// be created. Existing files are never overwritten.
#[tracing::instrument(skip(fs))]
pub fn init_project(root: &Path, fs: &dyn FsAdapter) -> Result<InitReport> {
    let mut report = InitReport::default();

    for dir in [
        root.join(CONFIG_DIR),
        root.join("doing"),
        root.join("done"),
        root.join("prompts"),
    ] {
        if !fs.is_dir(&dir) {
            fs.create_dir_all(&dir)?;
            report.created.push(dir);
        } else {
            report.skipped.push(dir);
        }
    }

    let config_path = ProjectConfig::config_path(root);
    if !fs.exists(&config_path) {
        fs.write(&config_path, DEFAULT_CONFIG)?;
        report.created.push(config_path);
    } else {
        report.skipped.push(config_path);
    }

    for (name, content) in BUNDLED_TEMPLATES {
        let target = root.join("prompts").join(name);
        if !fs.exists(&target) {
            fs.write(&target, content)?;
            report.created.push(target);
        } else {
            report.skipped.push(target);
        }
    }

    let lock_path = LockState::path(root);
    if !fs.exists(&lock_path) {
        LockState::default().save(root)?;
        report.created.push(lock_path);
    } else {
        report.skipped.push(lock_path);
    }

    tracing::info!(
        root = %root.display(),
        created = report.created.len(),
        skipped = report.skipped.len(),
        "project scaffolded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdlc_pm::PREV_STEP_MARKER;

    #[test]
    fn test_default_config_parses_with_eight_steps() {
        // Round-trip the scaffold through the real config loader
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join(CONFIG_DIR)).unwrap();
        std::fs::write(ProjectConfig::config_path(temp.path()), DEFAULT_CONFIG).unwrap();

        let config = ProjectConfig::load(temp.path().to_path_buf()).unwrap();
        assert_eq!(config.steps.len(), 8);
        assert_eq!(config.steps[0].slug, "idea");
        assert_eq!(config.steps[7].slug, "tests");
        assert_eq!(config.doing_dir, "doing");
        assert_eq!(config.done_dir, "done");
    }

    #[test]
    fn test_bundled_templates_cover_steps_after_idea() {
        assert_eq!(BUNDLED_TEMPLATES.len(), 7);
        for (name, content) in BUNDLED_TEMPLATES {
            assert!(
                content.contains(PREV_STEP_MARKER),
                "{name} is missing the insertion marker"
            );
        }
    }
}
