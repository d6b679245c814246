//! Project configuration loading and validation.
//!
//! The configuration lives at `.sdlc/config.toml` in the project root
//! and defines the ordered step list plus the working directory names.
//! Loose TOML is validated into a strongly-typed [`ProjectConfig`] at
//! this boundary, so downstream components can assume a well-formed
//! step sequence (non-empty, unique slugs, indices 0..n in order).

use crate::error::{Result, SdlcError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory holding the config and lock files, relative to the root.
pub const CONFIG_DIR: &str = ".sdlc";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// One stage of the workflow.
///
/// The 8 definitions are fixed for the lifetime of a command: `index`
/// is the position in the ordered sequence, `slug` the identifier used
/// in file names, `name` the human-facing label, and `template` the
/// instruction-template file name for generating this step's prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    /// Position in the ordered step sequence, starting at 0.
    pub index: usize,

    /// Unique identifier used in file names (e.g. "idea", "prd").
    pub slug: String,

    /// Human-facing display name (e.g. "Architecture").
    pub name: String,

    /// Instruction template file name (e.g. "prd.instructions.md").
    pub template: String,
}

impl StepDefinition {
    /// File name of this step's markdown inside a feature directory,
    /// e.g. `1.prd-login-flow.md`.
    pub fn step_file_name(&self, feature_slug: &str) -> String {
        format!("{}.{}-{}.md", self.index, self.slug, feature_slug)
    }
}

/// Validated project configuration.
///
/// Loaded once per command invocation and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Project root directory (where `.sdlc/` lives).
    pub root: PathBuf,

    /// Ordered workflow steps; indices are 0..steps.len().
    pub steps: Vec<StepDefinition>,

    /// Directory name for in-progress features (typically "doing").
    pub doing_dir: String,

    /// Directory name for archived features (typically "done").
    pub done_dir: String,

    /// Directory name for instruction templates (typically "prompts").
    pub prompts_dir: String,
}

/// Raw deserialization shape of `config.toml` before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    steps: Vec<RawStep>,
    doing_dir: Option<String>,
    done_dir: Option<String>,
    prompts_dir: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    slug: String,
    name: Option<String>,
    template: Option<String>,
}

impl ProjectConfig {
    /// Path of the configuration file under `root`.
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Loads and validates the configuration for the project at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`SdlcError::ConfigNotFound`] if the file is absent,
    /// [`SdlcError::ConfigParse`] if it is not valid TOML, and
    /// [`SdlcError::InvalidConfig`] if the step list is empty, slugs
    /// repeat, or a directory name is blank.
    pub fn load(root: PathBuf) -> Result<Self> {
        let path = Self::config_path(&root);
        if !path.is_file() {
            return Err(SdlcError::ConfigNotFound(path));
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| SdlcError::FileReadError(format!("{}: {}", path.display(), e)))?;
        let raw: RawConfig =
            toml::from_str(&content).map_err(|e| SdlcError::ConfigParse(e.to_string()))?;

        Self::validate(root, raw)
    }

    fn validate(root: PathBuf, raw: RawConfig) -> Result<Self> {
        if raw.steps.is_empty() {
            return Err(SdlcError::InvalidConfig(
                "step list is empty; at least one [[steps]] entry is required".into(),
            ));
        }

        let mut steps = Vec::with_capacity(raw.steps.len());
        for (index, step) in raw.steps.into_iter().enumerate() {
            let slug = step.slug.trim().to_string();
            if slug.is_empty() {
                return Err(SdlcError::InvalidConfig(format!(
                    "step {index} has a blank slug"
                )));
            }
            if steps.iter().any(|s: &StepDefinition| s.slug == slug) {
                return Err(SdlcError::InvalidConfig(format!(
                    "duplicate step slug: {slug}"
                )));
            }
            let name = step
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| slug.clone());
            let template = step
                .template
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| format!("{slug}{}", sdlc_pm::TEMPLATE_SUFFIX));
            steps.push(StepDefinition {
                index,
                slug,
                name,
                template,
            });
        }

        let doing_dir = dir_name(raw.doing_dir, "doing", "doing_dir")?;
        let done_dir = dir_name(raw.done_dir, "done", "done_dir")?;
        let prompts_dir = dir_name(raw.prompts_dir, "prompts", "prompts_dir")?;
        if doing_dir == done_dir {
            return Err(SdlcError::InvalidConfig(format!(
                "doing_dir and done_dir must differ (both are {doing_dir:?})"
            )));
        }

        Ok(Self {
            root,
            steps,
            doing_dir,
            done_dir,
            prompts_dir,
        })
    }

    /// Absolute path of the in-progress features directory.
    pub fn doing_path(&self) -> PathBuf {
        self.root.join(&self.doing_dir)
    }

    /// Absolute path of the archive directory.
    pub fn done_path(&self) -> PathBuf {
        self.root.join(&self.done_dir)
    }

    /// Absolute path of the instruction templates directory.
    pub fn prompts_path(&self) -> PathBuf {
        self.root.join(&self.prompts_dir)
    }

    /// Directory of an in-progress feature.
    pub fn feature_dir(&self, feature_slug: &str) -> PathBuf {
        self.doing_path().join(feature_slug)
    }
}

fn dir_name(value: Option<String>, default: &str, field: &str) -> Result<String> {
    match value {
        None => Ok(default.to_string()),
        Some(v) if v.trim().is_empty() => Err(SdlcError::InvalidConfig(format!(
            "{field} must not be blank"
        ))),
        Some(v) => Ok(v),
    }
}

/// Finds the project root by walking up from `start` until a directory
/// containing `.sdlc/config.toml` is found.
pub fn find_root(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(candidate) = dir {
        if ProjectConfig::config_path(candidate).is_file() {
            return Some(candidate.to_path_buf());
        }
        dir = candidate.parent();
    }
    None
}
