//! Start-feature workflow: create the feature directory and step 0.

use crate::config::ProjectConfig;
use crate::error::{Result, SdlcError};
use crate::lock::LockState;
use crate::tools::fs::FsAdapter;
use std::path::PathBuf;

/// Result of starting a feature.
#[derive(Debug)]
pub struct StartOutcome {
    /// Feature slug derived from the idea title.
    pub slug: String,

    /// Path of the freshly created step-0 markdown file.
    pub idea_file: PathBuf,

    /// Lock state to persist: the new feature at step 0.
    pub lock: LockState,
}

/// Derives a kebab-case ascii slug from an idea title.
///
/// Non-alphanumeric runs collapse to single hyphens; everything is
/// lowercased. May return an empty string when the title contains no
/// ascii alphanumerics.
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut gap = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }
    slug
}

/// Starts a new feature from an idea title.
///
/// Creates `doing/<slug>/` and the step-0 idea skeleton, and returns
/// the lock state for the caller to persist. Starting a feature while
/// another is active replaces the tracked feature; the abandoned
/// directory shows up as a `status` warning.
///
/// # Errors
///
/// Returns [`SdlcError::InvalidSlug`] when the title yields no slug,
/// and [`SdlcError::DuplicateFeature`] when a feature with this slug
/// already exists under the doing or done directory (directory state
/// is left untouched in that case).
#[tracing::instrument(skip(config, fs))]
pub fn start_feature(
    config: &ProjectConfig,
    title: &str,
    fs: &dyn FsAdapter,
) -> Result<StartOutcome> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(SdlcError::InvalidSlug(title.to_string()));
    }

    let workdir = config.feature_dir(&slug);
    if fs.exists(&workdir) || fs.exists(&config.done_path().join(&slug)) {
        return Err(SdlcError::DuplicateFeature(slug));
    }

    let first_step = &config.steps[0];
    let idea_file = workdir.join(first_step.step_file_name(&slug));

    fs.create_dir_all(&workdir)?;
    fs.write(
        &idea_file,
        &format!("# {title}\n\n## Problem\n\n## Solution\n\n## Rabbit Holes\n"),
    )?;

    tracing::info!(slug = %slug, idea_file = %idea_file.display(), "feature started");
    Ok(StartOutcome {
        lock: LockState::for_feature(&slug),
        slug,
        idea_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_kebab_cases_ascii() {
        assert_eq!(slugify("Add Login Flow"), "add-login-flow");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
        assert_eq!(slugify("v2: the (re)write!"), "v2-the-re-write");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("café menü"), "caf-men");
        assert_eq!(slugify("日本語"), "");
    }
}
