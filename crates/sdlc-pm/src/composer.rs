//! Verbatim merge of a completed step into the next step's template.

use crate::error::{PromptError, Result};

/// Insertion marker that templates must contain.
///
/// The previous step's markdown is substituted at every occurrence of
/// this marker, byte for byte. The marker is a literal string, not a
/// templating construct: step content and templates are free to contain
/// `{{`, `{%` or any other markup without being interpreted.
pub const PREV_STEP_MARKER: &str = "<prev_step></prev_step>";

/// Merges a completed step's markdown into the next step's template.
///
/// The previous content is treated as opaque text and inserted verbatim
/// at [`PREV_STEP_MARKER`]; no whitespace normalization, escaping, or
/// other rewriting is applied. Output is deterministic given the same
/// two inputs.
///
/// # Arguments
///
/// * `previous` - Full markdown content of the completed step.
/// * `template` - The next step's instruction template.
/// * `template_name` - Template file name, used in error messages.
///
/// # Errors
///
/// Returns [`PromptError::MarkerMissing`] if the template does not
/// contain the insertion marker.
pub fn compose(previous: &str, template: &str, template_name: &str) -> Result<String> {
    if !template.contains(PREV_STEP_MARKER) {
        return Err(PromptError::MarkerMissing {
            template: template_name.to_string(),
            marker: PREV_STEP_MARKER,
        });
    }
    Ok(template.replace(PREV_STEP_MARKER, previous))
}
