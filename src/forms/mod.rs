//! Pre-submit forms for the admin drawers.
//!
//! Each form validates field-level constraints with `validator` and only
//! then converts into a payload through the domain value objects, so a
//! rejected form never produces a network request.

use crate::domain::types::{MediaUrl, TypeConstraintError};

pub mod coach;
pub mod course;
pub mod feedback;

/// Normalizes an optional URL field: blank input becomes `None`, anything
/// else must be a well-formed URL.
pub(crate) fn optional_url(value: Option<String>) -> Result<Option<String>, TypeConstraintError> {
    match value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        Some(url) => Ok(Some(MediaUrl::new(url)?.into_inner())),
        None => Ok(None),
    }
}
