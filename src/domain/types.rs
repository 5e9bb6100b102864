//! Constrained input types consumed by the form layer.
//!
//! Each wrapper runs its normalization exactly once at construction, so a
//! payload built from these values needs no further checking before it is
//! sent to the backend.
use std::fmt;

use phonenumber::Mode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidateEmail, ValidateUrl};

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
}

/// Positive row identifiers for the collections the forms reference.
macro_rules! resource_id {
    ($($name:ident => $doc:literal,)+) => {$(
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw row id, rejecting zero and negative values.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                (value > 0)
                    .then_some(Self(value))
                    .ok_or(TypeConstraintError::NonPositiveId)
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    )+};
}

resource_id! {
    SubdomainId => "Row id of a subdomain.",
    CoachId => "Row id of a coach.",
    CourseId => "Row id of a course.",
}

/// String wrappers whose contents passed the named normalizer.
macro_rules! validated_string {
    ($($name:ident($normalize:path) => $doc:literal,)+) => {$(
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                $normalize(value.into()).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    )+};
}

validated_string! {
    CourseTitle(non_empty) => "Course title, trimmed and non-empty.",
    CoachName(non_empty) => "Coach display name, trimmed and non-empty.",
    AuthorName(non_empty) => "Feedback author name, trimmed and non-empty.",
    EmailAddress(email) => "Lower-cased, validated email address.",
    PhoneNumber(phone) => "Phone number normalized to E.164.",
    MediaUrl(url) => "Validated media URL (cover image, avatar, audio file).",
    FeedbackMessage(sanitized) => "Feedback body with markup stripped, non-empty.",
}

fn non_empty(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString)
    } else {
        Ok(trimmed.to_string())
    }
}

fn email(value: String) -> Result<String, TypeConstraintError> {
    let normalized = value.trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

fn phone(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed =
        phonenumber::parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

fn url(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = non_empty(value)?;
    if trimmed.validate_url() {
        Ok(trimmed)
    } else {
        Err(TypeConstraintError::InvalidUrl)
    }
}

/// Feedback is rendered back to other visitors, so markup is stripped
/// before the emptiness check: a message that was only tags is rejected.
fn sanitized(value: String) -> Result<String, TypeConstraintError> {
    non_empty(ammonia::clean(&value))
}
