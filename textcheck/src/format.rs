//! # Format Validators
//!
//! Accept/reject checks for email addresses, URLs and phone numbers, backed
//! by the anchored patterns in [`crate::patterns`].
//!
//! Every validator returns `Ok(())` on accept and exactly one
//! [`FormatError`] on reject. Results depend on the input only.
//!
//! ## Example
//!
//! ```rust
//! use textcheck::format::{validate_email, validate_url, FormatError};
//!
//! assert!(validate_email("julius.bernhard@bhinneka.com").is_ok());
//! assert_eq!(
//!     validate_url("https:///www.bhinneka.com"),
//!     Err(FormatError::BadFormatUrl)
//! );
//! ```
use crate::patterns::patterns;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Reason a format validator rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid url format")]
    BadFormatUrl,
    #[error("invalid email format")]
    BadFormatEmail,
    /// Shared by bare numbers and area codes.
    #[error("invalid phone format")]
    BadFormatPhone,
}

/// Names a format validator so it can be picked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    Email,
    Url,
    Phone,
    PhoneArea,
}

impl Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Url => write!(f, "url"),
            Self::Phone => write!(f, "phone number"),
            Self::PhoneArea => write!(f, "phone area code"),
        }
    }
}

impl FormatKind {
    /// Runs the validator this kind names.
    pub fn validate(self, input: &str) -> Result<(), FormatError> {
        match self {
            Self::Email => validate_email(input),
            Self::Url => validate_url(input),
            Self::Phone => validate_phone_number(input),
            Self::PhoneArea => validate_phone_area_number(input),
        }
    }
}

/// Shorthand for [`FormatKind::validate`].
pub fn validate(kind: FormatKind, input: &str) -> Result<(), FormatError> {
    kind.validate(input)
}

fn check(matched: bool, kind: FormatKind, err: FormatError) -> Result<(), FormatError> {
    if matched {
        Ok(())
    } else {
        tracing::trace!(%kind, "rejected by format pattern");
        Err(err)
    }
}

/// Validates an email address (addr-spec subset).
pub fn validate_email(input: &str) -> Result<(), FormatError> {
    check(
        patterns().email.is_match(input),
        FormatKind::Email,
        FormatError::BadFormatEmail,
    )
}

/// Validates a URL. Scheme, userinfo, port and path are all optional, so a
/// bare `www.example.com` passes.
pub fn validate_url(input: &str) -> Result<(), FormatError> {
    check(
        patterns().url.is_match(input),
        FormatKind::Url,
        FormatError::BadFormatUrl,
    )
}

/// Validates a bare phone number: five or more digits, no separators.
pub fn validate_phone_number(input: &str) -> Result<(), FormatError> {
    check(
        patterns().phone.is_match(input),
        FormatKind::Phone,
        FormatError::BadFormatPhone,
    )
}

/// Validates an area code such as `+62`.
pub fn validate_phone_area_number(input: &str) -> Result<(), FormatError> {
    check(
        patterns().phone_area.is_match(input),
        FormatKind::PhoneArea,
        FormatError::BadFormatPhone,
    )
}
