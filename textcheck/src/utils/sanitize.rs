//! # Field Filters
//!
//! Composable filters that run the crate's validators and scanners against
//! one field value. Filters run in order and stop at the first failure,
//! returning a [`FilterError`] that says which rule was broken.
//!
//! Input is trimmed before any filter sees it, and the trimmed value is what
//! [`Sanitize::execute`] hands back on success.
//!
//! ## Examples
//!
//! ### Format and length
//! ```rust
//! use textcheck::format::FormatKind;
//! use textcheck::utils::Sanitize;
//!
//! let email = Sanitize::execute(
//!     "  julius.bernhard@bhinneka.com ",
//!     &[Sanitize::MaxLength(64), Sanitize::Format(FormatKind::Email)],
//! )
//! .unwrap();
//! assert_eq!(email, "julius.bernhard@bhinneka.com");
//! ```
//!
//! ### Character classes and options
//! ```rust
//! use textcheck::class::ClassRule;
//! use textcheck::utils::Sanitize;
//!
//! let res = Sanitize::execute(
//!     "okesip",
//!     &[Sanitize::Class(ClassRule::Alphanumeric { must: true })],
//! );
//! assert!(res.is_err());
//!
//! let res = Sanitize::execute(
//!     "YES",
//!     &[Sanitize::MatchStringsIgnoreCase(vec!["yes".into(), "no".into()])],
//! );
//! assert_eq!(res.unwrap(), "YES");
//! ```
use crate::class::ClassRule;
use crate::format::{FormatError, FormatKind};
use crate::lists::{InputTooLong, string_in_slice, validate_max_input};
use thiserror::Error;

/// A validation filter applied to a single field value.
///
/// - `MatchString`: the value equals the given string.
/// - `MatchStrings`: the value equals one of the options.
/// - `MatchStringsIgnoreCase`: as above, ignoring case.
/// - `MaxLength`: the value is at most this many bytes.
/// - `Format`: the value passes a format validator.
/// - `Class`: the value passes a character-class scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitize {
    MatchString(String),
    MatchStrings(Vec<String>),
    MatchStringsIgnoreCase(Vec<String>),
    MaxLength(usize),
    Format(FormatKind),
    Class(ClassRule),
}

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("The value doesn't match with {0}, try again!")]
    MatchString(String),
    #[error("The value doesn't match with the options: {}, try again!", .0.join(", "))]
    MatchStrings(Vec<String>),
    #[error("{0}, try again!")]
    TooLong(#[from] InputTooLong),
    #[error("The value is not a valid {kind} ({source}), try again!")]
    Format {
        kind: FormatKind,
        #[source]
        source: FormatError,
    },
    #[error("The value must contain {0}, try again!")]
    Class(ClassRule),
}

/// Anything that can check a single trimmed field value.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), FilterError>;
}

impl Sanitize {
    /// Executes all provided filters against the given answer.
    ///
    /// - Trims whitespace before validation.
    /// - Stops and returns the first error encountered.
    /// - Returns the cleaned string if all filters pass.
    pub fn execute(answer: &str, filters: &[Sanitize]) -> Result<String, FilterError> {
        let clean_answer = answer.trim();

        for filter in filters {
            if let Err(e) = filter.validate(clean_answer) {
                tracing::trace!(filter = ?filter, "field rejected");
                return Err(e);
            }
        }
        Ok(clean_answer.to_string())
    }
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterError> {
        match self {
            Sanitize::MatchString(s) => {
                if input == s {
                    Ok(())
                } else {
                    Err(FilterError::MatchString(s.to_string()))
                }
            }
            Sanitize::MatchStrings(options) => {
                if string_in_slice(input, options, true) {
                    Ok(())
                } else {
                    Err(FilterError::MatchStrings(options.clone()))
                }
            }
            Sanitize::MatchStringsIgnoreCase(options) => {
                if string_in_slice(input, options, false) {
                    Ok(())
                } else {
                    Err(FilterError::MatchStrings(options.clone()))
                }
            }
            Sanitize::MaxLength(limit) => Ok(validate_max_input(input, *limit)?),
            Sanitize::Format(kind) => kind
                .validate(input)
                .map_err(|source| FilterError::Format { kind: *kind, source }),
            Sanitize::Class(rule) => {
                if rule.check(input) {
                    Ok(())
                } else {
                    Err(FilterError::Class(*rule))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_match_string_sucess() {
        let filter = Sanitize::MatchString("hello".to_string());
        assert!(filter.validate("hello").is_ok());
    }

    #[test]
    fn test_sanitize_match_string_fail() {
        let filter = Sanitize::MatchString("hello".to_string());
        let res = filter.validate("world");
        assert_eq!(
            res.unwrap_err().to_string(),
            "The value doesn't match with hello, try again!"
        );
    }

    #[test]
    fn test_sanitize_match_strings() {
        let filter = Sanitize::MatchStrings(vec!["A".to_string(), "B".to_string()]);
        assert!(filter.validate("A").is_ok());
        assert!(filter.validate("a").is_err());
        assert_eq!(
            filter.validate("C").unwrap_err().to_string(),
            "The value doesn't match with the options: A, B, try again!"
        );
    }

    #[test]
    fn test_sanitize_match_strings_ignore_case() {
        let filter = Sanitize::MatchStringsIgnoreCase(vec!["Y".to_string(), "N".to_string()]);
        assert!(filter.validate("y").is_ok());
        assert!(filter.validate("N").is_ok());
        assert!(filter.validate("maybe").is_err());
    }

    #[test]
    fn test_sanitize_max_length() {
        let filter = Sanitize::MaxLength(3);
        assert!(filter.validate("abc").is_ok());
        assert_eq!(
            filter.validate("abcd").unwrap_err(),
            FilterError::TooLong(InputTooLong { len: 4, limit: 3 })
        );
    }

    #[test]
    fn test_sanitize_format() {
        let filter = Sanitize::Format(FormatKind::PhoneArea);
        assert!(filter.validate("+62").is_ok());
        let err = filter.validate("+6 2").unwrap_err();
        assert_eq!(
            err,
            FilterError::Format {
                kind: FormatKind::PhoneArea,
                source: FormatError::BadFormatPhone,
            }
        );
        assert_eq!(
            err.to_string(),
            "The value is not a valid phone area code (invalid phone format), try again!"
        );
    }

    #[test]
    fn test_sanitize_class() {
        let filter = Sanitize::Class(ClassRule::Numeric);
        assert!(filter.validate("0123456789").is_ok());
        assert_eq!(
            filter.validate("1.0.1").unwrap_err().to_string(),
            "The value must contain digits only, try again!"
        );
    }

    #[test]
    fn test_sanitize_execute_trims_and_returns_clean_value() {
        let filters = vec![
            Sanitize::Class(ClassRule::AlphabetWithSpace),
            Sanitize::MaxLength(20),
        ];
        let res = Sanitize::execute("  Julius Bernhard \n", &filters);
        assert_eq!(res.unwrap(), "Julius Bernhard");
    }

    #[test]
    fn test_sanitize_execute_stops_at_first_failure() {
        let filters = vec![
            Sanitize::Format(FormatKind::Url),
            Sanitize::MaxLength(3),
        ];
        let res = Sanitize::execute("https:///www.bhinneka.com", &filters);
        assert!(matches!(
            res,
            Err(FilterError::Format {
                kind: FormatKind::Url,
                ..
            })
        ));

        let res = Sanitize::execute("www.bhinneka.com", &filters);
        assert!(matches!(res, Err(FilterError::TooLong(_))));
    }

    #[test]
    fn test_sanitize_execute_no_filters() {
        assert_eq!(Sanitize::execute(" anything ", &[]).unwrap(), "anything");
    }
}
