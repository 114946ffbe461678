//! # textcheck
//!
//! Stateless text validation, character-class scanning and identifier
//! generation helpers for request-handling code.
//!
//! ## Features
//!
//! - **Format validators** - Email, URL, phone number and phone area code checks
//!   backed by anchored patterns compiled once per process
//! - **Character-class scanners** - Numeric, alphabetic, alphanumeric and latin-only
//!   checks in a single ASCII pass
//! - **Identifier generation** - Random strings, random digit strings and dated
//!   identifiers, with an injectable generator for tests and shared use
//! - **Case transformer** - `camelCase` field names rendered as lower-case words
//! - **Field filters** - Composable [`utils::Sanitize`] rules with readable errors
//!   and an interactive [`utils::Terminal`] prompt
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! textcheck = "0.1"
//! ```
//!
//! ## Usage Examples
//!
//! ### Format validation
//!
//! ```rust
//! use textcheck::{validate_email, validate_phone_area_number, validate_url, FormatError};
//!
//! assert!(validate_email("julius.bernhard@bhinneka.com").is_ok());
//! assert!(validate_url("www.bhinneka.com").is_ok());
//! assert_eq!(validate_phone_area_number("+6 2"), Err(FormatError::BadFormatPhone));
//! ```
//!
//! ### Character classes
//!
//! ```rust
//! use textcheck::{validate_alphanumeric_with_space, validate_latin_only};
//!
//! assert!(validate_alphanumeric_with_space("oke sip1", true));
//! assert!(!validate_alphanumeric_with_space("okesip1", true));
//! assert!(!validate_latin_only("naïve"));
//! ```
//!
//! ### Identifiers
//!
//! ```rust
//! use textcheck::{generate_random_id, random_number};
//!
//! let order = generate_random_id(6, Some("SO"));
//! let pin = random_number(4);
//! assert!(order.starts_with("SO"));
//! assert_eq!(pin.len(), 4);
//! ```
//!
//! ### Field filters
//!
//! ```rust
//! use textcheck::class::ClassRule;
//! use textcheck::utils::Sanitize;
//!
//! let name = Sanitize::execute(
//!     " Julius Bernhard ",
//!     &[Sanitize::MaxLength(50), Sanitize::Class(ClassRule::AlphabetWithSpace)],
//! )
//! .unwrap();
//! assert_eq!(name, "Julius Bernhard");
//! ```
//!
//! ## Error Handling
//!
//! Format validators return `Result<(), FormatError>` with one classification
//! per format. Character-class scanners return `bool` only; use
//! [`utils::Sanitize`] when a reason is needed.
//!
//! ## Limitations
//!
//! - Character classes are ASCII-only.
//! - Email checking covers the common addr-spec grammar, not all of RFC 5322.
//! - Random identifiers are not cryptographically secure and may collide.

pub mod case;

pub mod class;

pub mod format;

pub mod ident;

pub mod lists;

pub mod patterns;

pub mod utils;

pub use case::camel_to_lower_case;
pub use class::{
    validate_alphabet, validate_alphabet_with_space, validate_alphanumeric,
    validate_alphanumeric_with_space, validate_latin_only, validate_numeric,
};
pub use format::{
    FormatError, FormatKind, validate_email, validate_phone_area_number, validate_phone_number,
    validate_url,
};
pub use ident::{generate_random_id, random_number, random_string};
pub use lists::{string_array_replace, string_in_slice, validate_max_input};
