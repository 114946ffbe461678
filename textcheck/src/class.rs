//! # Character-Class Scanners
//!
//! Single-pass, ASCII-only classification of a string's code points.
//!
//! Each code point is mapped to exactly one [`CharClass`] by
//! [`CharClass::of`]; a scan collects those into a [`ClassTally`] and the
//! public scanners are predicates over the tally. No pattern is compiled
//! and no backtracking happens, so each call is `O(n)`.
//!
//! Only ASCII letters and digits count as letters and digits. `é`, `٣` and
//! every other non-ASCII code point fall into [`CharClass::Other`].
//!
//! Scanners answer with a plain `bool`. Callers that need a reason can use
//! [`crate::utils::Sanitize`], which reports the failed [`ClassRule`].
//!
//! ## Example
//!
//! ```rust
//! use textcheck::class::{validate_alphanumeric, validate_numeric};
//!
//! assert!(validate_numeric("0123456789"));
//! assert!(!validate_numeric("1.0.1"));
//! assert!(validate_alphanumeric("okesip12", true));
//! assert!(!validate_alphanumeric("1FgH^*", false));
//! ```
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Category of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `A-Z`
    Upper,
    /// `a-z`
    Lower,
    /// `0-9`
    Digit,
    /// U+0020 only. Tabs and newlines are [`CharClass::Other`].
    Space,
    /// Remaining printable ASCII: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``
    Punct,
    /// Anything outside ASCII 32..=126.
    Other,
}

impl CharClass {
    /// Classifies `c` by ASCII range.
    pub fn of(c: char) -> CharClass {
        match c {
            'A'..='Z' => CharClass::Upper,
            'a'..='z' => CharClass::Lower,
            '0'..='9' => CharClass::Digit,
            ' ' => CharClass::Space,
            '!'..='~' => CharClass::Punct,
            _ => CharClass::Other,
        }
    }
}

/// Per-call counters, one per [`CharClass`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassTally {
    pub upper: usize,
    pub lower: usize,
    pub digit: usize,
    pub space: usize,
    pub punct: usize,
    pub other: usize,
}

impl ClassTally {
    /// Scans `input` once and counts every code point.
    pub fn scan(input: &str) -> ClassTally {
        input.chars().fold(ClassTally::default(), |mut tally, c| {
            tally.record(CharClass::of(c));
            tally
        })
    }

    fn record(&mut self, class: CharClass) {
        match class {
            CharClass::Upper => self.upper += 1,
            CharClass::Lower => self.lower += 1,
            CharClass::Digit => self.digit += 1,
            CharClass::Space => self.space += 1,
            CharClass::Punct => self.punct += 1,
            CharClass::Other => self.other += 1,
        }
    }

    pub fn count(&self, class: CharClass) -> usize {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digit,
            CharClass::Space => self.space,
            CharClass::Punct => self.punct,
            CharClass::Other => self.other,
        }
    }

    pub fn letters(&self) -> usize {
        self.upper + self.lower
    }

    pub fn total(&self) -> usize {
        self.letters() + self.digit + self.space + self.punct + self.other
    }

    /// True when no code point falls outside `allowed`.
    pub fn only(&self, allowed: &[CharClass]) -> bool {
        [
            CharClass::Upper,
            CharClass::Lower,
            CharClass::Digit,
            CharClass::Space,
            CharClass::Punct,
            CharClass::Other,
        ]
        .into_iter()
        .filter(|class| !allowed.contains(class))
        .all(|class| self.count(class) == 0)
    }
}

const LETTERS: [CharClass; 2] = [CharClass::Upper, CharClass::Lower];
const LETTERS_SPACE: [CharClass; 3] = [CharClass::Upper, CharClass::Lower, CharClass::Space];
const ALNUM: [CharClass; 3] = [CharClass::Upper, CharClass::Lower, CharClass::Digit];
const ALNUM_SPACE: [CharClass; 4] = [
    CharClass::Upper,
    CharClass::Lower,
    CharClass::Digit,
    CharClass::Space,
];

/// Only digits, at least one.
pub fn validate_numeric(input: &str) -> bool {
    let tally = ClassTally::scan(input);
    tally.only(&[CharClass::Digit]) && tally.digit > 0
}

/// Only letters, at least one.
pub fn validate_alphabet(input: &str) -> bool {
    let tally = ClassTally::scan(input);
    tally.only(&LETTERS) && tally.letters() > 0
}

/// Only letters and spaces, at least one of either. A string of spaces passes.
pub fn validate_alphabet_with_space(input: &str) -> bool {
    let tally = ClassTally::scan(input);
    tally.only(&LETTERS_SPACE) && tally.letters() + tally.space > 0
}

/// Only letters and digits. With `must`, both a letter and a digit are
/// required; otherwise one of either is enough.
pub fn validate_alphanumeric(input: &str, must: bool) -> bool {
    let tally = ClassTally::scan(input);
    if !tally.only(&ALNUM) {
        return false;
    }

    if must {
        tally.letters() > 0 && tally.digit > 0
    } else {
        tally.letters() + tally.digit > 0
    }
}

/// Letters, digits and spaces. With `must`, a letter, a digit and a space
/// all have to appear.
pub fn validate_alphanumeric_with_space(input: &str, must: bool) -> bool {
    let tally = ClassTally::scan(input);
    if !tally.only(&ALNUM_SPACE) {
        return false;
    }

    if must {
        tally.letters() > 0 && tally.digit > 0 && tally.space > 0
    } else {
        tally.letters() + tally.digit + tally.space > 0
    }
}

/// Printable ASCII only (32..=126).
///
/// The empty string is accepted: nothing in it falls outside the range.
pub fn validate_latin_only(input: &str) -> bool {
    ClassTally::scan(input).other == 0
}

/// A scanner selected by name, as used by field filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassRule {
    Numeric,
    Alphabet,
    AlphabetWithSpace,
    Alphanumeric { must: bool },
    AlphanumericWithSpace { must: bool },
    LatinOnly,
}

impl ClassRule {
    /// Runs the scanner this rule names.
    pub fn check(self, input: &str) -> bool {
        match self {
            ClassRule::Numeric => validate_numeric(input),
            ClassRule::Alphabet => validate_alphabet(input),
            ClassRule::AlphabetWithSpace => validate_alphabet_with_space(input),
            ClassRule::Alphanumeric { must } => validate_alphanumeric(input, must),
            ClassRule::AlphanumericWithSpace { must } => {
                validate_alphanumeric_with_space(input, must)
            }
            ClassRule::LatinOnly => validate_latin_only(input),
        }
    }
}

impl Display for ClassRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "digits only"),
            Self::Alphabet => write!(f, "letters only"),
            Self::AlphabetWithSpace => write!(f, "letters and spaces only"),
            Self::Alphanumeric { must: false } => write!(f, "letters and digits only"),
            Self::Alphanumeric { must: true } => {
                write!(f, "letters and digits, with at least one of each")
            }
            Self::AlphanumericWithSpace { must: false } => {
                write!(f, "letters, digits and spaces only")
            }
            Self::AlphanumericWithSpace { must: true } => {
                write!(f, "letters, digits and spaces, with at least one of each")
            }
            Self::LatinOnly => write!(f, "printable latin characters only"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_of_boundaries() {
        assert_eq!(CharClass::of('A'), CharClass::Upper);
        assert_eq!(CharClass::of('Z'), CharClass::Upper);
        assert_eq!(CharClass::of('a'), CharClass::Lower);
        assert_eq!(CharClass::of('z'), CharClass::Lower);
        assert_eq!(CharClass::of('0'), CharClass::Digit);
        assert_eq!(CharClass::of('9'), CharClass::Digit);
        assert_eq!(CharClass::of(' '), CharClass::Space);
        for c in ['!', '/', ':', '@', '[', '`', '{', '~'] {
            assert_eq!(CharClass::of(c), CharClass::Punct, "{c:?}");
        }
        for c in ['\t', '\n', '\u{7f}', 'é', 'Ж', '٣', '😀'] {
            assert_eq!(CharClass::of(c), CharClass::Other, "{c:?}");
        }
    }

    #[test]
    fn test_class_tally_scan() {
        let tally = ClassTally::scan("Ab1 !é");
        assert_eq!(
            tally,
            ClassTally {
                upper: 1,
                lower: 1,
                digit: 1,
                space: 1,
                punct: 1,
                other: 1,
            }
        );
        assert_eq!(tally.total(), 6);
        assert!(ClassTally::scan("").only(&[]));
    }

    #[test]
    fn test_class_numeric() {
        assert!(validate_numeric("0123456789"));
        assert!(!validate_numeric("1.0.1"));
        assert!(!validate_numeric(""));
        assert!(!validate_numeric("12 3"));
        assert!(!validate_numeric("١٢٣"));
    }

    #[test]
    fn test_class_alphabet() {
        assert!(validate_alphabet("huFtBanGeT"));
        assert!(!validate_alphabet("huFtBanGeT1"));
        assert!(!validate_alphabet("hu ft"));
        assert!(!validate_alphabet(""));
        assert!(!validate_alphabet("café"));
    }

    #[test]
    fn test_class_alphabet_with_space() {
        assert!(validate_alphabet_with_space("huFt BanGeT"));
        assert!(validate_alphabet_with_space("huFtBanGeT"));
        assert!(validate_alphabet_with_space("   "));
        assert!(!validate_alphabet_with_space("huFt BanGeT!"));
        assert!(!validate_alphabet_with_space(""));
    }

    #[test]
    fn test_class_alphanumeric() {
        assert!(validate_alphanumeric("okesip12", true));
        assert!(!validate_alphanumeric("okesip", true));
        assert!(!validate_alphanumeric("12345", true));
        assert!(validate_alphanumeric("okesip", false));
        assert!(validate_alphanumeric("12345", false));
        assert!(!validate_alphanumeric("1FgH^*", false));
        assert!(!validate_alphanumeric("oke sip1", false));
        assert!(!validate_alphanumeric("", false));
    }

    #[test]
    fn test_class_alphanumeric_with_space() {
        assert!(!validate_alphanumeric_with_space("okesip1", true));
        assert!(validate_alphanumeric_with_space("oke sip1", true));
        assert!(validate_alphanumeric_with_space("oke sip1", false));
        assert!(validate_alphanumeric_with_space("okesip", false));
        assert!(validate_alphanumeric_with_space(" ", false));
        assert!(!validate_alphanumeric_with_space("oke sip", true));
        assert!(!validate_alphanumeric_with_space("oke-sip1", false));
        assert!(!validate_alphanumeric_with_space("", false));
    }

    #[test]
    fn test_class_latin_only() {
        assert!(validate_latin_only("Some days are beautiful. :) :*"));
        assert!(validate_latin_only(r#"<img src="http://example.com/image.jpg" />"#));
        assert!(validate_latin_only(""));
        assert!(!validate_latin_only("Selamat pagi, 世界"));
        assert!(!validate_latin_only("tab\there"));
    }

    #[test]
    fn test_class_rule_check_matches_scanner() {
        let input = "oke sip1";
        assert_eq!(
            ClassRule::AlphanumericWithSpace { must: true }.check(input),
            validate_alphanumeric_with_space(input, true)
        );
        assert!(!ClassRule::Numeric.check(input));
        assert!(ClassRule::LatinOnly.check(input));
    }

    #[test]
    fn test_class_rule_serde() {
        let rule: ClassRule = serde_json::from_str(r#"{"alphanumeric":{"must":true}}"#).unwrap();
        assert_eq!(rule, ClassRule::Alphanumeric { must: true });
        let rule: ClassRule = serde_json::from_str(r#""latin_only""#).unwrap();
        assert_eq!(rule, ClassRule::LatinOnly);
    }
}
