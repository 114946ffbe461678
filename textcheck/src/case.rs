//! Camel-case splitting for display of field names.
//!
//! ```rust
//! use textcheck::case::camel_to_lower_case;
//!
//! assert_eq!(camel_to_lower_case("createdAt"), "created at");
//! assert_eq!(camel_to_lower_case("HTTPServer"), "http server");
//! ```

/// Splits `input` into camel-case words.
///
/// A word starts at an ASCII capital that follows a non-capital, or at the
/// last capital of a run when a non-capital follows it (`HTTPServer` gives
/// `HTTP` and `Server`). Empty fragments are dropped.
pub fn split_camel(input: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut words = Vec::new();
    let mut start = 0;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        if i == 0 || !c.is_ascii_uppercase() {
            continue;
        }

        let prev_upper = chars[i - 1].1.is_ascii_uppercase();
        let next_lower = chars
            .get(i + 1)
            .is_some_and(|&(_, next)| !next.is_ascii_uppercase());

        if !prev_upper || next_lower {
            words.push(&input[start..offset]);
            start = offset;
        }
    }
    words.push(&input[start..]);

    words.retain(|w| !w.is_empty());
    words
}

/// Splits a camel-cased token into words, joins them with a space and
/// lower-cases the result.
pub fn camel_to_lower_case(input: &str) -> String {
    split_camel(input).join(" ").to_lowercase()
}
