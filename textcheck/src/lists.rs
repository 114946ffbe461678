//! Small helpers over string lists and raw input length.
use thiserror::Error;

/// Input exceeded the allowed byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value is too long ({len} > {limit})")]
pub struct InputTooLong {
    pub len: usize,
    pub limit: usize,
}

/// Rejects `input` when its byte length is over `limit`.
pub fn validate_max_input(input: &str, limit: usize) -> Result<(), InputTooLong> {
    if input.len() > limit {
        return Err(InputTooLong {
            len: input.len(),
            limit,
        });
    }
    Ok(())
}

/// Whether `needle` is in `list`, optionally ignoring case.
pub fn string_in_slice<S: AsRef<str>>(needle: &str, list: &[S], case_sensitive: bool) -> bool {
    if case_sensitive {
        list.iter().any(|v| v.as_ref() == needle)
    } else {
        let needle = needle.to_lowercase();
        list.iter().any(|v| v.as_ref().to_lowercase() == needle)
    }
}

/// Replaces every `find[i]` with `replace[i]`, pair by pair, in order.
///
/// Finds without a matching replacement are skipped. Empty finds are
/// ignored too, so nothing is inserted between characters.
pub fn string_array_replace<S: AsRef<str>>(input: &str, find: &[S], replace: &[S]) -> String {
    find.iter()
        .zip(replace)
        .fold(input.to_string(), |acc, (from, to)| {
            let from = from.as_ref();
            if from.is_empty() || !acc.contains(from) {
                acc
            } else {
                acc.replace(from, to.as_ref())
            }
        })
}
