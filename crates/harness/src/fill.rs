//! Fixed-length boundary text
//!
//! Length rules are probed with strings of an exact length. The text cycles
//! through a fixed digit list so the same length always yields the same
//! string and no randomness leaks into a test run.

/// Characters cycled through by [`fill_to_length`]. `8` is left out.
pub const FILL_CHARACTERS: &str = "012345679";

/// Return a string of exactly `length` characters cycling through
/// [`FILL_CHARACTERS`]
///
/// A length of zero or below yields the empty string, so `min - 1` can be
/// passed through without clamping at the call site.
///
/// # Examples
///
/// ```
/// use fieldcheck_harness::fill_to_length;
///
/// assert_eq!(fill_to_length(4), "0123");
/// assert_eq!(fill_to_length(11), "01234567901");
/// assert_eq!(fill_to_length(-1), "");
/// ```
pub fn fill_to_length(length: i64) -> String {
    if length <= 0 {
        return String::new();
    }
    FILL_CHARACTERS.chars().cycle().take(length as usize).collect()
}
