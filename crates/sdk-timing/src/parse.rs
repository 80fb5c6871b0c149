//! Integer parsing for fixed-width numeric fields.

/// Parse a run of ASCII digits into an integer.
///
/// Returns `None` for an empty string, any non-digit byte (signs and
/// whitespace included), or a value that does not fit in an `i64`.
pub fn parse_integer(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.bytes().try_fold(0i64, |acc, b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    })
}
