//! Literal substring search over a response body.

/// Return true when `target` occurs in `body`.
///
/// The search compares raw bytes, case-sensitively, with no decoding,
/// trimming or normalisation. Invalid UTF-8 in the body never matches text
/// in the target. An empty target is always found.
pub fn find_string_in_content(body: &[u8], target: &str) -> bool {
    let needle = target.as_bytes();
    if needle.is_empty() {
        return true;
    }

    body.windows(needle.len()).any(|window| window == needle)
}
