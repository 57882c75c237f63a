/// Text used when the completion holds no bracketed array
pub const EMPTY_ARRAY: &str = "[]";

/// Slice from the first `[` to the last `]`, inclusive.
///
/// Returns `"[]"` when either bracket is missing or they are out of order.
pub fn extract_array(raw: &str) -> &str {
    match (raw.find('['), raw.rfind(']')) {
        (Some(start), Some(end)) if end > start => &raw[start..=end],
        _ => EMPTY_ARRAY,
    }
}
