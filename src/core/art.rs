//! Fenced-block capture from assistant replies.

/// The 3-character delimiter bracketing an ascii art excerpt.
pub const FENCE: &str = "```";

/// Extracts the substring from the first fence through the end of the last
/// fence, inclusive. Returns `None` when fewer than two fences are present.
pub fn extract_fenced_block(text: &str) -> Option<&str> {
    let start = text.find(FENCE)?;
    let last = text.rfind(FENCE)?;
    if last == start {
        return None;
    }
    Some(&text[start..last + FENCE.len()])
}
