//! Word count and reading time estimation

/// Assumed reading speed for the estimate
const WORDS_PER_MINUTE: usize = 200;

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes.
///
/// Rounds `words / 200` to the nearest minute, clamped to at least one for
/// any non-empty text — even whitespace-only text reads in one minute, per
/// the reference behavior. Only the empty string reads in zero.
pub fn reading_time_minutes(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    ((word_count(text) + WORDS_PER_MINUTE / 2) / WORDS_PER_MINUTE).max(1)
}
