pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated minutes to read `content`, rounded up, never less than one.
pub fn estimate_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
