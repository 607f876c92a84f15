// Text Stats
// Word count and reading time for response payloads

/// Whitespace-separated token count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes at 200 words per minute.
/// Never less than one minute for non-empty text.
pub fn reading_time_minutes(text: &str) -> u32 {
    let words = count_words(text);
    ((words as f64 / 200.0).ceil() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("one two three"), 3);
        assert_eq!(count_words("  spaced   out\ttokens \n"), 3);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_reading_time_floor() {
        assert_eq!(reading_time_minutes("a few words"), 1);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = vec!["word"; 201].join(" ");
        assert_eq!(reading_time_minutes(&text), 2);
    }
}
