//! Support-message limits.

/// Maximum number of whitespace-separated words in a support message.
pub const SUPPORT_WORD_LIMIT: usize = 30;

/// Word count as the service defines it: whitespace-separated tokens.
pub fn word_count(message: &str) -> usize {
    message.split_whitespace().count()
}

/// Submission is allowed for 1..=SUPPORT_WORD_LIMIT words.
pub fn can_submit(message: &str) -> bool {
    let words = word_count(message);
    words > 0 && words <= SUPPORT_WORD_LIMIT
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("a b c"), 3);
        assert_eq!(word_count("  a   b  "), 2);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_limit_boundary() {
        let thirty = vec!["palavra"; SUPPORT_WORD_LIMIT].join(" ");
        assert!(can_submit(&thirty));

        let thirty_one = vec!["palavra"; SUPPORT_WORD_LIMIT + 1].join(" ");
        assert!(!can_submit(&thirty_one));
    }

    #[test]
    fn test_empty_disabled() {
        assert!(!can_submit(""));
        assert!(!can_submit("   "));
    }
}
