//! Topic validation performed before any network activity.

use thiserror::Error;

/// Characters the topic input accepts while typing.
pub const TOPIC_INPUT_MAX_CHARS: usize = 100;

/// Upper bound enforced at submission time.
///
/// Larger than [`TOPIC_INPUT_MAX_CHARS`], so it only triggers when the input
/// limit is bypassed (pasted through devtools, injected programmatically).
pub const TOPIC_MAX_CHARS: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Topic tidak boleh kosong!")]
    Empty,
    #[error("Topic Maksimal 512 karakter.")]
    TooLong { len: usize, max: usize },
}

/// Whitespace as the browser trims it; includes the byte order mark.
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Topic length in UTF-16 code units, the unit the input control counts in.
fn topic_len(topic: &str) -> usize {
    topic.encode_utf16().count()
}

/// Check a topic before submission.
///
/// The emptiness check looks at the trimmed text; the length check counts
/// UTF-16 code units of the text as typed.
pub fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim_matches(is_trimmed).is_empty() {
        return Err(ValidationError::Empty);
    }
    let len = topic_len(topic);
    if len > TOPIC_MAX_CHARS {
        return Err(ValidationError::TooLong {
            len,
            max: TOPIC_MAX_CHARS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_rejected() {
        assert_eq!(validate_topic(""), Err(ValidationError::Empty));
        assert_eq!(validate_topic("   "), Err(ValidationError::Empty));
        assert_eq!(validate_topic("\t\n "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_length_limit() {
        assert_eq!(validate_topic(&"a".repeat(TOPIC_MAX_CHARS)), Ok(()));
        assert_eq!(
            validate_topic(&"a".repeat(TOPIC_MAX_CHARS + 1)),
            Err(ValidationError::TooLong {
                len: TOPIC_MAX_CHARS + 1,
                max: TOPIC_MAX_CHARS
            })
        );
    }

    #[test]
    fn test_length_counts_utf16_units_not_bytes() {
        // 512 two-byte characters is 1024 bytes but only 512 UTF-16 units.
        assert_eq!(validate_topic(&"é".repeat(TOPIC_MAX_CHARS)), Ok(()));
    }

    #[test]
    fn test_astral_characters_count_twice() {
        // Each emoji is a surrogate pair: 300 of them are 600 units.
        assert_eq!(
            validate_topic(&"😀".repeat(300)),
            Err(ValidationError::TooLong { len: 600, max: 512 })
        );
        assert_eq!(validate_topic(&"😀".repeat(256)), Ok(()));
    }

    #[test]
    fn test_byte_order_mark_is_blank() {
        assert_eq!(validate_topic("\u{FEFF}"), Err(ValidationError::Empty));
        assert_eq!(validate_topic(" \u{FEFF}\u{00A0}\n"), Err(ValidationError::Empty));
        assert_eq!(validate_topic("\u{FEFF}cats"), Ok(()));
    }

    #[test]
    fn test_surrounding_whitespace_counts_toward_length() {
        let topic = format!(" {} ", "a".repeat(TOPIC_MAX_CHARS - 1));
        assert!(matches!(
            validate_topic(&topic),
            Err(ValidationError::TooLong { len: 513, .. })
        ));
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(ValidationError::Empty.to_string(), "Topic tidak boleh kosong!");
        assert_eq!(
            ValidationError::TooLong { len: 600, max: 512 }.to_string(),
            "Topic Maksimal 512 karakter."
        );
    }

    #[test]
    fn test_regular_topic_accepted() {
        assert_eq!(validate_topic("cats"), Ok(()));
        assert_eq!(validate_topic("  sejarah kopi  "), Ok(()));
    }
}
