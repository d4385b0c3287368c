//! Input validation for the duration field.
//!
//! The field behaves like a numeric input: only ASCII digits get in, so a
//! minus sign or stray letters are dropped instead of producing an error.

use crate::constants::MAX_INPUT_DIGITS;

/// Returns true when `c` may be appended to a field currently holding `current`.
pub fn accepts_duration_char(current: &str, c: char) -> bool {
    c.is_ascii_digit() && current.len() < MAX_INPUT_DIGITS
}

/// Parses the duration field into seconds.
///
/// An empty field is zero. The field only ever holds digits, so anything
/// else (not reachable through the UI) is treated as zero as well.
pub fn parse_duration(input: &str) -> u64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_accepted() {
        assert!(accepts_duration_char("", '0'));
        assert!(accepts_duration_char("12", '9'));
    }

    #[test]
    fn test_non_digits_rejected() {
        assert!(!accepts_duration_char("", '-'));
        assert!(!accepts_duration_char("1", '.'));
        assert!(!accepts_duration_char("1", 'e'));
        assert!(!accepts_duration_char("", ' '));
        assert!(!accepts_duration_char("", '٣')); // Non-ASCII digit
    }

    #[test]
    fn test_length_cap() {
        let full = "9".repeat(MAX_INPUT_DIGITS);
        assert!(!accepts_duration_char(&full, '9'));
        assert!(accepts_duration_char(&full[1..], '9'));
        // Largest accepted field still parses
        assert_eq!(parse_duration(&full), 999_999_999);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("0"), 0);
        assert_eq!(parse_duration("90"), 90);
        assert_eq!(parse_duration("007"), 7);
    }

    #[test]
    fn test_parse_invalid_is_zero() {
        assert_eq!(parse_duration("-5"), 0);
        assert_eq!(parse_duration("abc"), 0);
    }
}
