//! Regex patterns for Russian phone numbers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Optional +7/8 prefix, then 3-3-2-2 digit groups with loose separators.
    // Only the four digit groups are captured. `\x1c-\x1f` count as
    // whitespace alongside `\s`.
    pub static ref PHONE_PATTERN: Regex = Regex::new(
        r"(?:\+7|8)?[\s\x1c-\x1f\-.(]*(\d{3})[\s\x1c-\x1f\-.)]*(\d{3})[\s\x1c-\x1f\-]*(\d{2})[\s\x1c-\x1f\-]*(\d{2})"
    ).unwrap();

    // Shape of a canonical number produced by `format_number`.
    pub static ref CANONICAL_PATTERN: Regex = Regex::new(
        r"^\+7\(\d{3}\)\d{3}-\d{2}-\d{2}$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(text: &str) -> Option<[String; 4]> {
        PHONE_PATTERN.captures(text).map(|caps| {
            [1, 2, 3, 4].map(|i| caps[i].to_string())
        })
    }

    #[test]
    fn test_prefix_is_not_captured() {
        let caps = PHONE_PATTERN.captures("+7 (916) 123-45-67").unwrap();
        assert_eq!(caps.get(0).unwrap().as_str(), "+7 (916) 123-45-67");
        assert_eq!(&caps[1], "916");
        assert_eq!(caps.len(), 5);
    }

    #[test]
    fn test_trunk_prefix_eight() {
        assert_eq!(
            groups("8.916.123-45-67"),
            Some(["916", "123", "45", "67"].map(String::from))
        );
    }

    #[test]
    fn test_bare_digit_run() {
        assert_eq!(
            groups("9161234567"),
            Some(["916", "123", "45", "67"].map(String::from))
        );
    }

    #[test]
    fn test_period_not_allowed_between_short_groups() {
        // Only spaces and hyphens may separate the trailing 2-digit groups.
        assert!(groups("916 123 45.67").is_none());
    }

    #[test]
    fn test_short_runs_do_not_match() {
        assert!(groups("12345").is_none());
        assert!(groups("916 123 45 6").is_none());
    }

    #[test]
    fn test_information_separators_are_whitespace() {
        assert_eq!(
            groups("916\x1c123\x1f45\x1d67"),
            Some(["916", "123", "45", "67"].map(String::from))
        );
    }

    #[test]
    fn test_canonical_pattern() {
        assert!(CANONICAL_PATTERN.is_match("+7(916)123-45-67"));
        assert!(!CANONICAL_PATTERN.is_match("+7(916)123-45-6"));
        assert!(!CANONICAL_PATTERN.is_match("8(916)123-45-67"));
    }
}
