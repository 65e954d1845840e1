//! Phone number matching, formatting and extraction.

mod extractor;
pub mod patterns;

pub use extractor::{Extraction, PhoneExtractor};

use std::collections::HashSet;

use patterns::PHONE_PATTERN;

/// The four digit groups of one pattern match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// Operator or area code, 3 digits.
    pub code: String,
    /// Exchange, 3 digits.
    pub part1: String,
    /// First subscriber pair.
    pub part2: String,
    /// Second subscriber pair.
    pub part3: String,
    /// Byte range of the whole match within its line.
    pub position: (usize, usize),
}

impl RawMatch {
    pub fn groups(&self) -> (&str, &str, &str, &str) {
        (&self.code, &self.part1, &self.part2, &self.part3)
    }

    /// Canonical form of this match.
    pub fn canonical(&self) -> String {
        format_number(self.groups())
    }
}

/// Build the canonical `+7(CCC)EEE-AA-BB` string from the digit groups.
///
/// The groups are used as given; the pattern is what guarantees their shape.
pub fn format_number(groups: (&str, &str, &str, &str)) -> String {
    let (code, part1, part2, part3) = groups;
    format!("+7({code}){part1}-{part2}-{part3}")
}

/// All non-overlapping matches in a single line, left to right.
pub fn scan_line(line: &str) -> Vec<RawMatch> {
    PHONE_PATTERN
        .captures_iter(line)
        .filter_map(|caps| {
            let full_match = caps.get(0)?;
            Some(RawMatch {
                code: caps.get(1)?.as_str().to_string(),
                part1: caps.get(2)?.as_str().to_string(),
                part2: caps.get(3)?.as_str().to_string(),
                part3: caps.get(4)?.as_str().to_string(),
                position: (full_match.start(), full_match.end()),
            })
        })
        .collect()
}

/// Canonical numbers collected in first-seen order, without duplicates.
#[derive(Debug, Default)]
pub(crate) struct UniqueNumbers {
    seen: HashSet<String>,
    result: Vec<String>,
}

impl UniqueNumbers {
    /// Scan one line. A bare `\r` also ends a line, so each segment is
    /// matched on its own.
    pub(crate) fn scan(&mut self, line: &str) {
        for segment in line.split('\r') {
            for raw in scan_line(segment) {
                let formatted = raw.canonical();
                if self.seen.insert(formatted.clone()) {
                    self.result.push(formatted);
                }
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.result.len()
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.result
    }
}

/// Unique canonical numbers in an in-memory text, in first-seen order.
pub fn find_numbers(text: &str) -> Vec<String> {
    let mut numbers = UniqueNumbers::default();
    for line in text.lines() {
        numbers.scan(line);
    }
    numbers.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(("916", "123", "45", "67")), "+7(916)123-45-67");
    }

    #[test]
    fn test_format_number_does_not_validate() {
        assert_eq!(format_number(("000", "1", "", "x")), "+7(000)1--x");
    }

    #[test]
    fn test_scan_line_positions() {
        let line = "+7(916)123-45-67 and 8-916-123-45-67";
        let matches = scan_line(line);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].position, (0, 16));
        assert_eq!(&line[matches[1].position.0..matches[1].position.1], "8-916-123-45-67");
        assert_eq!(matches[1].groups(), ("916", "123", "45", "67"));
    }

    #[test]
    fn test_find_numbers_dedups_in_order() {
        let text = "8 916 123 45 67\n8 925 999 88 77\n+7 916 123-45-67\n";
        assert_eq!(
            find_numbers(text),
            vec!["+7(916)123-45-67".to_string(), "+7(925)999-88-77".to_string()]
        );
    }

    #[test]
    fn test_find_numbers_without_prefix() {
        assert_eq!(find_numbers("call 916 123 45 67 now"), vec!["+7(916)123-45-67"]);
    }

    #[test]
    fn test_match_does_not_span_lines() {
        assert!(find_numbers("916 123\n45 67").is_empty());
    }

    #[test]
    fn test_bare_carriage_return_ends_line() {
        assert!(find_numbers("916 123\r45 67").is_empty());
        assert_eq!(
            find_numbers("8 916 123 45 67\r8 925 999 88 77"),
            vec!["+7(916)123-45-67", "+7(925)999-88-77"]
        );
    }

    #[test]
    fn test_no_phone_shaped_digits() {
        assert!(find_numbers("order 12345, room 42").is_empty());
        assert!(find_numbers("").is_empty());
    }
}
