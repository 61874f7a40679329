//! Duration cell parsing
//!
//! The tracker renders durations as free text like "1h 30m". The first
//! 1-2 digit number is taken as hours and the second as minutes; anything
//! without two such numbers is rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AppError;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}").unwrap());

pub(crate) fn parse_duration(text: &str) -> Result<(u32, u32), AppError> {
    let mut numbers = NUMBER_RE.find_iter(text);
    match (numbers.next(), numbers.next()) {
        (Some(hours), Some(minutes)) => Ok((
            hours.as_str().parse().unwrap_or(0),
            minutes.as_str().parse().unwrap_or(0),
        )),
        _ => Err(AppError::InvalidDuration {
            input: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_and_minutes() {
        assert_eq!(parse_duration("1h 30m").unwrap(), (1, 30));
        assert_eq!(parse_duration("12h 5m").unwrap(), (12, 5));
        assert_eq!(parse_duration("0h 0m").unwrap(), (0, 0));
    }

    #[test]
    fn tolerates_surrounding_text() {
        assert_eq!(parse_duration("  2h  45m logged").unwrap(), (2, 45));
    }

    #[test]
    fn rejects_text_without_two_numbers() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("3h").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn error_names_the_offending_text() {
        let err = parse_duration("3h").unwrap_err();
        assert!(err.to_string().contains("3h"));
    }

    #[test]
    fn long_numbers_split_at_two_digits() {
        // 1-2 digit extraction, matching the original scraper: a 3+ digit
        // run contributes its first two digits as hours.
        assert_eq!(parse_duration("100m").unwrap(), (10, 0));
    }
}
