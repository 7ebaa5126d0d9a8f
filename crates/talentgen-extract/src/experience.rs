//! Normalization for the free-text "years of experience" field
//!
//! Completions are asked for `<n>-<m> years` but return everything from
//! "5 years" to "three to five" to "senior level". Callers funnel the raw
//! field through `normalize_experience_range` before presenting it.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Fallback range used when no digits can be found at all
pub const DEFAULT_EXPERIENCE_RANGE: &str = "2-4 years";

static RE_WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+-\d+ years$").unwrap()
});

static RE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:-|to)\s*(\d+)").unwrap()
});

static RE_SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+").unwrap()
});

/// Coerce a raw experience string into the canonical `N-M years` form
///
/// In order:
/// 1. already well-formed input is returned unchanged
/// 2. two integers separated by a hyphen or "to" are reformatted
/// 3. a single integer N becomes `max(1, N-1)-(N+1) years`
/// 4. anything else falls back to [`DEFAULT_EXPERIENCE_RANGE`]
pub fn normalize_experience_range(raw: &str) -> String {
    let trimmed = raw.trim();

    if RE_WELL_FORMED.is_match(trimmed) {
        return trimmed.to_string();
    }

    if let Some(caps) = RE_RANGE.captures(trimmed) {
        if let (Ok(lo), Ok(hi)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
            return format!("{}-{} years", lo, hi);
        }
    }

    if let Some(m) = RE_SINGLE.find(trimmed) {
        if let Ok(n) = m.as_str().parse::<u32>() {
            return format!("{}-{} years", n.saturating_sub(1).max(1), n + 1);
        }
    }

    debug!("No usable digits in experience field '{}', using default", trimmed);
    DEFAULT_EXPERIENCE_RANGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_is_unchanged() {
        assert_eq!(normalize_experience_range("2-4 years"), "2-4 years");
        assert_eq!(normalize_experience_range("10-15 years"), "10-15 years");
    }

    #[test]
    fn test_hyphen_range_is_reformatted() {
        assert_eq!(normalize_experience_range("3 - 5 yrs"), "3-5 years");
        assert_eq!(normalize_experience_range("around 2-4"), "2-4 years");
    }

    #[test]
    fn test_worded_range_is_reformatted() {
        assert_eq!(normalize_experience_range("3 to 5 years"), "3-5 years");
        assert_eq!(normalize_experience_range("5 TO 8 years of experience"), "5-8 years");
    }

    #[test]
    fn test_single_integer_is_widened() {
        assert_eq!(normalize_experience_range("5 years"), "4-6 years");
        assert_eq!(normalize_experience_range("about 7"), "6-8 years");
    }

    #[test]
    fn test_single_integer_floor_is_one() {
        assert_eq!(normalize_experience_range("1 year"), "1-2 years");
        assert_eq!(normalize_experience_range("0 years"), "1-1 years");
    }

    #[test]
    fn test_no_digits_falls_back_to_default() {
        assert_eq!(normalize_experience_range("senior level"), "2-4 years");
        assert_eq!(normalize_experience_range(""), "2-4 years");
    }

    #[test]
    fn test_whitespace_is_trimmed_first() {
        assert_eq!(normalize_experience_range("  2-4 years  "), "2-4 years");
    }
}
