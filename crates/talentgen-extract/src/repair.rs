//! Textual repair heuristics for near-JSON completions
//!
//! Each repair is a pure `&str -> String` step. The driver applies them in a
//! fixed order, cumulatively, re-attempting a parse after every step and
//! stopping at the first success. The ordering is pinned by the tests below;
//! callers must not rely on it.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

static RE_TRAILING_COMMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*([}\]])").unwrap()
});

static RE_NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\r\n\t]+").unwrap()
});

static RE_SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" {2,}").unwrap()
});

static RE_COLON_SPACING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""\s*:\s*"#).unwrap()
});

static RE_COMMA_SPACING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""\s*,\s*""#).unwrap()
});

/// A named repair step
pub(crate) type RepairStep = (&'static str, fn(&str) -> String);

/// The fixed repair sequence
pub(crate) const STEPS: [RepairStep; 4] = [
    ("trailing_commas", strip_trailing_commas),
    ("newline_collapse", collapse_newlines),
    ("space_collapse", collapse_spaces),
    ("punctuation_spacing", normalize_punctuation_spacing),
];

/// Remove trailing commas immediately before a closing `}` or `]`
pub(crate) fn strip_trailing_commas(text: &str) -> String {
    RE_TRAILING_COMMA.replace_all(text, "$1").into_owned()
}

/// Collapse literal newline and tab runs into single spaces
///
/// Models sometimes emit raw newlines inside what should be a single-line
/// string value, which is invalid JSON.
pub(crate) fn collapse_newlines(text: &str) -> String {
    RE_NEWLINE_RUN.replace_all(text, " ").into_owned()
}

/// Collapse runs of multiple spaces into one
pub(crate) fn collapse_spaces(text: &str) -> String {
    RE_SPACE_RUN.replace_all(text, " ").into_owned()
}

/// Normalize spacing after `:` and around `,` between quoted tokens
///
/// Defends against spacing irregularities that interact badly with the
/// newline collapse.
pub(crate) fn normalize_punctuation_spacing(text: &str) -> String {
    let text = RE_COLON_SPACING.replace_all(text, "\": ");
    RE_COMMA_SPACING.replace_all(&text, "\", \"").into_owned()
}

/// Apply the repair sequence to an isolated candidate, re-attempting a parse
/// after each step
///
/// Returns the first successfully parsed value, or `None` if every step has
/// been applied and the text still does not parse.
pub(crate) fn reparse(isolated: &str) -> Option<Value> {
    let mut text = isolated.to_string();
    for (name, step) in STEPS {
        text = step(&text);
        if let Ok(value) = serde_json::from_str::<Value>(&text) {
            debug!("Parse recovered after repair step '{}'", name);
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_commas() {
        assert_eq!(strip_trailing_commas(r#"{"a":"b",}"#), r#"{"a":"b"}"#);
        assert_eq!(strip_trailing_commas(r#"["a","b",]"#), r#"["a","b"]"#);
        assert_eq!(strip_trailing_commas(r#"{"a": ["b", ] , }"#), r#"{"a": ["b"] }"#);
    }

    #[test]
    fn test_strip_trailing_commas_leaves_valid_json_alone() {
        let valid = r#"{"a":"b","c":["d","e"]}"#;
        assert_eq!(strip_trailing_commas(valid), valid);
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("a\nb"), "a b");
        assert_eq!(collapse_newlines("a\r\n\tb"), "a b");
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("a    b"), "a b");
        assert_eq!(collapse_spaces("a b"), "a b");
    }

    #[test]
    fn test_normalize_punctuation_spacing() {
        assert_eq!(
            normalize_punctuation_spacing(r#"{"a"  :  "b"}"#),
            r#"{"a": "b"}"#
        );
        assert_eq!(
            normalize_punctuation_spacing(r#"{"a": "b" , "c": "d"}"#),
            r#"{"a": "b", "c": "d"}"#
        );
    }

    #[test]
    fn test_reparse_trailing_comma() {
        let value = reparse(r#"{"a":"b",}"#).unwrap();
        assert_eq!(value["a"], "b");
    }

    #[test]
    fn test_reparse_embedded_newline() {
        let value = reparse("{\"a\":\"line one\nline two\"}").unwrap();
        assert_eq!(value["a"], "line one line two");
    }

    #[test]
    fn test_reparse_stops_at_first_success() {
        // A trailing comma is fixed by the first step; the value keeps the
        // literal double space that a later step would have collapsed
        let value = reparse(r#"{"a":"two  spaces",}"#).unwrap();
        assert_eq!(value["a"], "two  spaces");
    }

    #[test]
    fn test_reparse_gives_up_on_prose() {
        assert!(reparse("{not json at all").is_none());
    }
}
